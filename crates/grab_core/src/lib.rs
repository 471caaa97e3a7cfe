//! Grab core: pure controller state machine and view-model types.
mod effect;
mod msg;
mod notification;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notification::{Notification, NotificationBody, NotificationId, NotificationKind};
pub use state::{
    AppState, BarTint, CycleId, Phase, ProgressSnapshot, SnapshotStatus, StatusLine,
    SubmissionFailure, SubmissionReceipt,
};
pub use update::{update, PLAYLIST_REJECTED, UNKNOWN_ERROR};
pub use view_model::{AppViewModel, NotificationView};
