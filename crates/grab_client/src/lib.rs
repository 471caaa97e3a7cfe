//! Grab client: HTTP gateway to the download server and the background poll
//! loop feeding the UI.
mod gateway;
mod handle;
mod wire;

pub use gateway::{
    ClientSettings, Gateway, GatewayError, PollError, ReqwestGateway, SubmissionReceipt,
    DEFAULT_BASE_URL, SERVER_ERROR_FALLBACK,
};
pub use handle::{ClientEvent, ClientHandle, CycleId};
pub use wire::{ProgressWire, WireStatus};
