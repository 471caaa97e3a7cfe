use crate::notification::{NotificationId, NotificationKind};
use crate::state::{BarTint, StatusLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub url_input: String,
    pub panel_visible: bool,
    pub percent: u8,
    pub status: StatusLine,
    pub bar_animated: bool,
    pub bar_tint: BarTint,
    pub submit_enabled: bool,
    pub notifications: Vec<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub text: String,
    pub link: Option<String>,
}
