pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationBody {
    Text(String),
    /// Rendered as a hyperlink; `href` is a server-relative path resolved
    /// against the configured base URL by the shell.
    Link { label: String, href: String },
}

/// Transient flash message. Lives until dismissed or until its display
/// window elapses, whichever comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub body: NotificationBody,
}
