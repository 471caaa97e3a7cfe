use crate::notification::{Notification, NotificationBody, NotificationId, NotificationKind};
use crate::view_model::{AppViewModel, NotificationView};

pub type CycleId = u64;

/// Lifecycle of a single submission cycle. The trigger control is enabled
/// again in both terminal states, so they are Idle-equivalent for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Polling,
    Completed,
    Failed,
}

/// One result of the periodic status poll. Each snapshot fully replaces the
/// previous one in the UI; nothing is merged or accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub status: SnapshotStatus,
    pub progress: Option<f64>,
    pub error: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotStatus {
    /// Server has no download running yet; the snapshot is ignored.
    Idle,
    Downloading,
    Complete,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub message: String,
}

/// Color cue applied to the progress bar. The two failure tints are distinct
/// on purpose: the server-side failure path and the poll-reported failure
/// path paint the bar differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarTint {
    #[default]
    Neutral,
    SubmitError,
    PollError,
}

/// Status line rendered under the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    #[default]
    Preparing,
    InProgress,
    Converted,
    Completed,
    Error,
}

impl StatusLine {
    pub fn text(self) -> &'static str {
        match self {
            StatusLine::Preparing => "Preparando download...",
            StatusLine::InProgress => "Download em progresso...",
            StatusLine::Converted => "Conversão finalizada!",
            StatusLine::Completed => "Download completo!",
            StatusLine::Error => "Erro no download",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    cycle: CycleId,
    phase: Phase,
    /// True between `StartPolling` and the matching `StopPolling`. Snapshots
    /// arriving outside this window are stale and must not be applied.
    poll_active: bool,
    panel_visible: bool,
    percent: u8,
    bar_animated: bool,
    bar_tint: BarTint,
    status: StatusLine,
    notifications: Vec<Notification>,
    next_notification: NotificationId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url_input: self.url_input.clone(),
            panel_visible: self.panel_visible,
            percent: self.percent,
            status: self.status,
            bar_animated: self.bar_animated,
            bar_tint: self.bar_tint,
            submit_enabled: !self.cycle_in_flight(),
            notifications: self
                .notifications
                .iter()
                .map(|notification| NotificationView {
                    id: notification.id,
                    kind: notification.kind,
                    text: match &notification.body {
                        NotificationBody::Text(text) => text.clone(),
                        NotificationBody::Link { label, .. } => label.clone(),
                    },
                    link: match &notification.body {
                        NotificationBody::Link { href, .. } => Some(href.clone()),
                        NotificationBody::Text(_) => None,
                    },
                })
                .collect(),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn cycle(&self) -> CycleId {
        self.cycle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text {
            self.url_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn cycle_in_flight(&self) -> bool {
        matches!(self.phase, Phase::Submitting | Phase::Polling)
    }

    pub(crate) fn poll_active(&self) -> bool {
        self.poll_active
    }

    /// Opens a new submission cycle and resets the progress panel to its
    /// starting appearance.
    pub(crate) fn begin_cycle(&mut self) -> CycleId {
        self.cycle += 1;
        self.phase = Phase::Submitting;
        self.poll_active = true;
        self.panel_visible = true;
        self.percent = 0;
        self.bar_animated = true;
        self.bar_tint = BarTint::Neutral;
        self.status = StatusLine::Preparing;
        self.dirty = true;
        self.cycle
    }

    pub(crate) fn apply_progress(&mut self, progress: Option<f64>) {
        // A snapshot without a number keeps the last rendered value.
        if let Some(value) = progress {
            self.percent = round_percent(value);
        }
        self.dirty = true;
    }

    pub(crate) fn note_downloading(&mut self) {
        self.phase = Phase::Polling;
        self.status = StatusLine::InProgress;
        self.dirty = true;
    }

    /// Poll reported `complete`: the bar settles but the cycle stays open
    /// until the submission response delivers the filename.
    pub(crate) fn note_converted(&mut self) {
        self.phase = Phase::Polling;
        self.poll_active = false;
        self.bar_animated = false;
        self.status = StatusLine::Converted;
        self.dirty = true;
    }

    pub(crate) fn complete_cycle(&mut self) {
        self.phase = Phase::Completed;
        self.poll_active = false;
        self.percent = 100;
        self.bar_animated = false;
        self.status = StatusLine::Completed;
        self.dirty = true;
    }

    pub(crate) fn fail_cycle(&mut self, tint: BarTint) {
        self.phase = Phase::Failed;
        self.poll_active = false;
        self.bar_animated = false;
        self.bar_tint = tint;
        self.status = StatusLine::Error;
        self.dirty = true;
    }

    pub(crate) fn push_notification(
        &mut self,
        kind: NotificationKind,
        body: NotificationBody,
    ) -> NotificationId {
        self.next_notification += 1;
        let id = self.next_notification;
        // Newest notification goes on top of the list.
        self.notifications.insert(0, Notification { id, kind, body });
        self.dirty = true;
        id
    }

    pub(crate) fn remove_notification(&mut self, id: NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|notification| notification.id != id);
        if self.notifications.len() != before {
            self.dirty = true;
        }
    }
}

fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
