#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlChanged(String),
    /// User triggered the download form.
    SubmitClicked,
    /// The submission request resolved, one way or the other.
    SubmissionResolved {
        cycle: crate::CycleId,
        result: Result<crate::SubmissionReceipt, crate::SubmissionFailure>,
    },
    /// The periodic poll produced a progress snapshot.
    SnapshotArrived {
        cycle: crate::CycleId,
        snapshot: crate::ProgressSnapshot,
    },
    /// The periodic poll failed in transport or decoding. Not terminal: the
    /// loop simply retries on its next tick.
    PollFailed { cycle: crate::CycleId },
    /// User clicked the dismiss button on a notification.
    NotificationDismissed { id: crate::NotificationId },
    /// A notification reached the end of its display window.
    NotificationExpired { id: crate::NotificationId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
