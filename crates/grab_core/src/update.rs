use crate::notification::{NotificationBody, NotificationKind};
use crate::{
    AppState, BarTint, CycleId, Effect, Msg, ProgressSnapshot, SnapshotStatus, SubmissionFailure,
    SubmissionReceipt,
};

/// Fallback message when the server reports an error without saying which.
pub const UNKNOWN_ERROR: &str = "Erro desconhecido";
/// Shown when a playlist URL is submitted instead of a single video.
pub const PLAYLIST_REJECTED: &str =
    "Por favor, use a URL de um vídeo específico, não de uma playlist";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::SnapshotArrived { cycle, snapshot } => {
            // Structured cancellation: results from a superseded cycle or
            // from a poll whose stop was already requested are dropped here,
            // not merely by aborting the timer.
            if cycle != state.cycle() || !state.poll_active() {
                return (state, Vec::new());
            }
            apply_snapshot(&mut state, cycle, snapshot)
        }
        Msg::SubmissionResolved { cycle, result } => {
            if cycle != state.cycle() || !state.cycle_in_flight() {
                return (state, Vec::new());
            }
            resolve_submission(&mut state, cycle, result)
        }
        Msg::PollFailed { .. } => {
            // Transport hiccup while polling; the loop retries on its own.
            Vec::new()
        }
        Msg::NotificationDismissed { id } | Msg::NotificationExpired { id } => {
            state.remove_notification(id);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.cycle_in_flight() {
        // Trigger is disabled while a cycle runs; guard anyway.
        return Vec::new();
    }
    let url = state.url_input().trim().to_string();
    if url.is_empty() {
        return Vec::new();
    }
    if is_playlist_without_video(&url) {
        let id = state.push_notification(
            NotificationKind::Error,
            NotificationBody::Text(PLAYLIST_REJECTED.to_string()),
        );
        return vec![Effect::ScheduleNotificationExpiry { id }];
    }

    let cycle = state.begin_cycle();
    vec![
        Effect::SubmitRequest { cycle, url },
        Effect::StartPolling { cycle },
    ]
}

fn apply_snapshot(state: &mut AppState, cycle: CycleId, snapshot: ProgressSnapshot) -> Vec<Effect> {
    match snapshot.status {
        SnapshotStatus::Idle => Vec::new(),
        SnapshotStatus::Downloading => {
            state.apply_progress(snapshot.progress);
            state.note_downloading();
            Vec::new()
        }
        SnapshotStatus::Complete => {
            state.apply_progress(snapshot.progress);
            state.note_converted();
            vec![Effect::StopPolling { cycle }]
        }
        SnapshotStatus::Error => {
            let message = snapshot
                .error
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            state.fail_cycle(BarTint::PollError);
            let id = state.push_notification(NotificationKind::Error, NotificationBody::Text(message));
            vec![
                Effect::StopPolling { cycle },
                Effect::ScheduleNotificationExpiry { id },
            ]
        }
    }
}

fn resolve_submission(
    state: &mut AppState,
    cycle: CycleId,
    result: Result<SubmissionReceipt, SubmissionFailure>,
) -> Vec<Effect> {
    match result {
        Ok(receipt) => {
            state.complete_cycle();
            let done = state.push_notification(
                NotificationKind::Success,
                NotificationBody::Text(format!("Download completo: {}", receipt.filename)),
            );
            let link = state.push_notification(
                NotificationKind::Success,
                NotificationBody::Link {
                    label: "Clique aqui para baixar".to_string(),
                    href: format!("/downloads/{}", receipt.filename),
                },
            );
            vec![
                Effect::StopPolling { cycle },
                Effect::ScheduleNotificationExpiry { id: done },
                Effect::ScheduleNotificationExpiry { id: link },
            ]
        }
        Err(failure) => {
            state.fail_cycle(BarTint::SubmitError);
            let id = state.push_notification(
                NotificationKind::Error,
                NotificationBody::Text(failure.message),
            );
            vec![
                Effect::StopPolling { cycle },
                Effect::ScheduleNotificationExpiry { id },
            ]
        }
    }
}

/// A collection indicator without a direct single-video indicator means the
/// URL points at a playlist as a whole.
fn is_playlist_without_video(url: &str) -> bool {
    url.contains("list=") && !url.contains("watch?v=")
}
