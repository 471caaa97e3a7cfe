use grab_core::{update, AppState, Effect, Msg, SnapshotStatus, SubmissionReceipt};

fn init_logging() {
    client_logging::initialize_for_tests();
}

fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn scheduled_ids(effects: &[Effect]) -> Vec<u64> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ScheduleNotificationExpiry { id } => Some(*id),
            _ => None,
        })
        .collect()
}

#[test]
fn every_notification_gets_an_expiry_timer() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://youtu.be/abc123");

    let (next, effects) = update(
        state,
        Msg::SubmissionResolved {
            cycle: 1,
            result: Ok(SubmissionReceipt {
                filename: "video.mp4".to_string(),
            }),
        },
    );

    let scheduled = scheduled_ids(&effects);
    assert_eq!(scheduled.len(), next.view().notifications.len());
}

#[test]
fn expired_notification_is_removed() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.com/?list=XYZ");
    let id = scheduled_ids(&effects)[0];
    assert_eq!(state.view().notifications.len(), 1);

    let (next, effects) = update(state, Msg::NotificationExpired { id });

    assert!(effects.is_empty());
    assert!(next.view().notifications.is_empty());
}

#[test]
fn dismissed_notification_is_removed() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.com/?list=XYZ");
    let id = scheduled_ids(&effects)[0];

    let (next, _) = update(state, Msg::NotificationDismissed { id });

    assert!(next.view().notifications.is_empty());
}

#[test]
fn expiry_after_dismissal_is_harmless() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.com/?list=XYZ");
    let id = scheduled_ids(&effects)[0];

    let (mut state, _) = update(state, Msg::NotificationDismissed { id });
    assert!(state.consume_dirty());

    let (mut next, effects) = update(state, Msg::NotificationExpired { id });
    assert!(effects.is_empty());
    // Nothing changed, so no render is due.
    assert!(!next.consume_dirty());
}

#[test]
fn newest_notification_is_inserted_on_top() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com/?list=XYZ");
    let (state, _) = submit_url(state, "https://youtu.be/abc123");

    // Second cycle fails at the poll; its notification lands above the
    // earlier playlist rejection.
    let (next, _) = update(
        state,
        Msg::SnapshotArrived {
            cycle: 1,
            snapshot: grab_core::ProgressSnapshot {
                status: SnapshotStatus::Error,
                progress: None,
                error: Some("disk full".to_string()),
                filename: None,
            },
        },
    );
    let view = next.view();

    assert_eq!(view.notifications.len(), 2);
    assert_eq!(view.notifications[0].text, "disk full");
    assert_eq!(
        view.notifications[1].text,
        "Por favor, use a URL de um vídeo específico, não de uma playlist"
    );
}
