use std::time::Duration;

use grab_client::{ClientEvent, ClientHandle, ClientSettings, WireStatus};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: Url::parse(&server.uri()).expect("mock server url"),
        poll_interval: Duration::from_millis(40),
    }
}

async fn mount_progress(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn submit_resolves_with_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "filename": "video.mp3",
        })))
        .mount(&server)
        .await;

    let (handle, events) = ClientHandle::new(settings_for(&server)).expect("handle");
    handle.submit(1, "https://youtu.be/abc123");

    match events.recv_timeout(RECV_TIMEOUT).expect("event") {
        ClientEvent::SubmissionResolved { cycle, result } => {
            assert_eq!(cycle, 1);
            assert_eq!(result.expect("receipt").filename, "video.mp3");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn poll_loop_emits_snapshots() {
    let server = MockServer::start().await;
    mount_progress(
        &server,
        serde_json::json!({ "status": "downloading", "progress": 10.0 }),
    )
    .await;

    let (handle, events) = ClientHandle::new(settings_for(&server)).expect("handle");
    handle.start_polling(3);

    match events.recv_timeout(RECV_TIMEOUT).expect("event") {
        ClientEvent::Snapshot { cycle, snapshot } => {
            assert_eq!(cycle, 3);
            assert_eq!(snapshot.status, WireStatus::Downloading);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn poll_transport_failures_are_reported_and_retried() {
    let server = MockServer::start().await;
    mount_progress(&server, serde_json::json!({ "status": "paused" })).await;

    let (handle, events) = ClientHandle::new(settings_for(&server)).expect("handle");
    handle.start_polling(1);

    // Two consecutive failures prove the loop survives the first one.
    for _ in 0..2 {
        match events.recv_timeout(RECV_TIMEOUT).expect("event") {
            ClientEvent::PollFailed { cycle } => assert_eq!(cycle, 1),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stop_polling_halts_the_loop() {
    let server = MockServer::start().await;
    mount_progress(
        &server,
        serde_json::json!({ "status": "downloading", "progress": 10.0 }),
    )
    .await;

    let (handle, events) = ClientHandle::new(settings_for(&server)).expect("handle");
    handle.start_polling(1);
    events.recv_timeout(RECV_TIMEOUT).expect("first snapshot");

    handle.stop_polling();
    // Let the stop command land and any in-flight tick drain.
    std::thread::sleep(Duration::from_millis(200));
    while events.try_recv().is_ok() {}

    assert!(events.recv_timeout(Duration::from_millis(300)).is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn restarting_supersedes_the_previous_loop() {
    let server = MockServer::start().await;
    mount_progress(
        &server,
        serde_json::json!({ "status": "downloading", "progress": 10.0 }),
    )
    .await;

    let (handle, events) = ClientHandle::new(settings_for(&server)).expect("handle");
    handle.start_polling(1);
    events.recv_timeout(RECV_TIMEOUT).expect("first snapshot");

    handle.start_polling(2);

    // Once the superseding loop reports, the aborted one stays silent.
    let deadline = std::time::Instant::now() + RECV_TIMEOUT;
    loop {
        match events.recv_timeout(RECV_TIMEOUT).expect("event") {
            ClientEvent::Snapshot { cycle: 2, .. } => break,
            ClientEvent::Snapshot { cycle: 1, .. } => {
                assert!(std::time::Instant::now() < deadline, "cycle 1 never stopped");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
    std::thread::sleep(Duration::from_millis(150));
    while let Ok(event) = events.try_recv() {
        match event {
            ClientEvent::Snapshot { cycle, .. } => assert_eq!(cycle, 2),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
