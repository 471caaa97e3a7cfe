use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use grab_client::{
    ClientEvent, ClientHandle, ClientSettings, GatewayError, ProgressWire, WireStatus,
};
use grab_core::{
    Effect, Msg, ProgressSnapshot, SnapshotStatus, SubmissionFailure, SubmissionReceipt,
};

/// Display window of a notification before it removes itself.
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Executes controller effects against the HTTP client and feeds client
/// events back into the message loop.
pub struct EffectRunner {
    client: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ClientSettings) -> Result<Self, GatewayError> {
        let (client, events) = ClientHandle::new(settings)?;
        spawn_event_loop(events, msg_tx.clone());
        Ok(Self { client, msg_tx })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitRequest { cycle, url } => {
                    client_info!("Submitting download request cycle={} url={}", cycle, url);
                    self.client.submit(cycle, url);
                }
                Effect::StartPolling { cycle } => {
                    self.client.start_polling(cycle);
                }
                Effect::StopPolling { .. } => {
                    self.client.stop_polling();
                }
                Effect::ScheduleNotificationExpiry { id } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(NOTIFICATION_TTL);
                        let _ = msg_tx.send(Msg::NotificationExpired { id });
                    });
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::SubmissionResolved { cycle, result } => Msg::SubmissionResolved {
            cycle,
            result: match result {
                Ok(receipt) => {
                    client_info!("Download finished: {}", receipt.filename);
                    Ok(SubmissionReceipt {
                        filename: receipt.filename,
                    })
                }
                Err(err) => {
                    client_warn!("Download request failed: {err}");
                    Err(SubmissionFailure {
                        message: err.to_string(),
                    })
                }
            },
        },
        ClientEvent::Snapshot { cycle, snapshot } => Msg::SnapshotArrived {
            cycle,
            snapshot: map_snapshot(snapshot),
        },
        ClientEvent::PollFailed { cycle } => Msg::PollFailed { cycle },
    }
}

fn map_snapshot(wire: ProgressWire) -> ProgressSnapshot {
    ProgressSnapshot {
        status: match wire.status {
            WireStatus::Idle => SnapshotStatus::Idle,
            WireStatus::Downloading => SnapshotStatus::Downloading,
            WireStatus::Complete => SnapshotStatus::Complete,
            WireStatus::Error => SnapshotStatus::Error,
        },
        progress: wire.progress,
        error: wire.error,
        filename: wire.filename,
    }
}
