use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::client_warn;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::gateway::{ClientSettings, Gateway, GatewayError, ReqwestGateway, SubmissionReceipt};
use crate::wire::ProgressWire;

pub type CycleId = u64;

enum ClientCommand {
    Submit { cycle: CycleId, url: String },
    StartPolling { cycle: CycleId },
    StopPolling,
}

#[derive(Debug)]
pub enum ClientEvent {
    SubmissionResolved {
        cycle: CycleId,
        result: Result<SubmissionReceipt, GatewayError>,
    },
    Snapshot {
        cycle: CycleId,
        snapshot: ProgressWire,
    },
    PollFailed {
        cycle: CycleId,
    },
}

/// Command channel into the background runtime thread. The submission request
/// and the poll loop of a cycle run concurrently; at most one poll loop is
/// alive at any time.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Spawns the runtime thread and returns the handle together with the
    /// receiving end of the event stream.
    pub fn new(
        settings: ClientSettings,
    ) -> Result<(Self, mpsc::Receiver<ClientEvent>), GatewayError> {
        let gateway = Arc::new(ReqwestGateway::new(&settings)?);
        Ok(Self::with_gateway(gateway, settings.poll_interval))
    }

    pub fn with_gateway(
        gateway: Arc<dyn Gateway>,
        poll_interval: Duration,
    ) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut poll_task: Option<tokio::task::JoinHandle<()>> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::Submit { cycle, url } => {
                        let gateway = gateway.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = gateway.submit(&url).await;
                            let _ =
                                event_tx.send(ClientEvent::SubmissionResolved { cycle, result });
                        });
                    }
                    ClientCommand::StartPolling { cycle } => {
                        // A newer cycle supersedes whatever loop is running.
                        if let Some(task) = poll_task.take() {
                            task.abort();
                        }
                        let gateway = gateway.clone();
                        let event_tx = event_tx.clone();
                        poll_task = Some(runtime.spawn(async move {
                            // First check fires one interval after the start.
                            let mut ticker =
                                interval_at(Instant::now() + poll_interval, poll_interval);
                            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                            loop {
                                ticker.tick().await;
                                match gateway.poll_progress().await {
                                    Ok(snapshot) => {
                                        let _ = event_tx
                                            .send(ClientEvent::Snapshot { cycle, snapshot });
                                    }
                                    Err(err) => {
                                        client_warn!("Erro ao verificar progresso: {err}");
                                        let _ = event_tx.send(ClientEvent::PollFailed { cycle });
                                    }
                                }
                            }
                        }));
                    }
                    ClientCommand::StopPolling => {
                        if let Some(task) = poll_task.take() {
                            task.abort();
                        }
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, cycle: CycleId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            cycle,
            url: url.into(),
        });
    }

    pub fn start_polling(&self, cycle: CycleId) {
        let _ = self.cmd_tx.send(ClientCommand::StartPolling { cycle });
    }

    pub fn stop_polling(&self) {
        let _ = self.cmd_tx.send(ClientCommand::StopPolling);
    }
}
