use std::sync::mpsc;
use std::time::Duration;

use client_logging::{client_error, client_info};
use eframe::egui;
use grab_client::ClientSettings;
use grab_core::{update, AppState, AppViewModel, Msg};
use url::Url;

use super::effects::EffectRunner;
use super::{logging, ui};

/// Environment variable naming the download server; defaults to the local
/// development server.
const SERVER_ENV: &str = "GRAB_SERVER";

pub fn run_app() -> Result<(), eframe::Error> {
    logging::initialize();

    let settings = match settings_from_env() {
        Ok(settings) => settings,
        Err(message) => {
            client_error!("{message}");
            eprintln!("{message}");
            std::process::exit(2);
        }
    };
    let base_url = settings.base_url.clone();
    client_info!("Using download server at {}", base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = match EffectRunner::new(msg_tx, settings) {
        Ok(runner) => runner,
        Err(err) => {
            client_error!("Failed to start HTTP client: {err}");
            eprintln!("Failed to start HTTP client: {err}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        ui::constants::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(GrabApp::new(base_url, msg_rx, runner))),
    )
}

fn settings_from_env() -> Result<ClientSettings, String> {
    let raw = match std::env::var(SERVER_ENV) {
        Ok(value) => value,
        Err(_) => return Ok(ClientSettings::default()),
    };
    let base_url = Url::parse(raw.trim())
        .map_err(|err| format!("Invalid {SERVER_ENV} value {raw:?}: {err}"))?;
    Ok(ClientSettings {
        base_url,
        ..ClientSettings::default()
    })
}

struct GrabApp {
    base_url: Url,
    state: AppState,
    view: AppViewModel,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
}

impl GrabApp {
    fn new(base_url: Url, msg_rx: mpsc::Receiver<Msg>, runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            base_url,
            state,
            view,
            msg_rx,
            runner,
        }
    }

    fn process_pending_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
    }
}

impl eframe::App for GrabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();

        for msg in ui::render::render(ctx, &self.view, &self.base_url) {
            self.dispatch(msg);
        }

        // Poll results and notification timers arrive from background
        // threads; keep repainting so they are picked up promptly.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
