//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{
    transport::normalize_base_url, BoardView, DisplaySurface, GameDispatcher, HttpTransport,
    MarkerTable, ScoreView, Transport, TransportError,
};
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error, info, warn};

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

const NO_GAME_ALERT: &str = "Start a new game first";

/// Forwards rendered views to the UI thread instead of drawing them.
struct ChannelSurface {
    ui_tx: Sender<UiEvent>,
}

impl ChannelSurface {
    fn send(&self, event: UiEvent) {
        if let Err(err) = self.ui_tx.try_send(event) {
            warn!(error = %err, "dropped ui event");
        }
    }
}

impl DisplaySurface for ChannelSurface {
    fn show_board(&mut self, board: &BoardView) {
        self.send(UiEvent::Board(board.clone()));
    }

    fn show_scores(&mut self, scores: &ScoreView) {
        self.send(UiEvent::Scores(scores.clone()));
    }

    fn alert(&mut self, message: &str) {
        self.send(UiEvent::Alert(message.to_string()));
    }
}

/// Dispatcher bound to the server it was created for.
struct Session<T: Transport> {
    server_url: String,
    dispatcher: GameDispatcher<T>,
}

/// Command handling for the worker; `connect` opens a transport for a normalized base URL.
struct Worker<T, C>
where
    T: Transport,
    C: Fn(&str) -> Result<T, TransportError>,
{
    connect: C,
    markers: MarkerTable,
    session: Option<Session<T>>,
}

impl<T, C> Worker<T, C>
where
    T: Transport,
    C: Fn(&str) -> Result<T, TransportError>,
{
    fn new(connect: C, markers: MarkerTable) -> Self {
        Self {
            connect,
            markers,
            session: None,
        }
    }

    async fn handle(&mut self, cmd: BackendCommand, surface: &mut ChannelSurface) {
        debug!(command = cmd.name(), "backend command");
        match cmd {
            BackendCommand::CreateGame {
                server_url,
                players,
            } => {
                let Some(session) = self.session_for(&server_url, surface) else {
                    return;
                };
                if let Err(err) = session.dispatcher.create_game(&players, surface).await {
                    debug!(error = %err, "create game did not render");
                }
                surface.send(UiEvent::Phase(session.dispatcher.phase()));
            }
            BackendCommand::PlayColumn { column } => {
                let Some(session) = self.session.as_mut() else {
                    surface.alert(NO_GAME_ALERT);
                    return;
                };
                if let Err(err) = session.dispatcher.play_column(column, surface).await {
                    debug!(error = %err, "play did not render");
                }
                surface.send(UiEvent::Phase(session.dispatcher.phase()));
            }
        }
    }

    /// Keeps the current session when the server is unchanged; an unusable URL keeps it too.
    fn session_for(
        &mut self,
        server_url: &str,
        surface: &mut ChannelSurface,
    ) -> Option<&mut Session<T>> {
        let server_url = match normalize_base_url(server_url) {
            Ok(url) => url,
            Err(err) => {
                surface.alert(&format!("Invalid server URL: {err}"));
                return None;
            }
        };

        let same_server = self
            .session
            .as_ref()
            .is_some_and(|session| session.server_url == server_url);
        if !same_server {
            let transport = match (self.connect)(&server_url) {
                Ok(transport) => transport,
                Err(err) => {
                    surface.alert(&format!("Invalid server URL: {err}"));
                    return None;
                }
            };
            info!(%server_url, "using game server");
            self.session = Some(Session {
                server_url,
                dispatcher: GameDispatcher::new(transport, self.markers.clone()),
            });
        }
        self.session.as_mut()
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, markers: MarkerTable) {
    thread::spawn(move || run_worker(cmd_rx, ui_tx, markers));
}

fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, markers: MarkerTable) {
    let mut surface = ChannelSurface { ui_tx };
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to build backend runtime: {err}");
            surface.alert(&format!("Backend worker could not start: {err}"));
            return;
        }
    };

    runtime.block_on(async move {
        let mut worker = Worker::new(HttpTransport::new, markers);
        while let Ok(cmd) = cmd_rx.recv() {
            worker.handle(cmd, &mut surface).await;
        }
        debug!("command queue closed; backend worker exiting");
    });
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
