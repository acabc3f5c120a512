mod backend_bridge;
mod config;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{transport::normalize_base_url, MarkerTable};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand, config::load_settings,
    controller::events::UiEvent, ui::ConnectMoreApp,
};

#[derive(Parser, Debug)]
#[command(about = "Connect More window client")]
struct Args {
    /// Base URL of the game server, e.g. http://127.0.0.1:8080
    #[arg(long)]
    server_url: Option<String>,
    /// TOML settings file (defaults to ./connect_more.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pre-filled player count for the New Game button
    #[arg(long)]
    players: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(players) = args.players {
        settings.players = players;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server_url = normalize_base_url(&settings.server_url)
        .with_context(|| format!("cannot use server url '{}'", settings.server_url))?;
    info!(%server_url, "connect more window client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, MarkerTable::standard());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Connect More")
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };
    let players = settings.players;
    eframe::run_native(
        "Connect More",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ConnectMoreApp::new(
                cmd_tx,
                ui_rx,
                server_url,
                players,
            )))
        }),
    )
    .map_err(|err| anyhow!("window client failed: {err}"))
}
