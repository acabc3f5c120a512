use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{GameDispatcher, HttpTransport, MarkerTable};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod terminal;

use commands::{parse_command, Command, HELP};
use config::load_settings;
use terminal::{prompt_for, TerminalSurface};

#[derive(Parser, Debug)]
#[command(about = "Play Connect More against a game server from the terminal")]
struct Args {
    /// Base URL of the game server, e.g. http://127.0.0.1:8080
    #[arg(long)]
    server_url: Option<String>,
    /// TOML settings file (defaults to ./connect_more.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start a game for this many players right away
    #[arg(long)]
    players: Option<String>,
    #[arg(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if args.no_color {
        settings.color = false;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let transport = HttpTransport::new(&settings.server_url)
        .with_context(|| format!("cannot use server url '{}'", settings.server_url))?;
    info!(server_url = transport.base_url(), "connect more terminal client");

    let mut dispatcher = GameDispatcher::new(transport, MarkerTable::standard());
    let mut surface = TerminalSurface::new(io::stdout(), settings.color);

    if let Some(players) = args.players {
        if let Err(err) = dispatcher.create_game(&players, &mut surface).await {
            debug!(error = %err, "startup game not created");
        }
    } else {
        surface.write_text(HELP);
        surface.write_text("\n");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        surface.write_text(&prompt_for(dispatcher.phase()));
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };

        let result = match parse_command(&line) {
            Command::NewGame(players) => dispatcher.create_game(&players, &mut surface).await,
            Command::Play(column) => dispatcher.play_column(column, &mut surface).await,
            Command::Help => {
                surface.write_text(HELP);
                surface.write_text("\n");
                continue;
            }
            Command::Quit => break,
            Command::Blank => continue,
            Command::Unknown(input) => {
                debug!(%input, "unrecognized command");
                surface.write_text("invalid input!\n");
                continue;
            }
        };
        if let Err(err) = result {
            debug!(error = %err, "command did not render");
        }
    }

    surface.write_text("\n");
    Ok(())
}
