mod common;
mod config;
mod controllers;
mod storage;
mod ticker;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;

use common::Location;
use storage::{MemoryStore, SessionStore};
use ui::TalentTrackApp;

#[derive(Parser)]
#[command(
    name = "talent_track",
    version,
    about = "TalentTrack interview room, messaging and jobs demo"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Session store file (overrides the config)
    #[arg(long, value_name = "FILE")]
    store: Option<PathBuf>,
    /// Keep session state in memory only
    #[arg(long, conflicts_with = "store")]
    memory: bool,
    /// Page to open, e.g. `messaging.html?view=company`
    #[arg(value_name = "LOCATION")]
    location: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let location = Location::parse(
        cli.location
            .as_deref()
            .unwrap_or(&app_config.default_location),
    );

    let store: Box<dyn SessionStore> = if cli.memory {
        log::info!("Using in-memory session store; nothing will be persisted");
        Box::new(MemoryStore::new())
    } else {
        storage::open_store(cli.store.as_deref().unwrap_or(&app_config.store_path))
    };

    run_app(location, cli.config, store)
}

fn run_app(
    location: Location,
    config_path: String,
    store: Box<dyn SessionStore>,
) -> Result<(), eframe::Error> {
    // Tick source and notifier -> UI
    let (event_tx, event_rx) = mpsc::channel(100);
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "TalentTrack",
        options,
        Box::new(move |cc| {
            ticker::spawn(event_tx.clone(), cc.egui_ctx.clone());
            log::info!("Opening {}", location.to_href());

            Ok(Box::new(TalentTrackApp::new(
                cc,
                location,
                config_path,
                store,
                event_tx,
                event_rx,
            )))
        }),
    )
}
