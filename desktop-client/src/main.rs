mod assets;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::SnakeSession;
use common::{log, log_error, logger};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::oneshot;

use config::{get_config_manager, DEFAULT_CONFIG_FILE};
use offline::{run_snake_game, LocalBroadcaster};
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "grid_snake")]
struct Args {
    /// Path to the YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seed for food and spawn positions.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;
    let settings = config.session_settings();
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let session = SnakeSession::create(&settings, rng);
    let shared_state = SharedState::new();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let runner = {
        let shared_state = shared_state.clone();
        let session = session.clone();
        let assets = config.assets.clone();
        let cell_size = settings.cell_size;
        std::thread::spawn(move || -> std::io::Result<()> {
            let rt = tokio::runtime::Runtime::new()?;
            let broadcaster = LocalBroadcaster::new(shared_state.clone());
            rt.block_on(run_snake_game(shared_state, broadcaster, session, assets, cell_size, shutdown_rx));
            Ok(())
        })
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                settings.board_width as f32 + 32.0,
                settings.board_height as f32 + 120.0,
            ])
            .with_title("Grid Snake"),
        ..Default::default()
    };

    log!("Starting window, config {}", args.config.display());

    let run_result = eframe::run_native(
        "Grid Snake",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeApp::new(shared_state, session)))),
    );

    let _ = shutdown_tx.send(());
    match runner.join() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log_error!("Game runner failed: {}", e),
        Err(_) => log_error!("Game runner panicked"),
    }

    run_result?;
    Ok(())
}
