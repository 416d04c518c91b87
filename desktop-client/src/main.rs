mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::config::ConfigManager;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::{ClientConfigManager, Config, get_config_manager};
use offline::local_game_task;
use state::{ClientCommand, SharedState};
use ui::MenuApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ClientConfigManager = match args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config_result = config_manager.get_config();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let verbose = args.verbose
        || config_result
            .as_ref()
            .is_ok_and(|config| config.verbose_logging);
    logger::init_logger(prefix, verbose);

    let config = match config_result {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let computer_move_delay = Duration::from_millis(config.computer_move_delay_ms);

    let presenter = shared_state.clone();
    let game_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(local_game_task(presenter, command_rx, computer_move_delay));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size())
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let app_command_tx = command_tx.clone();
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MenuApp::new(
                shared_state,
                app_command_tx,
                config_manager,
                &config,
            )))
        }),
    )?;

    let _ = command_tx.send(ClientCommand::Shutdown);
    if game_thread.join().is_err() {
        log!("Game thread panicked");
    }

    log!("Client shut down");
    Ok(())
}
