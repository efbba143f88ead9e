mod cli_messages;
mod config;
mod consts;
mod directory;
mod docente;
mod error_classifier;
mod events;
mod logging;
mod session;
mod ui;
mod workers;

use crate::config::{Config, Settings, get_config_path};
use crate::consts::cli_consts::ENDPOINT_ENV_VAR;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Live panel of the docentes directory. Polls the directory endpoint every
/// second and shows each record as a card plus a bar chart of their IDs.
struct Args {
    /// Directory endpoint returning the docente list as JSON
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file to read instead of ~/.docentes/config.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run without the terminal UI, printing activity to stdout
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Milliseconds between polls
    #[arg(long, value_name = "MS")]
    poll_interval_ms: Option<u64>,

    /// Disable background colors in the panel
    #[arg(long = "no-background-color", action = clap::ArgAction::SetTrue)]
    no_background_color: bool,
}

/// Load the config file named on the command line, or the default one if present.
fn load_config(path: Option<PathBuf>) -> Result<Config, config::ConfigError> {
    match path {
        Some(path) => Config::load_from_file(&path),
        None => match get_config_path() {
            Ok(path) => Config::load_or_default(&path),
            Err(e) => {
                print_cmd_warn!("Config skipped", "{}", e);
                Ok(Config::default())
            }
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let settings = load_config(args.config).and_then(|config| {
        Settings::resolve(
            args.endpoint,
            std::env::var(ENDPOINT_ENV_VAR).ok(),
            args.poll_interval_ms,
            &config,
        )
    });
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            print_cmd_error!("Invalid configuration", &e.to_string());
            std::process::exit(1);
        }
    };
    log::debug!("resolved settings: {:?}", settings);

    let session = setup_session(settings)?;
    if args.headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, !args.no_background_color).await
    }
}
