#![warn(missing_docs)]

//! Adjusts the brightness of a display output through xrandr and remembers
//! the last applied value

mod cli;
mod config;
mod control;
mod error;
mod external;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use config::{store, ConfigStore};
use control::BrightnessController;
use external::display::xrandr::Xrandr;
use flexi_logger::Logger;

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let _logger = Logger::try_with_env_or_str(default_level)?.start()?;
    log_panics::init();

    let request = args.request()?;
    let path = store::locate(args.config.as_deref()).context("error locating config")?;
    let mut store =
        ConfigStore::open(&path, &args.device).context("error initializing config")?;
    log::debug!("Using config file {}", store.path().display());

    let controller = BrightnessController::new(Xrandr::new(&args.program));
    controller
        .run(&request, &mut store)
        .context("error applying brightness")?;
    store.close().context("error closing config")?;
    Ok(())
}
