mod config;
mod error;
mod ledger;
mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, command) = config::Config::from_args(&args)?;

    if command.is_empty() {
        logging::init_file(&config.log_path())?;
    } else {
        logging::init_stderr()?;
    }

    let mut ledger = ledger::Ledger::open(&config.store_path).with_context(|| {
        format!(
            "Failed to open savings log: {}",
            config.store_path.display()
        )
    })?;

    let result = if command.is_empty() {
        run::as_tui(&mut ledger)
    } else {
        run::as_cli(&command, &mut ledger)
    };

    ledger.close();
    result
}
