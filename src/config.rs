use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "savings_log.json";
const LOG_FILE: &str = "savetui.log";

/// Where the savings log and the TUI's log file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) store_path: PathBuf,
}

impl Config {
    /// Resolve the store path, taking `--store <path>` out of `args` when
    /// present. The remaining arguments are the command to run.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        let (store, rest) = split_store_flag(args)?;
        let store_path = match store {
            Some(p) => PathBuf::from(crate::run::shellexpand(&p)),
            None => default_data_dir()?.join(STORE_FILE),
        };
        Ok((Self { store_path }, rest))
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.store_path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .join(LOG_FILE)
    }
}

fn split_store_flag(args: &[String]) -> Result<(Option<String>, Vec<String>)> {
    let mut store = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(value) = arg.strip_prefix("--store=") {
            store = Some(value.to_string());
        } else if arg == "--store" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("Missing path for --store"))?;
            store = Some(value.clone());
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((store, rest))
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "savetui", "SaveTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

pub(crate) fn home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
