// Mon Oct 19 2026 - Alex

use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smu-checker")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Reports the AGESA version and SMU firmware modules inside BIOS images", long_about = None)]
pub struct Args {
    /// BIOS images or .zip archives containing one
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long)]
    pub sequential: bool,

    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("Thread count must be at least 1".to_string());
        }
        Ok(())
    }

    /// Loads the config file when given, then applies command-line overrides.
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(threads) = self.threads {
            config = config.with_max_threads(threads);
        }
        if self.sequential {
            config = config.with_parallel(false);
        }
        if self.json {
            config = config.with_json_output(true);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        if self.pause {
            config = config.with_pause_on_exit(true);
        }

        config.validate()?;
        Ok(config)
    }
}
