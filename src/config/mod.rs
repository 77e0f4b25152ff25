#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::{AdminConfig, FormsConfig, ValidationConfig};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "festival-forms")]
#[command(about = "Validation and admin helpers for festival registrations")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override admin.base_url from the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides.
    pub fn load_forms_config(&self) -> crate::utils::error::Result<FormsConfig> {
        let mut config = match &self.config {
            Some(path) => FormsConfig::from_file(path)?,
            None => FormsConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.admin.base_url = Some(base_url.clone());
        }

        match &self.command {
            cli::Command::NationalId { strict: true, .. } | cli::Command::Phone { strict: true, .. } => {
                config.validation.digit_policy = crate::domain::model::DigitPolicy::Strict;
            }
            _ => {}
        }

        Ok(config)
    }
}
