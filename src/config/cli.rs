use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a national identity number (کد ملی)
    NationalId {
        value: String,

        /// Reject non-digit characters instead of scoring them as 0
        #[arg(long)]
        strict: bool,
    },

    /// Check (and show the formatted form of) a mobile number
    Phone {
        value: String,

        #[arg(long)]
        strict: bool,
    },

    /// Validate a registration form's national ID and phone together
    Form {
        #[arg(long)]
        national_id: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Validate a CSV export of registrations
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },

    /// List the cities of a province from the admin site
    Cities {
        #[arg(long)]
        province_id: u64,
    },

    /// Show festival statistics from the admin site
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}
