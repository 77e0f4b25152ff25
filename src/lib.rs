pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FormsConfig;

pub use adapters::HttpAdminApi;
pub use self::core::{
    batch::{BatchReport, BatchValidator},
    form::FormValidator,
    location::CityDropdown,
    national_id::{is_valid_national_id, NationalIdValidator, Verdict},
};
pub use domain::model::{City, DigitPolicy, FestivalStatistics, RegistrationForm};
pub use domain::ports::AdminApi;
pub use utils::error::{FormsError, Result};
