pub mod batch;
pub mod form;
pub mod location;
pub mod national_id;
pub mod phone;
pub mod statistics;

pub use crate::domain::model::{DigitPolicy, FormReport, RegistrationForm};
pub use crate::domain::ports::AdminApi;
pub use crate::utils::error::Result;
