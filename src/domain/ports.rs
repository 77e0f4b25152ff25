use crate::domain::model::{City, FestivalStatistics};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the festival admin endpoints the registration form talks to.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Cities of a province, ordered by name.
    async fn load_cities(&self, province_id: u64) -> Result<Vec<City>>;
    async fn load_statistics(&self) -> Result<FestivalStatistics>;
}
