use crate::errors::Result;
use crate::zones::zones_detail::ZoneDetail;
use crate::zones::zones_model::{NewZone, Zone};
use async_trait::async_trait;

/// Trait for zone repository operations
#[async_trait]
pub trait ZoneRepositoryTrait: Send + Sync {
    /// Zones of a budget, in retrieval order (not re-sorted).
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<Zone>>;
    fn find_by_id(&self, zone_id: &str) -> Result<Option<Zone>>;
    async fn create(&self, new_zone: NewZone) -> Result<Zone>;
    async fn rename(&self, zone_id: String, name: String) -> Result<Zone>;
    async fn delete(&self, zone_id: String) -> Result<usize>;
}

/// Trait for zone service operations
#[async_trait]
pub trait ZoneServiceTrait: Send + Sync {
    fn get_zones_by_budget(&self, budget_id: &str) -> Result<Vec<Zone>>;
    async fn create_zone(&self, new_zone: NewZone) -> Result<Zone>;
    async fn rename_zone(&self, zone_id: String, name: String) -> Result<Zone>;
    async fn delete_zone(&self, zone_id: String) -> Result<usize>;
    fn get_zone_detail(&self, zone_id: &str) -> Result<Option<ZoneDetail>>;
}
