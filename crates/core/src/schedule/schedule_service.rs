use std::sync::Arc;

use super::schedule_model::{build_delivery_schedule, DeliveryScheduleItem};
use crate::errors::Result;
use crate::wishlist::WishlistRepositoryTrait;
use crate::zones::ZoneRepositoryTrait;

/// Trait for schedule service operations
pub trait ScheduleServiceTrait: Send + Sync {
    fn get_delivery_schedule(&self, budget_id: &str) -> Result<Vec<DeliveryScheduleItem>>;
}

/// Service composing the budget-wide delivery/installation overview.
pub struct ScheduleService {
    zone_repository: Arc<dyn ZoneRepositoryTrait>,
    wishlist_repository: Arc<dyn WishlistRepositoryTrait>,
}

impl ScheduleService {
    pub fn new(
        zone_repository: Arc<dyn ZoneRepositoryTrait>,
        wishlist_repository: Arc<dyn WishlistRepositoryTrait>,
    ) -> Self {
        Self {
            zone_repository,
            wishlist_repository,
        }
    }
}

impl ScheduleServiceTrait for ScheduleService {
    fn get_delivery_schedule(&self, budget_id: &str) -> Result<Vec<DeliveryScheduleItem>> {
        let zones = self.zone_repository.list_by_budget(budget_id)?;
        let items = self.wishlist_repository.list_by_budget(budget_id)?;
        let events = self.wishlist_repository.list_events_by_budget(budget_id)?;
        Ok(build_delivery_schedule(&zones, &items, &events))
    }
}
