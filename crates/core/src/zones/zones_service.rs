use log::debug;
use std::sync::Arc;

use super::zones_detail::{build_zone_detail, ZoneDetail};
use super::zones_model::{NewZone, Zone};
use super::zones_traits::{ZoneRepositoryTrait, ZoneServiceTrait};
use crate::budgets::BudgetRepositoryTrait;
use crate::constants::DEFAULT_CURRENCY;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::utils::text::sanitize_required_text;
use crate::wishlist::WishlistRepositoryTrait;

/// Service for managing zones and composing the zone drill-down view.
pub struct ZoneService {
    repository: Arc<dyn ZoneRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    wishlist_repository: Arc<dyn WishlistRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ZoneService {
    pub fn new(
        repository: Arc<dyn ZoneRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        wishlist_repository: Arc<dyn WishlistRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            budget_repository,
            wishlist_repository,
            expense_repository,
        }
    }
}

#[async_trait::async_trait]
impl ZoneServiceTrait for ZoneService {
    fn get_zones_by_budget(&self, budget_id: &str) -> Result<Vec<Zone>> {
        self.repository.list_by_budget(budget_id)
    }

    async fn create_zone(&self, mut new_zone: NewZone) -> Result<Zone> {
        new_zone.name = sanitize_required_text(&new_zone.name, "Zone name")?;
        self.repository.create(new_zone).await
    }

    async fn rename_zone(&self, zone_id: String, name: String) -> Result<Zone> {
        let name = sanitize_required_text(&name, "Zone name")?;
        self.repository.rename(zone_id, name).await
    }

    async fn delete_zone(&self, zone_id: String) -> Result<usize> {
        debug!("Deleting zone {}", zone_id);
        self.repository.delete(zone_id).await
    }

    /// Returns None when the zone does not exist; the caller renders
    /// "no zone selected" rather than treating that as an error.
    fn get_zone_detail(&self, zone_id: &str) -> Result<Option<ZoneDetail>> {
        let Some(zone) = self.repository.find_by_id(zone_id)? else {
            return Ok(None);
        };

        let currency = self
            .budget_repository
            .find_by_id(&zone.budget_id)?
            .map(|b| b.currency)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let items = self.wishlist_repository.list_by_zone(zone_id)?;
        let item_ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        let expenses = self.expense_repository.list_for_items(&item_ids)?;
        let events = self.wishlist_repository.list_events_for_items(&item_ids)?;

        Ok(Some(build_zone_detail(
            &zone, &currency, &items, &expenses, &events,
        )))
    }
}
