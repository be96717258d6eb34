use log::debug;
use std::sync::Arc;

use super::wishlist_model::{
    NewWishlistItem, ScheduleDatesInput, ScheduleEventKind, ScheduleEventUpsert, WishlistItem,
    WishlistItemStatus, WishlistItemUpdate,
};
use super::wishlist_traits::{WishlistRepositoryTrait, WishlistServiceTrait};
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::utils::text::sanitize_optional_text;

/// Service for managing wishlist items and their schedule events.
pub struct WishlistService {
    repository: Arc<dyn WishlistRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl WishlistService {
    pub fn new(
        repository: Arc<dyn WishlistRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            expense_repository,
        }
    }

    /// Writes or clears one event kind depending on whether a date was given.
    async fn write_event(
        &self,
        item_id: &str,
        kind: ScheduleEventKind,
        scheduled_at: Option<chrono::NaiveDate>,
        dates: &ScheduleDatesInput,
    ) -> Result<()> {
        let Some(scheduled_at) = scheduled_at else {
            self.repository
                .delete_event(item_id.to_string(), kind)
                .await?;
            return Ok(());
        };

        self.repository
            .upsert_event(ScheduleEventUpsert {
                wishlist_item_id: item_id.to_string(),
                kind,
                scheduled_at,
                delivery_scheduled: kind == ScheduleEventKind::Delivery
                    && dates.delivery_scheduled,
                contact_person_name: sanitize_optional_text(dates.contact_person_name.clone()),
                contact_person_email: sanitize_optional_text(dates.contact_person_email.clone()),
                contact_person_mobile: sanitize_optional_text(dates.contact_person_mobile.clone()),
                company_brand_name: sanitize_optional_text(dates.company_brand_name.clone()),
            })
            .await
    }
}

#[async_trait::async_trait]
impl WishlistServiceTrait for WishlistService {
    fn get_items_by_zone(&self, zone_id: &str) -> Result<Vec<WishlistItem>> {
        self.repository.list_by_zone(zone_id)
    }

    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem> {
        new_item.validate()?;
        self.repository.create(new_item).await
    }

    async fn update_item(&self, update: WishlistItemUpdate) -> Result<WishlistItem> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn update_item_status(&self, item_id: String, status: WishlistItemStatus) -> Result<()> {
        debug!("Setting item {} status to {}", item_id, status.as_str());
        self.repository.update_status(item_id, status).await
    }

    /// Moves an item back to `NotStarted`, but only when no expenses remain
    /// against it. Deleting the last expense of an item routes through here.
    async fn reset_status_if_no_expenses(&self, item_id: String) -> Result<()> {
        let expense_count = self.expense_repository.count_for_item(&item_id)?;
        if expense_count > 0 {
            return Ok(());
        }
        self.repository
            .update_status(item_id, WishlistItemStatus::NotStarted)
            .await
    }

    async fn set_schedule_dates(&self, item_id: String, dates: ScheduleDatesInput) -> Result<()> {
        self.write_event(
            &item_id,
            ScheduleEventKind::Delivery,
            dates.delivery_date,
            &dates,
        )
        .await?;
        self.write_event(
            &item_id,
            ScheduleEventKind::Installation,
            dates.installation_date,
            &dates,
        )
        .await
    }
}
