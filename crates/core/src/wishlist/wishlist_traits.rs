use crate::errors::Result;
use crate::wishlist::wishlist_model::{
    NewWishlistItem, ScheduleDatesInput, ScheduleEvent, ScheduleEventKind, ScheduleEventUpsert,
    WishlistItem, WishlistItemStatus, WishlistItemUpdate,
};
use async_trait::async_trait;

/// Trait for wishlist repository operations
#[async_trait]
pub trait WishlistRepositoryTrait: Send + Sync {
    /// All items belonging to a budget, across its zones.
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<WishlistItem>>;
    /// Items of one zone, in creation order.
    fn list_by_zone(&self, zone_id: &str) -> Result<Vec<WishlistItem>>;
    fn find_by_id(&self, item_id: &str) -> Result<Option<WishlistItem>>;
    async fn create(&self, new_item: NewWishlistItem) -> Result<WishlistItem>;
    async fn update(&self, update: WishlistItemUpdate) -> Result<WishlistItem>;
    async fn update_status(&self, item_id: String, status: WishlistItemStatus) -> Result<()>;
    fn list_events_for_items(&self, item_ids: &[String]) -> Result<Vec<ScheduleEvent>>;
    fn list_events_by_budget(&self, budget_id: &str) -> Result<Vec<ScheduleEvent>>;
    async fn upsert_event(&self, event: ScheduleEventUpsert) -> Result<()>;
    async fn delete_event(&self, item_id: String, kind: ScheduleEventKind) -> Result<usize>;
}

/// Trait for wishlist service operations
#[async_trait]
pub trait WishlistServiceTrait: Send + Sync {
    fn get_items_by_zone(&self, zone_id: &str) -> Result<Vec<WishlistItem>>;
    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem>;
    async fn update_item(&self, update: WishlistItemUpdate) -> Result<WishlistItem>;
    async fn update_item_status(&self, item_id: String, status: WishlistItemStatus) -> Result<()>;
    async fn reset_status_if_no_expenses(&self, item_id: String) -> Result<()>;
    async fn set_schedule_dates(&self, item_id: String, dates: ScheduleDatesInput) -> Result<()>;
}
