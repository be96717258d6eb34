use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use renoplan_core::wishlist::{
    NewWishlistItem, ScheduleEvent, ScheduleEventKind, ScheduleEventUpsert, WishlistItem,
    WishlistItemStatus, WishlistItemUpdate, WishlistRepositoryTrait,
};
use renoplan_core::Result;

use super::model::{ScheduleEventDB, WishlistItemDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{wishlist_item_events, wishlist_items, zones};
use crate::utils::{chunk_for_sqlite, format_date, now_utc_text};

pub struct WishlistRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl WishlistRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        WishlistRepository { pool, writer }
    }
}

#[async_trait]
impl WishlistRepositoryTrait for WishlistRepository {
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<WishlistItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = wishlist_items::table
            .inner_join(zones::table)
            .filter(zones::budget_id.eq(budget_id))
            .select(WishlistItemDB::as_select())
            .load::<WishlistItemDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(WishlistItem::from).collect())
    }

    fn list_by_zone(&self, zone_id: &str) -> Result<Vec<WishlistItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = wishlist_items::table
            .filter(wishlist_items::zone_id.eq(zone_id))
            .order(wishlist_items::created_at.asc())
            .load::<WishlistItemDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(WishlistItem::from).collect())
    }

    fn find_by_id(&self, item_id: &str) -> Result<Option<WishlistItem>> {
        let mut conn = get_connection(&self.pool)?;
        let row = wishlist_items::table
            .find(item_id)
            .first::<WishlistItemDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(WishlistItem::from))
    }

    async fn create(&self, new_item: NewWishlistItem) -> Result<WishlistItem> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WishlistItem> {
                let now = now_utc_text();
                let item_db = WishlistItemDB {
                    id: Uuid::new_v4().to_string(),
                    zone_id: new_item.zone_id,
                    name: new_item.name,
                    budget: new_item.budget.to_string(),
                    status: WishlistItemStatus::NotStarted.as_str().to_string(),
                    must_purchase_before: new_item.must_purchase_before.map(format_date),
                    created_at: now.clone(),
                    updated_at: now,
                };

                let result_db = diesel::insert_into(wishlist_items::table)
                    .values(&item_db)
                    .returning(WishlistItemDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(WishlistItem::from(result_db))
            })
            .await
    }

    async fn update(&self, update: WishlistItemUpdate) -> Result<WishlistItem> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WishlistItem> {
                let result_db = diesel::update(wishlist_items::table.find(&update.id))
                    .set((
                        wishlist_items::name.eq(&update.name),
                        wishlist_items::budget.eq(update.budget.to_string()),
                        wishlist_items::must_purchase_before
                            .eq(update.must_purchase_before.map(format_date)),
                        wishlist_items::updated_at.eq(now_utc_text()),
                    ))
                    .returning(WishlistItemDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(WishlistItem::from(result_db))
            })
            .await
    }

    async fn update_status(&self, item_id: String, status: WishlistItemStatus) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(wishlist_items::table.find(&item_id))
                    .set((
                        wishlist_items::status.eq(status.as_str()),
                        wishlist_items::updated_at.eq(now_utc_text()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn list_events_for_items(&self, item_ids: &[String]) -> Result<Vec<ScheduleEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let mut events = Vec::new();
        for chunk in chunk_for_sqlite(item_ids) {
            let rows = wishlist_item_events::table
                .filter(wishlist_item_events::wishlist_item_id.eq_any(chunk))
                .load::<ScheduleEventDB>(&mut conn)
                .map_err(StorageError::from)?;
            events.extend(rows.into_iter().filter_map(ScheduleEventDB::into_domain));
        }
        Ok(events)
    }

    fn list_events_by_budget(&self, budget_id: &str) -> Result<Vec<ScheduleEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = wishlist_item_events::table
            .inner_join(wishlist_items::table.inner_join(zones::table))
            .filter(zones::budget_id.eq(budget_id))
            .select(ScheduleEventDB::as_select())
            .load::<ScheduleEventDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .filter_map(ScheduleEventDB::into_domain)
            .collect())
    }

    async fn upsert_event(&self, event: ScheduleEventUpsert) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let now = now_utc_text();
                let event_db = ScheduleEventDB {
                    wishlist_item_id: event.wishlist_item_id,
                    kind: event.kind.as_str().to_string(),
                    scheduled_at: format_date(event.scheduled_at),
                    delivery_scheduled: event.delivery_scheduled,
                    contact_person_name: event.contact_person_name,
                    contact_person_email: event.contact_person_email,
                    contact_person_mobile: event.contact_person_mobile,
                    company_brand_name: event.company_brand_name,
                    created_at: now.clone(),
                    updated_at: now.clone(),
                };

                diesel::insert_into(wishlist_item_events::table)
                    .values(&event_db)
                    .on_conflict((
                        wishlist_item_events::wishlist_item_id,
                        wishlist_item_events::kind,
                    ))
                    .do_update()
                    .set((
                        wishlist_item_events::scheduled_at.eq(&event_db.scheduled_at),
                        wishlist_item_events::delivery_scheduled.eq(event_db.delivery_scheduled),
                        wishlist_item_events::contact_person_name
                            .eq(&event_db.contact_person_name),
                        wishlist_item_events::contact_person_email
                            .eq(&event_db.contact_person_email),
                        wishlist_item_events::contact_person_mobile
                            .eq(&event_db.contact_person_mobile),
                        wishlist_item_events::company_brand_name
                            .eq(&event_db.company_brand_name),
                        wishlist_item_events::updated_at.eq(&now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_event(&self, item_id: String, kind: ScheduleEventKind) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(wishlist_item_events::table.find((&item_id, kind.as_str())))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
