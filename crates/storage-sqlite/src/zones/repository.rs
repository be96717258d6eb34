use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use renoplan_core::zones::{NewZone, Zone, ZoneRepositoryTrait};
use renoplan_core::Result;

use super::model::ZoneDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::zones;
use crate::utils::now_utc_text;

pub struct ZoneRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ZoneRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        ZoneRepository { pool, writer }
    }
}

#[async_trait]
impl ZoneRepositoryTrait for ZoneRepository {
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<Zone>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = zones::table
            .filter(zones::budget_id.eq(budget_id))
            .order(zones::created_at.asc())
            .load::<ZoneDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Zone::from).collect())
    }

    fn find_by_id(&self, zone_id: &str) -> Result<Option<Zone>> {
        let mut conn = get_connection(&self.pool)?;
        let row = zones::table
            .find(zone_id)
            .first::<ZoneDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Zone::from))
    }

    async fn create(&self, new_zone: NewZone) -> Result<Zone> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Zone> {
                let now = now_utc_text();
                let zone_db = ZoneDB {
                    id: Uuid::new_v4().to_string(),
                    budget_id: new_zone.budget_id,
                    name: new_zone.name,
                    created_at: now.clone(),
                    updated_at: now,
                };

                let result_db = diesel::insert_into(zones::table)
                    .values(&zone_db)
                    .returning(ZoneDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Zone::from(result_db))
            })
            .await
    }

    async fn rename(&self, zone_id: String, name: String) -> Result<Zone> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Zone> {
                let result_db = diesel::update(zones::table.find(&zone_id))
                    .set((zones::name.eq(&name), zones::updated_at.eq(now_utc_text())))
                    .returning(ZoneDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Zone::from(result_db))
            })
            .await
    }

    async fn delete(&self, zone_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(zones::table.find(&zone_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
