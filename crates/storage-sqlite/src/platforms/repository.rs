use gamevault_core::platforms::{NewPlatform, Platform, PlatformRepositoryTrait};
use gamevault_core::{Error, Result};

use super::model::{NewPlatformDB, PlatformDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{items, platforms};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct PlatformRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

fn count_items(conn: &mut SqliteConnection, platform_id: i32) -> Result<i64> {
    Ok(items::table
        .filter(items::platform_id.eq(platform_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(StorageError::from)?)
}

impl PlatformRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PlatformRepository { pool, writer }
    }
}

#[async_trait]
impl PlatformRepositoryTrait for PlatformRepository {
    fn load_platforms(&self) -> Result<Vec<Platform>> {
        let mut conn = get_connection(&self.pool)?;
        let platforms_db = platforms::table
            .order(platforms::id.asc())
            .select(PlatformDB::as_select())
            .load::<PlatformDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(platforms_db.into_iter().map(Platform::from).collect())
    }

    fn get_platform(&self, platform_id: i32) -> Result<Option<Platform>> {
        let mut conn = get_connection(&self.pool)?;
        let platform_db = platforms::table
            .find(platform_id)
            .select(PlatformDB::as_select())
            .first::<PlatformDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(platform_db.map(Platform::from))
    }

    fn count_items_for_platform(&self, platform_id: i32) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        count_items(&mut conn, platform_id)
    }

    async fn insert_new_platform(&self, new_platform: NewPlatform) -> Result<Platform> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Platform> {
                let new_platform_db: NewPlatformDB = new_platform.into();
                let result_db = diesel::insert_into(platforms::table)
                    .values(&new_platform_db)
                    .returning(PlatformDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Platform::from(result_db))
            })
            .await
    }

    async fn delete_platform(&self, platform_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let referencing = count_items(conn, platform_id)?;
                if referencing > 0 {
                    return Err(Error::ConstraintViolation(format!(
                        "Platform {} is still referenced by {} game(s)",
                        platform_id, referencing
                    )));
                }
                Ok(diesel::delete(platforms::table.find(platform_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
