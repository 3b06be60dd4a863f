use gamevault_core::games::{Game, GameRepositoryTrait, GameWithPlatform, NewGame};
use gamevault_core::Result;

use super::model::{GameDB, NewGameDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::platforms::PlatformDB;
use crate::schema::{items, platforms};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GameRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GameRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GameRepository { pool, writer }
    }
}

#[async_trait]
impl GameRepositoryTrait for GameRepository {
    fn load_games_with_platform(&self) -> Result<Vec<GameWithPlatform>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = items::table
            .inner_join(platforms::table)
            .order(items::id.asc())
            .select((GameDB::as_select(), PlatformDB::as_select()))
            .load::<(GameDB, PlatformDB)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|(game, platform)| game.into_listing(platform))
            .collect())
    }

    async fn insert_new_game(&self, new_game: NewGame) -> Result<Game> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Game> {
                let new_game_db: NewGameDB = new_game.into();
                let result_db = diesel::insert_into(items::table)
                    .values(&new_game_db)
                    .returning(GameDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Game::from(result_db))
            })
            .await
    }

    async fn delete_game(&self, game_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(items::table.find(game_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
