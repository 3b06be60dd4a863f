use crate::errors::Result;
use crate::games::games_model::{Game, GameWithPlatform, NewGame};
use async_trait::async_trait;

/// Trait for game repository operations
#[async_trait]
pub trait GameRepositoryTrait: Send + Sync {
    fn load_games_with_platform(&self) -> Result<Vec<GameWithPlatform>>;
    async fn insert_new_game(&self, new_game: NewGame) -> Result<Game>;
    /// Returns the number of deleted rows (0 when the id is unknown).
    async fn delete_game(&self, game_id: i32) -> Result<usize>;
}

/// Trait for game service operations
#[async_trait]
pub trait GameServiceTrait: Send + Sync {
    fn get_games(&self) -> Result<Vec<GameWithPlatform>>;
    async fn create_game(&self, new_game: NewGame) -> Result<Game>;
    async fn delete_game(&self, game_id: i32) -> Result<()>;
}
