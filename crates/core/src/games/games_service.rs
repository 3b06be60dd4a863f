use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::games::games_model::{Game, GameWithPlatform, NewGame, GAME_ENTITY};
use crate::games::games_traits::{GameRepositoryTrait, GameServiceTrait};
use crate::platforms::PlatformServiceTrait;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct GameService {
    game_repo: Arc<dyn GameRepositoryTrait>,
    platform_service: Arc<dyn PlatformServiceTrait>,
}

impl GameService {
    pub fn new(
        game_repo: Arc<dyn GameRepositoryTrait>,
        platform_service: Arc<dyn PlatformServiceTrait>,
    ) -> Self {
        GameService {
            game_repo,
            platform_service,
        }
    }

    fn unknown_platform(platform_id: i32) -> Error {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Platform {} does not exist",
            platform_id
        )))
    }
}

#[async_trait]
impl GameServiceTrait for GameService {
    fn get_games(&self) -> Result<Vec<GameWithPlatform>> {
        self.game_repo.load_games_with_platform()
    }

    async fn create_game(&self, mut new_game: NewGame) -> Result<Game> {
        new_game.validate()?;

        let platform_id = new_game.platform_id;
        match self.platform_service.get_platform(platform_id) {
            Ok(_) => {}
            Err(Error::NotFound { .. }) => return Err(Self::unknown_platform(platform_id)),
            Err(e) => return Err(e),
        }

        // The foreign key still guards against the platform vanishing in between.
        let game = self
            .game_repo
            .insert_new_game(new_game)
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::ForeignKeyViolation(_)) => {
                    Self::unknown_platform(platform_id)
                }
                other => other,
            })?;
        debug!("Created game {} on platform {}", game.id, game.platform_id);
        Ok(game)
    }

    async fn delete_game(&self, game_id: i32) -> Result<()> {
        match self.game_repo.delete_game(game_id).await? {
            0 => Err(Error::not_found(GAME_ENTITY, game_id)),
            _ => {
                debug!("Deleted game {}", game_id);
                Ok(())
            }
        }
    }
}
