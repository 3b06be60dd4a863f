#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result, ValidationError};
    use crate::games::{
        Game, GameRepositoryTrait, GameService, GameServiceTrait, GameWithPlatform, NewGame,
    };
    use crate::platforms::{NewPlatform, Platform, PlatformRepositoryTrait, PlatformService};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // --- Mock PlatformRepository ---
    struct MockPlatformRepository {
        platforms: Vec<Platform>,
        fail_lookups: bool,
    }

    #[async_trait]
    impl PlatformRepositoryTrait for MockPlatformRepository {
        fn load_platforms(&self) -> Result<Vec<Platform>> {
            Ok(self.platforms.clone())
        }

        fn get_platform(&self, platform_id: i32) -> Result<Option<Platform>> {
            if self.fail_lookups {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "database is locked".to_string(),
                )));
            }
            Ok(self.platforms.iter().find(|p| p.id == platform_id).cloned())
        }

        fn count_items_for_platform(&self, _: i32) -> Result<i64> {
            unimplemented!()
        }

        async fn insert_new_platform(&self, _: NewPlatform) -> Result<Platform> {
            unimplemented!()
        }

        async fn delete_platform(&self, _: i32) -> Result<usize> {
            unimplemented!()
        }
    }

    // --- Mock GameRepository ---
    #[derive(Default)]
    struct MockGameRepository {
        games: Mutex<Vec<Game>>,
        platforms: Vec<Platform>,
        fail_with_fk_violation: bool,
    }

    #[async_trait]
    impl GameRepositoryTrait for MockGameRepository {
        fn load_games_with_platform(&self) -> Result<Vec<GameWithPlatform>> {
            let games = self.games.lock().unwrap();
            Ok(games
                .iter()
                .filter_map(|g| {
                    let platform = self.platforms.iter().find(|p| p.id == g.platform_id)?;
                    Some(GameWithPlatform {
                        id: g.id,
                        title: g.title.clone(),
                        score: g.score,
                        platform: platform.clone(),
                        image_url: g.image_url.clone(),
                    })
                })
                .collect())
        }

        async fn insert_new_game(&self, new_game: NewGame) -> Result<Game> {
            if self.fail_with_fk_violation {
                return Err(Error::Database(DatabaseError::ForeignKeyViolation(
                    "FOREIGN KEY constraint failed".to_string(),
                )));
            }
            let mut games = self.games.lock().unwrap();
            let game = Game {
                id: games.iter().map(|g| g.id).max().unwrap_or(0) + 1,
                title: new_game.title,
                score: new_game.score,
                platform_id: new_game.platform_id,
                image_url: new_game.image_url,
            };
            games.push(game.clone());
            Ok(game)
        }

        async fn delete_game(&self, game_id: i32) -> Result<usize> {
            let mut games = self.games.lock().unwrap();
            let before = games.len();
            games.retain(|g| g.id != game_id);
            Ok(before - games.len())
        }
    }

    fn platforms() -> Vec<Platform> {
        vec![
            Platform {
                id: 1,
                name: "PC".to_string(),
            },
            Platform {
                id: 2,
                name: "Switch".to_string(),
            },
        ]
    }

    fn setup(fail_with_fk_violation: bool) -> GameService {
        setup_with_platform_lookups(fail_with_fk_violation, false)
    }

    fn setup_with_platform_lookups(
        fail_with_fk_violation: bool,
        fail_lookups: bool,
    ) -> GameService {
        let game_repo = Arc::new(MockGameRepository {
            platforms: platforms(),
            fail_with_fk_violation,
            ..Default::default()
        });
        let platform_repo = Arc::new(MockPlatformRepository {
            platforms: platforms(),
            fail_lookups,
        });
        let platform_service = Arc::new(PlatformService::new(platform_repo));
        GameService::new(game_repo, platform_service)
    }

    fn new_game(title: &str, score: f64, platform_id: i32) -> NewGame {
        NewGame {
            title: title.to_string(),
            score,
            platform_id,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_game_embeds_platform_in_listing() {
        let svc = setup(false);

        let created = svc
            .create_game(NewGame {
                image_url: Some("https://img.example/zelda.png".to_string()),
                ..new_game("Zelda", 9.5, 2)
            })
            .await
            .unwrap();

        let games = svc.get_games().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, created.id);
        assert_eq!(games[0].platform.name, "Switch");
        assert_eq!(
            games[0].image_url.as_deref(),
            Some("https://img.example/zelda.png")
        );
    }

    #[tokio::test]
    async fn test_create_game_with_zero_score() {
        let svc = setup(false);

        let created = svc.create_game(new_game("E.T.", 0.0, 1)).await.unwrap();

        assert_eq!(created.score, 0.0);
    }

    #[tokio::test]
    async fn test_create_game_blank_title_not_persisted() {
        let svc = setup(false);

        let err = svc.create_game(new_game("", 7.0, 1)).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(svc.get_games().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_game_unknown_platform_not_persisted() {
        let svc = setup(false);

        let err = svc.create_game(new_game("Halo", 8.0, 77)).await.unwrap_err();

        match err {
            Error::Validation(ValidationError::InvalidInput(msg)) => {
                assert_eq!(msg, "Platform 77 does not exist")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(svc.get_games().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_game_fk_violation_maps_to_validation() {
        let svc = setup(true);

        let err = svc.create_game(new_game("Halo", 8.0, 1)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_create_game_platform_lookup_failure_is_not_a_validation_error() {
        let svc = setup_with_platform_lookups(false, true);

        let err = svc.create_game(new_game("Halo", 8.0, 1)).await.unwrap_err();

        assert!(matches!(err, Error::Database(DatabaseError::QueryFailed(_))));
        assert!(svc.get_games().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_game_then_again_is_not_found() {
        let svc = setup(false);
        let created = svc.create_game(new_game("Doom", 9.0, 1)).await.unwrap();

        svc.delete_game(created.id).await.unwrap();
        let err = svc.delete_game(created.id).await.unwrap_err();

        assert!(matches!(err, Error::NotFound { entity: "Game", .. }));
        assert!(svc.get_games().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_game_on_empty_store() {
        let svc = setup(false);

        let err = svc.delete_game(99999).await.unwrap_err();

        assert_eq!(err.to_string(), "Game not found");
    }
}
