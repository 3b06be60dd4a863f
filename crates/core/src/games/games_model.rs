//! Game domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::platforms::Platform;

/// Name used for games in not-found errors.
pub const GAME_ENTITY: &str = "Game";

/// Domain model representing a game record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub score: f64,
    pub platform_id: i32,
    pub image_url: Option<String>,
}

/// A game with its platform embedded, as returned by listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameWithPlatform {
    pub id: i32,
    pub title: String,
    pub score: f64,
    pub platform: Platform,
    pub image_url: Option<String>,
}

/// Input model for creating a new game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub score: f64,
    pub platform_id: i32,
    pub image_url: Option<String>,
}

impl NewGame {
    /// Validates the game data, trimming the title and dropping a blank image URL.
    ///
    /// A score of zero is a legitimate rating and is accepted.
    pub fn validate(&mut self) -> Result<()> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Game title cannot be empty".to_string(),
            )));
        }
        self.title = title.to_string();

        if !self.score.is_finite() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Game score must be a finite number".to_string(),
            )));
        }

        if self.platform_id <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid platform id {}",
                self.platform_id
            ))));
        }

        self.image_url = self
            .image_url
            .take()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(())
    }
}
