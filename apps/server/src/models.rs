//! Request and response bodies of the HTTP surface.

use gamevault_core::games as core_games;
use gamevault_core::platforms as core_platforms;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: i32,
    pub name: String,
}

impl From<core_platforms::Platform> for Platform {
    fn from(p: core_platforms::Platform) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

/// A game as listed by `GET /games`, with its platform embedded.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GameListing {
    pub id: i32,
    pub title: String,
    pub score: f64,
    pub platform: Platform,
    pub image_url: Option<String>,
}

impl From<core_games::GameWithPlatform> for GameListing {
    fn from(g: core_games::GameWithPlatform) -> Self {
        Self {
            id: g.id,
            title: g.title,
            score: g.score,
            platform: g.platform.into(),
            image_url: g.image_url,
        }
    }
}

/// A game as returned right after creation.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub score: f64,
    pub platform_id: i32,
    pub image_url: Option<String>,
}

impl From<core_games::Game> for Game {
    fn from(g: core_games::Game) -> Self {
        Self {
            id: g.id,
            title: g.title,
            score: g.score,
            platform_id: g.platform_id,
            image_url: g.image_url,
        }
    }
}

/// Every field is optional so a partial body can be reported as a 400
/// instead of failing deserialization.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct NewGame {
    pub title: Option<String>,
    pub score: Option<f64>,
    pub platform_id: Option<i32>,
    pub image_url: Option<String>,
}

impl NewGame {
    /// Presence check mirroring the service's own validation.
    pub fn into_core(self) -> Option<core_games::NewGame> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        Some(core_games::NewGame {
            title,
            score: self.score?,
            platform_id: self.platform_id?,
            image_url: self.image_url,
        })
    }
}

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct NewPlatform {
    pub name: Option<String>,
}

impl NewPlatform {
    pub fn into_core(self) -> Option<core_platforms::NewPlatform> {
        self.name
            .filter(|n| !n.trim().is_empty())
            .map(core_platforms::NewPlatform::new)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GameCreated {
    pub message: String,
    pub game: Game,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PlatformCreated {
    pub message: String,
    pub platform: Platform,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_requires_title_score_and_platform() {
        let full = NewGame {
            title: Some("Doom".into()),
            score: Some(0.0),
            platform_id: Some(1),
            image_url: None,
        };
        assert!(full.clone().into_core().is_some());
        assert!(NewGame {
            title: Some(" ".into()),
            ..full.clone()
        }
        .into_core()
        .is_none());
        assert!(NewGame {
            score: None,
            ..full.clone()
        }
        .into_core()
        .is_none());
        assert!(NewGame {
            platform_id: None,
            ..full
        }
        .into_core()
        .is_none());
    }

    #[test]
    fn partial_body_deserializes_with_absent_fields() {
        let body: NewGame = serde_json::from_str(r#"{"title":"Doom"}"#).unwrap();
        assert_eq!(body.title.as_deref(), Some("Doom"));
        assert!(body.score.is_none());
        assert!(body.into_core().is_none());
    }

    #[test]
    fn listing_serializes_null_image_url() {
        let listing = GameListing {
            id: 1,
            title: "Doom".into(),
            score: 9.0,
            platform: Platform {
                id: 2,
                name: "PC".into(),
            },
            image_url: None,
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["platform"]["name"], "PC");
        assert!(value["image_url"].is_null());
    }
}
