//! Database models for games.

use diesel::prelude::*;

use crate::platforms::PlatformDB;

/// Database model for a row of the `items` table
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(PlatformDB, foreign_key = platform_id))]
#[diesel(table_name = crate::schema::items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GameDB {
    pub id: i32,
    pub title: String,
    pub score: f64,
    pub platform_id: i32,
    pub image_url: Option<String>,
}

/// Database model for creating a new game
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::items)]
pub struct NewGameDB {
    pub title: String,
    pub score: f64,
    pub platform_id: i32,
    pub image_url: Option<String>,
}

impl From<GameDB> for gamevault_core::games::Game {
    fn from(db: GameDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            score: db.score,
            platform_id: db.platform_id,
            image_url: db.image_url,
        }
    }
}

impl GameDB {
    /// Builds the listing entry for this row and the platform it joined with.
    pub fn into_listing(self, platform: PlatformDB) -> gamevault_core::games::GameWithPlatform {
        gamevault_core::games::GameWithPlatform {
            id: self.id,
            title: self.title,
            score: self.score,
            platform: platform.into(),
            image_url: self.image_url,
        }
    }
}

impl From<gamevault_core::games::NewGame> for NewGameDB {
    fn from(domain: gamevault_core::games::NewGame) -> Self {
        Self {
            title: domain.title,
            score: domain.score,
            platform_id: domain.platform_id,
            image_url: domain.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_takes_the_joined_platform() {
        let game = GameDB {
            id: 4,
            title: "Celeste".to_string(),
            score: 9.0,
            platform_id: 2,
            image_url: None,
        };
        let platform = PlatformDB {
            id: 2,
            name: "Switch".to_string(),
        };

        let listing = game.into_listing(platform);

        assert_eq!(listing.id, 4);
        assert_eq!(listing.title, "Celeste");
        assert_eq!(listing.platform.id, 2);
        assert_eq!(listing.platform.name, "Switch");
        assert!(listing.image_url.is_none());
    }
}
