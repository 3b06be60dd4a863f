//! Database models for platforms.

use diesel::prelude::*;

/// Database model for platforms
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::platforms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlatformDB {
    pub id: i32,
    pub name: String,
}

/// Database model for creating a new platform; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::platforms)]
pub struct NewPlatformDB {
    pub name: String,
}

impl From<PlatformDB> for gamevault_core::platforms::Platform {
    fn from(db: PlatformDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
        }
    }
}

impl From<gamevault_core::platforms::NewPlatform> for NewPlatformDB {
    fn from(domain: gamevault_core::platforms::NewPlatform) -> Self {
        Self { name: domain.name }
    }
}
