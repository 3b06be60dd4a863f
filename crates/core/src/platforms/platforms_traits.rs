use crate::errors::Result;
use crate::platforms::platforms_model::{NewPlatform, Platform};
use async_trait::async_trait;

/// Trait for platform repository operations
#[async_trait]
pub trait PlatformRepositoryTrait: Send + Sync {
    fn load_platforms(&self) -> Result<Vec<Platform>>;
    fn get_platform(&self, platform_id: i32) -> Result<Option<Platform>>;
    fn count_items_for_platform(&self, platform_id: i32) -> Result<i64>;
    async fn insert_new_platform(&self, new_platform: NewPlatform) -> Result<Platform>;
    /// Removes the platform when nothing references it.
    ///
    /// Returns the number of deleted rows (0 when the id is unknown) or
    /// `Error::ConstraintViolation` when items still point at the platform.
    async fn delete_platform(&self, platform_id: i32) -> Result<usize>;
}

/// Trait for platform service operations
#[async_trait]
pub trait PlatformServiceTrait: Send + Sync {
    fn get_platforms(&self) -> Result<Vec<Platform>>;
    fn get_platform(&self, platform_id: i32) -> Result<Platform>;
    async fn create_platform(&self, new_platform: NewPlatform) -> Result<Platform>;
    async fn delete_platform(&self, platform_id: i32) -> Result<()>;
}
