use crate::errors::{DatabaseError, Error, Result};
use crate::platforms::platforms_model::{NewPlatform, Platform, PLATFORM_ENTITY};
use crate::platforms::platforms_traits::{PlatformRepositoryTrait, PlatformServiceTrait};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct PlatformService {
    platform_repo: Arc<dyn PlatformRepositoryTrait>,
}

impl PlatformService {
    pub fn new(platform_repo: Arc<dyn PlatformRepositoryTrait>) -> Self {
        PlatformService { platform_repo }
    }

    fn referenced_error(platform_id: i32, count: i64) -> Error {
        Error::ConstraintViolation(format!(
            "Platform {} is still referenced by {} game(s)",
            platform_id, count
        ))
    }
}

#[async_trait]
impl PlatformServiceTrait for PlatformService {
    fn get_platforms(&self) -> Result<Vec<Platform>> {
        self.platform_repo.load_platforms()
    }

    fn get_platform(&self, platform_id: i32) -> Result<Platform> {
        self.platform_repo
            .get_platform(platform_id)?
            .ok_or_else(|| Error::not_found(PLATFORM_ENTITY, platform_id))
    }

    async fn create_platform(&self, mut new_platform: NewPlatform) -> Result<Platform> {
        new_platform.validate()?;
        let platform = self.platform_repo.insert_new_platform(new_platform).await?;
        debug!("Created platform {} ({})", platform.id, platform.name);
        Ok(platform)
    }

    async fn delete_platform(&self, platform_id: i32) -> Result<()> {
        let referencing = self.platform_repo.count_items_for_platform(platform_id)?;
        if referencing > 0 {
            return Err(Self::referenced_error(platform_id, referencing));
        }

        match self.platform_repo.delete_platform(platform_id).await {
            Ok(0) => Err(Error::not_found(PLATFORM_ENTITY, platform_id)),
            Ok(_) => {
                debug!("Deleted platform {}", platform_id);
                Ok(())
            }
            // A game was attached between the check and the delete.
            Err(Error::Database(DatabaseError::ForeignKeyViolation(_))) => {
                let count = self.platform_repo.count_items_for_platform(platform_id)?;
                Err(Self::referenced_error(platform_id, count))
            }
            Err(e) => Err(e),
        }
    }
}
