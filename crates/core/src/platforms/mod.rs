//! Platforms module - domain models, services, and traits.

mod platforms_model;
mod platforms_service;
mod platforms_traits;

pub use platforms_model::{NewPlatform, Platform, PLATFORM_ENTITY};
pub use platforms_service::PlatformService;
pub use platforms_traits::{PlatformRepositoryTrait, PlatformServiceTrait};
