//! Platform domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Name used for platforms in not-found errors.
pub const PLATFORM_ENTITY: &str = "Platform";

/// Domain model representing a gaming platform or console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Platform {
    pub id: i32,
    pub name: String,
}

/// Input model for creating a new platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlatform {
    pub name: String,
}

impl NewPlatform {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Validates the platform data and trims the name in place.
    pub fn validate(&mut self) -> Result<()> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Platform name cannot be empty".to_string(),
            )));
        }
        self.name = trimmed.to_string();
        Ok(())
    }
}
