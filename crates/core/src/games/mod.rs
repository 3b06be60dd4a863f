//! Games module - domain models, services, and traits.

mod games_model;
mod games_service;
mod games_traits;

#[cfg(test)]
mod games_service_tests;

pub use games_model::{Game, GameWithPlatform, NewGame, GAME_ENTITY};
pub use games_service::GameService;
pub use games_traits::{GameRepositoryTrait, GameServiceTrait};
