use std::sync::Arc;

use crate::config::Config;
use gamevault_core::{
    games::{GameService, GameServiceTrait},
    platforms::{PlatformService, PlatformServiceTrait},
};
use gamevault_storage_sqlite::{
    db::{self, write_actor},
    games::GameRepository,
    platforms::PlatformRepository,
    DbPool,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Everything a handler needs, built once at startup and shared through axum state.
pub struct AppState {
    pub platform_service: Arc<dyn PlatformServiceTrait + Send + Sync>,
    pub game_service: Arc<dyn GameServiceTrait + Send + Sync>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let platform_repository = Arc::new(PlatformRepository::new(pool.clone(), writer.clone()));
    let game_repository = Arc::new(GameRepository::new(pool.clone(), writer.clone()));

    let platform_service = Arc::new(PlatformService::new(platform_repository));
    let game_service = Arc::new(GameService::new(game_repository, platform_service.clone()));

    Ok(Arc::new(AppState {
        platform_service,
        game_service,
        pool,
    }))
}
