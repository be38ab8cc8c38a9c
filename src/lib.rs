pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    process_service::ProcessService, stats_service::StatsService, user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub stats_service: StatsService,
    pub process_service: ProcessService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_stats_service(pool.clone(), StatsService::new(pool))
    }

    /// Builds the state around a preconfigured stats service, e.g. one with a fixed clock.
    pub fn with_stats_service(pool: PgPool, stats_service: StatsService) -> Self {
        let process_service = ProcessService::new(pool.clone());
        let user_service = UserService::new(pool.clone());

        Self {
            pool,
            stats_service,
            process_service,
            user_service,
        }
    }
}
