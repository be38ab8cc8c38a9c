pub mod process_service;
pub mod stats_service;
pub mod user_service;
