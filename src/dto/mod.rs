pub mod process_dto;
pub mod stats_dto;
pub mod user_dto;
