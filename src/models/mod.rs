pub mod candidate;
pub mod process;
pub mod user;
