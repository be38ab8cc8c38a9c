pub mod dashboard;
pub mod health;
pub mod process;
pub mod users;

use axum::{
    routing::get,
    Router,
};

use crate::error::{Error, Result};
use crate::AppState;

/// Parses a numeric path identifier, rejecting anything that is not a 32-bit integer.
pub fn parse_id(raw: &str, message: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| Error::BadRequest(message.to_string()))
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(dashboard::get_dashboard_stats))
        .route(
            "/process/:id",
            get(process::get_process)
                .put(process::update_process)
                .delete(process::delete_process),
        )
        .route("/users", get(users::list_users).post(users::create_user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42", "bad").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "bad").unwrap(), 7);
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        for raw in ["abc", "12abc", "", "1.5", "99999999999"] {
            match parse_id(raw, "Invalid process id") {
                Err(Error::BadRequest(msg)) => assert_eq!(msg, "Invalid process id"),
                other => panic!("expected BadRequest for {:?}, got {:?}", raw, other),
            }
        }
    }
}
