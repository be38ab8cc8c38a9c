use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Candidate fields exposed alongside a process.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProcessCandidate {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub jsongpt_text: Option<String>,
}
