use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Process {
    pub id: i32,
    pub job_offer: String,
    pub job_offer_description: Option<String>,
    pub company_id: Option<i32>,
    pub opened_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub pre_filtered: Option<bool>,
    pub status: Option<String>,
}

/// Lifecycle state of a hiring process as stored in `process.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Open,
    Closed,
}

impl ProcessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Open => "activo",
            ProcessStatus::Closed => "cerrado",
        }
    }
}

impl std::str::FromStr for ProcessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activo" => Ok(ProcessStatus::Open),
            "cerrado" => Ok(ProcessStatus::Closed),
            other => Err(format!("unknown process status '{}'", other)),
        }
    }
}

/// Row shape of the closing-history query.
#[derive(Debug, Clone, FromRow)]
pub struct ClosedProcess {
    pub job_offer: String,
    pub opened_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_ignores_case_and_padding() {
        assert_eq!("ACTIVO".parse::<ProcessStatus>(), Ok(ProcessStatus::Open));
        assert_eq!(" Cerrado ".parse::<ProcessStatus>(), Ok(ProcessStatus::Closed));
        assert!("pausado".parse::<ProcessStatus>().is_err());
    }

    #[test]
    fn status_round_trips_through_stored_string() {
        for status in [ProcessStatus::Open, ProcessStatus::Closed] {
            assert_eq!(status.as_str().parse::<ProcessStatus>(), Ok(status));
        }
    }
}
