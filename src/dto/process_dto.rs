use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{Error, Result};
use crate::models::candidate::ProcessCandidate;
use crate::models::process::{Process, ProcessStatus};
use crate::utils::time::parse_timestamp;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: job_offer, job_offer_description, company_id";

/// `company_id` arrives either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompanyIdInput {
    Number(i64),
    Text(String),
}

/// `pre_filtered` arrives from form-driven clients as a boolean or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlagInput {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "company_id_not_blank"))]
pub struct UpdateProcessPayload {
    #[validate(required, length(min = 1))]
    pub job_offer: Option<String>,
    #[validate(required, length(min = 1))]
    pub job_offer_description: Option<String>,
    #[validate(required)]
    pub company_id: Option<CompanyIdInput>,
    pub opened_at: Option<String>,
    pub closed_at: Option<String>,
    pub pre_filtered: Option<FlagInput>,
    pub status: Option<String>,
}

/// A fully validated full-field update, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessUpdate {
    pub job_offer: String,
    pub job_offer_description: String,
    pub company_id: i32,
    pub opened_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub pre_filtered: bool,
    pub status: Option<ProcessStatus>,
}

impl UpdateProcessPayload {
    pub fn into_update(self) -> Result<ProcessUpdate> {
        self.validate().map_err(|_| missing_fields())?;

        let UpdateProcessPayload {
            job_offer: Some(job_offer),
            job_offer_description: Some(job_offer_description),
            company_id: Some(company_id),
            opened_at,
            closed_at,
            pre_filtered,
            status,
        } = self
        else {
            return Err(missing_fields());
        };
        let company_id = parse_company_id(&company_id)?;

        let opened_at = optional_timestamp(opened_at, "opened_at")?;
        let closed_at = optional_timestamp(closed_at, "closed_at")?;

        let pre_filtered = match pre_filtered {
            Some(FlagInput::Bool(flag)) => flag,
            Some(FlagInput::Text(s)) => s == "true",
            None => false,
        };

        let status = status
            .map(|s| {
                s.parse::<ProcessStatus>()
                    .map_err(|_| Error::BadRequest("Invalid status value".to_string()))
            })
            .transpose()?;

        Ok(ProcessUpdate {
            job_offer,
            job_offer_description,
            company_id,
            opened_at,
            closed_at,
            pre_filtered,
            status,
        })
    }
}

fn missing_fields() -> Error {
    Error::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
}

// Zero and blank ids are treated like an absent one.
fn company_id_not_blank(
    payload: &UpdateProcessPayload,
) -> std::result::Result<(), ValidationError> {
    match &payload.company_id {
        Some(CompanyIdInput::Number(0)) => Err(ValidationError::new("company_id")),
        Some(CompanyIdInput::Text(s)) if s.trim().is_empty() => {
            Err(ValidationError::new("company_id"))
        }
        _ => Ok(()),
    }
}

fn parse_company_id(input: &CompanyIdInput) -> Result<i32> {
    let invalid = || Error::BadRequest("Invalid company_id".to_string());
    match input {
        CompanyIdInput::Number(n) => i32::try_from(*n).map_err(|_| invalid()),
        CompanyIdInput::Text(s) => s.trim().parse::<i32>().map_err(|_| invalid()),
    }
}

fn optional_timestamp(value: Option<String>, field: &str) -> Result<Option<DateTime<Utc>>> {
    match value.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| Error::BadRequest(format!("Invalid {} date format", field))),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDetailResponse {
    pub process_id: i32,
    pub job_offer: String,
    pub job_offer_description: Option<String>,
    pub candidates: Vec<ProcessCandidate>,
}

impl ProcessDetailResponse {
    pub fn new(process: Process, candidates: Vec<ProcessCandidate>) -> Self {
        Self {
            process_id: process.id,
            job_offer: process.job_offer,
            job_offer_description: process.job_offer_description,
            candidates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProcessResponse {
    pub message: String,
    pub deleted_process: Process,
}
