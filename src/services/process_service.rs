use sqlx::PgPool;

use crate::dto::process_dto::ProcessUpdate;
use crate::error::{Error, Result};
use crate::models::candidate::ProcessCandidate;
use crate::models::process::Process;

const PROCESS_COLUMNS: &str =
    "id, job_offer, job_offer_description, company_id, opened_at, closed_at, pre_filtered, status";

#[derive(Clone)]
pub struct ProcessService {
    pool: PgPool,
}

impl ProcessService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Process>> {
        let process = sqlx::query_as::<_, Process>(&format!(
            "SELECT {} FROM process WHERE id = $1",
            PROCESS_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(process)
    }

    pub async fn list_candidates(&self, process_id: i32) -> Result<Vec<ProcessCandidate>> {
        let candidates = sqlx::query_as::<_, ProcessCandidate>(
            r#"
            SELECT c.id, c.name, c.email, c.phone, c.address, c.jsongpt_text
            FROM candidate_process cp
            JOIN candidates c ON c.id = cp.candidate_id
            WHERE cp.process_id = $1
            ORDER BY cp.id
            "#,
        )
        .bind(process_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    /// Loads a process together with its linked candidates.
    pub async fn get_with_candidates(
        &self,
        id: i32,
    ) -> Result<Option<(Process, Vec<ProcessCandidate>)>> {
        let Some(process) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        let candidates = self.list_candidates(process.id).await?;
        Ok(Some((process, candidates)))
    }

    /// Overwrites every editable column; `status` is kept when not supplied.
    pub async fn update(&self, id: i32, update: ProcessUpdate) -> Result<Process> {
        let process = sqlx::query_as::<_, Process>(&format!(
            r#"
            UPDATE process
            SET
                job_offer = $2,
                job_offer_description = $3,
                company_id = $4,
                opened_at = $5,
                closed_at = $6,
                pre_filtered = $7,
                status = COALESCE($8, status)
            WHERE id = $1
            RETURNING {}
            "#,
            PROCESS_COLUMNS
        ))
        .bind(id)
        .bind(&update.job_offer)
        .bind(&update.job_offer_description)
        .bind(update.company_id)
        .bind(update.opened_at)
        .bind(update.closed_at)
        .bind(update.pre_filtered)
        .bind(update.status.map(|s| s.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::operation("Error updating process", e))?;

        tracing::info!(process_id = process.id, "Process updated");
        Ok(process)
    }

    /// Deletes a process and returns the row as it was before removal.
    pub async fn delete(&self, id: i32) -> Result<Process> {
        let process = sqlx::query_as::<_, Process>(&format!(
            "DELETE FROM process WHERE id = $1 RETURNING {}",
            PROCESS_COLUMNS
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::operation("Error deleting process", e))?;

        tracing::info!(process_id = process.id, "Process deleted");
        Ok(process)
    }
}
