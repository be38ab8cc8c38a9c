use std::sync::Arc;

use chrono::{DateTime, Months, Utc};
use sqlx::PgPool;

use crate::dto::stats_dto::{DashboardStats, HistoricoTiempos};
use crate::error::{Error, Result};
use crate::models::process::{ClosedProcess, ProcessStatus};
use crate::utils::time::{days_between, Clock, SystemClock};

/// Number of most recently closed processes charted on the dashboard.
pub const HISTORY_SIZE: i64 = 6;
/// Calendar months covered by the "closed this quarter" counter.
pub const LOOKBACK_MONTHS: u32 = 3;
/// Candidate-management status counted as an active professional.
pub const ACTIVE_CANDIDATE_STATUS: &str = "activo";

pub const STATS_ERROR_MESSAGE: &str = "Error al obtener estadísticas del dashboard";

/// Instants a single stats request is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindow {
    pub now: DateTime<Utc>,
    pub quarter_start: DateTime<Utc>,
}

impl StatsWindow {
    pub fn at(now: DateTime<Utc>) -> Self {
        let quarter_start = now
            .checked_sub_months(Months::new(LOOKBACK_MONTHS))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { now, quarter_start }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::at(clock.now())
    }
}

/// Whole days a process stayed open, never less than one.
pub fn closing_duration_days(opened_at: DateTime<Utc>, closed_at: DateTime<Utc>) -> i64 {
    (days_between(opened_at, closed_at).round() as i64).max(1)
}

/// Builds the chart series from rows ordered newest-closed first and returns it
/// oldest-closed first together with the rounded average duration.
pub fn summarize_history(newest_first: Vec<ClosedProcess>) -> (HistoricoTiempos, i64) {
    let mut history = HistoricoTiempos::default();
    for row in newest_first.into_iter().rev() {
        history
            .values
            .push(closing_duration_days(row.opened_at, row.closed_at));
        history.labels.push(row.job_offer);
    }

    let average = if history.values.is_empty() {
        0
    } else {
        let sum: i64 = history.values.iter().sum();
        (sum as f64 / history.values.len() as f64).round() as i64
    };

    (history, average)
}

pub fn days_since(opened_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    opened_at
        .map(|opened| days_between(opened, now).floor() as i64)
        .unwrap_or(0)
}

#[derive(Clone)]
pub struct StatsService {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats> {
        self.collect()
            .await
            .map_err(|e| Error::operation(STATS_ERROR_MESSAGE, e))
    }

    async fn collect(&self) -> sqlx::Result<DashboardStats> {
        let window = StatsWindow::from_clock(self.clock.as_ref());

        let (activos, cerrados, cerrados_trimestre, profesionales, closed) = tokio::try_join!(
            self.count_open(),
            self.count_closed(),
            self.count_closed_since(window.quarter_start),
            self.count_active_professionals(),
            self.recently_closed(window.now),
        )?;

        let (historico_tiempos, promedio_cierre) = summarize_history(closed);
        let last_opened = self.latest_open_opened_at().await?;

        tracing::debug!(
            activos,
            cerrados,
            charted = historico_tiempos.values.len(),
            "Dashboard stats collected"
        );

        Ok(DashboardStats {
            activos_count: activos,
            cerrados_count: cerrados,
            cerrados_trimestre_count: cerrados_trimestre,
            profesionales_count: profesionales,
            historico_tiempos,
            dias_desde_ultimo_proceso_activo: days_since(last_opened, window.now),
            promedio_cierre,
        })
    }

    async fn count_open(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM process WHERE LOWER(status) = $1")
            .bind(ProcessStatus::Open.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn count_closed(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM process WHERE LOWER(status) = $1 AND closed_at IS NOT NULL",
        )
        .bind(ProcessStatus::Closed.as_str())
        .fetch_one(&self.pool)
        .await
    }

    async fn count_closed_since(&self, since: DateTime<Utc>) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM process WHERE LOWER(status) = $1 AND closed_at >= $2",
        )
        .bind(ProcessStatus::Closed.as_str())
        .bind(since)
        .fetch_one(&self.pool)
        .await
    }

    async fn count_active_professionals(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM candidates c
            WHERE EXISTS (
                SELECT 1 FROM candidate_management cm
                WHERE cm.candidate_id = c.id AND LOWER(cm.status) = $1
            )
            "#,
        )
        .bind(ACTIVE_CANDIDATE_STATUS)
        .fetch_one(&self.pool)
        .await
    }

    async fn recently_closed(&self, now: DateTime<Utc>) -> sqlx::Result<Vec<ClosedProcess>> {
        sqlx::query_as::<_, ClosedProcess>(
            r#"
            SELECT job_offer, opened_at, closed_at
            FROM process
            WHERE LOWER(status) = $1
              AND opened_at IS NOT NULL
              AND closed_at IS NOT NULL
              AND closed_at <= $2
            ORDER BY closed_at DESC
            LIMIT $3
            "#,
        )
        .bind(ProcessStatus::Closed.as_str())
        .bind(now)
        .bind(HISTORY_SIZE)
        .fetch_all(&self.pool)
        .await
    }

    async fn latest_open_opened_at(&self) -> sqlx::Result<Option<DateTime<Utc>>> {
        let opened_at = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            r#"
            SELECT opened_at
            FROM process
            WHERE LOWER(status) = $1
            ORDER BY opened_at DESC
            LIMIT 1
            "#,
        )
        .bind(ProcessStatus::Open.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(opened_at.flatten())
    }
}
