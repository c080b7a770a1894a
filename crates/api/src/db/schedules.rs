//! Schedule repository for database operations.
//!
//! Customer names are resolved the same way as for orders: an owner-scoped
//! `LEFT JOIN` at read time, so deleting a customer never touches the
//! schedules that pointed at it.

use sqlx::SqlitePool;

use clientele_core::{OwnerId, ScheduleId};

use super::RepositoryError;
use crate::models::Schedule;

/// Repository for schedule database operations.
pub struct ScheduleRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScheduleRepository<'a> {
    /// Create a new schedule repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all of `owner`'s schedules with resolved customer names, in
    /// calendar order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, owner: &OwnerId) -> Result<Vec<Schedule>, RepositoryError> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r"
            SELECT s.id, s.title, s.date, s.start_time, s.end_time, s.kind,
                   s.customer_id,
                   CASE WHEN s.customer_id IS NULL THEN NULL
                        ELSE COALESCE(c.name, '')
                   END AS customer_name,
                   s.notes, s.created_by
            FROM schedules s
            LEFT JOIN customers c
                   ON c.id = s.customer_id AND c.created_by = s.created_by
            WHERE s.created_by = ?
            ORDER BY s.date ASC, s.start_time ASC
            ",
        )
        .bind(owner)
        .fetch_all(self.pool)
        .await?;

        Ok(schedules)
    }

    /// Insert a freshly built schedule record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, schedule: &Schedule) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO schedules (id, title, date, start_time, end_time,
                                   kind, customer_id, notes, created_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&schedule.id)
        .bind(&schedule.title)
        .bind(schedule.date)
        .bind(schedule.start_time)
        .bind(schedule.end_time)
        .bind(&schedule.kind)
        .bind(&schedule.customer_id)
        .bind(&schedule.notes)
        .bind(&schedule.created_by)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Delete one of `owner`'s schedules.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(
        &self,
        owner: &OwnerId,
        id: &ScheduleId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = ? AND created_by = ?")
            .bind(id)
            .bind(owner)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
