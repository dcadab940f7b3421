/// SQL query functions for the `projects` table
///
/// Mutations run inside a transaction. A transaction that is dropped
/// without `commit` is rolled back by sqlx, so an early `?` return never
/// leaves a half-applied change.

use crate::db::models::*;
use crate::db::Database;
use crate::error::{ProjError, Result};

impl Database {
    /// Insert a project or overwrite its directory if the name exists
    pub async fn upsert_project(&self, record: &ProjectRecord) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO projects (name, dir)
            VALUES (?, ?)
            ON CONFLICT(name) DO UPDATE SET dir = excluded.dir
            "#,
        )
        .bind(&record.name)
        .bind(&record.directory)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Get the project stored under `name`
    ///
    /// # Returns
    /// * `Ok(ProjectRecord)` - The stored record
    /// * `Err(ProjError::NotFound)` - If no project has that name
    pub async fn get_project(&self, name: &str) -> Result<ProjectRecord> {
        let mut tx = self.pool().begin().await?;

        let record =
            sqlx::query_as::<_, ProjectRecord>("SELECT name, dir FROM projects WHERE name = ?")
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;

        tx.commit().await?;

        record.ok_or_else(|| ProjError::NotFound(name.to_string()))
    }

    /// Delete a project; returns whether a row was removed
    pub async fn delete_project(&self, name: &str) -> Result<bool> {
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query("DELETE FROM projects WHERE name = ?")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// All projects, sorted by name
    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>> {
        let mut tx = self.pool().begin().await?;

        let projects =
            sqlx::query_as::<_, ProjectRecord>("SELECT name, dir FROM projects ORDER BY name")
                .fetch_all(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(projects)
    }
}
