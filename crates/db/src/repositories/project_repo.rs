//! Repository for the `projects` table.

use chrono::Utc;
use sqlx::types::Json;

use crate::models::project::{NewProject, Project, ProjectChanges, ProjectSummaryRow};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, client, location, completion_date, description, \
                       challenge, solution, features, images, created_at, updated_at";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// A duplicate id fails the primary-key constraint; callers detect that
    /// case with [`crate::is_unique_violation`].
    pub async fn create(pool: &DbPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO projects ({COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.client)
            .bind(&input.location)
            .bind(&input.completion_date)
            .bind(&input.description)
            .bind(&input.challenge)
            .bind(&input.solution)
            .bind(Json(&input.features))
            .bind(Json(&input.images))
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, rowid DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Public list projection with optional category filter and row limit,
    /// most recently created first.
    pub async fn list_summaries(
        pool: &DbPool,
        category: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<ProjectSummaryRow>, sqlx::Error> {
        let mut query = String::from("SELECT id, title, category, images FROM projects");
        if category.is_some() {
            query.push_str(" WHERE category = ?");
        }
        query.push_str(" ORDER BY created_at DESC, rowid DESC");
        if limit.is_some() {
            query.push_str(" LIMIT ?");
        }

        let mut q = sqlx::query_as::<_, ProjectSummaryRow>(&query);
        if let Some(category) = category {
            q = q.bind(category);
        }
        if let Some(limit) = limit {
            q = q.bind(limit);
        }
        q.fetch_all(pool).await
    }

    /// Overwrite every editable field of a project.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &ProjectChanges,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = ?, category = ?, client = ?, location = ?,
                completion_date = ?, description = ?, challenge = ?, solution = ?,
                features = ?, images = ?, updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.client)
            .bind(&input.location)
            .bind(&input.completion_date)
            .bind(&input.description)
            .bind(&input.challenge)
            .bind(&input.solution)
            .bind(Json(&input.features))
            .bind(Json(&input.images))
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct category names, alphabetical.
    pub async fn distinct_categories(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT category FROM projects ORDER BY category")
            .fetch_all(pool)
            .await
    }
}
