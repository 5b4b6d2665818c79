//! Portfolio project entity model and DTOs.

use rivera_core::portfolio::ProjectSnapshot;
use rivera_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `features` and `images` are JSON text columns holding ordered string
/// arrays; the stored image order is the display order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub client: String,
    pub location: String,
    pub completion_date: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub features: Json<Vec<String>>,
    pub images: Json<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// View of the stored fields used to seed the edit form.
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            client: self.client.clone(),
            location: self.location.clone(),
            completion_date: self.completion_date.clone(),
            description: self.description.clone(),
            challenge: self.challenge.clone(),
            solution: self.solution.clone(),
            features: self.features.0.clone(),
            images: self.images.0.clone(),
        }
    }
}

/// DTO for inserting a project. The id is chosen by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub id: String,
    pub title: String,
    pub category: String,
    pub client: String,
    pub location: String,
    pub completion_date: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

/// DTO for updating a project. The editor always submits the full record,
/// so every field is required; the id itself cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectChanges {
    pub title: String,
    pub category: String,
    pub client: String,
    pub location: String,
    pub completion_date: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

/// Column projection for the public project list.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectSummaryRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub images: Json<Vec<String>>,
}
