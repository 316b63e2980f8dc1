//! Project entity - A showcased project with its public metadata and vote
//! counter. Financial records (allocations, fundings, transactions) reference
//! projects by `project_id` only; deleting a project does not cascade.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project name as shown on the site
    pub name: String,
    /// Longer description
    pub description: String,
    /// Cover image URL, if set
    pub image: Option<String>,
    /// Service category (`"data-engineering"`, `"software-dev"`, ...)
    pub category: String,
    /// Comma-separated technology list, display only
    pub technologies: Option<String>,
    /// Live deployment URL, if any
    pub live_url: Option<String>,
    /// Source repository URL, if any
    pub github_url: Option<String>,
    /// Display start date as entered in the admin form
    pub start_date: Option<String>,
    /// Display end date as entered in the admin form
    pub end_date: Option<String>,
    /// Public vote counter, incremented atomically by the store
    pub votes: i32,
    /// When the project was created
    pub created_at: DateTimeUtc,
    /// When the project was last edited, if ever
    pub updated_at: Option<DateTimeUtc>,
}

/// Projects own ledger records by `project_id` convention only; no enforced
/// relationship exists so orphaned children are tolerated.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Splits the comma-separated technology field for display.
    #[must_use]
    pub fn technology_list(&self) -> Vec<String> {
        self.technologies
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
