//! Funding entity - External money received for a project (grant, donation,
//! research fund, partnership, or sponsorship).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// External funding database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fundings")]
pub struct Model {
    /// Unique identifier for the funding record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project this funding belongs to
    pub project_id: i64,
    /// Funded amount, always positive
    pub amount: f64,
    /// Where the money came from (free text, e.g. `"WHO"`, `"USAID"`)
    pub source: String,
    /// Funding kind (`"Grant"`, `"Donation"`, `"Research Fund"`, ...)
    pub funding_type: String,
    /// Description, defaults to `"{type} funding from {source}"`
    pub description: String,
    /// When the funding was recorded
    pub created_at: DateTimeUtc,
    /// Uid of the recording user
    pub created_by: String,
    /// Display name of the recording user
    pub created_by_name: String,
    /// Email of the recording user
    pub created_by_email: String,
}

/// No enforced relationship; `project_id` is a convention-only reference.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
