//! Allocation entity - An internal budget assignment to a project.
//! Amounts are validated as positive before persistence; `updated_*` fields
//! are stamped only on edit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget allocation database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_allocations")]
pub struct Model {
    /// Unique identifier for the allocation
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project this allocation belongs to
    pub project_id: i64,
    /// Allocated amount, always positive
    pub amount: f64,
    /// Human-readable description
    pub description: String,
    /// When the allocation was created
    pub allocated_at: DateTimeUtc,
    /// Uid of the creating user
    pub created_by: String,
    /// Display name of the creating user
    pub created_by_name: String,
    /// When the allocation was last edited, if ever
    pub updated_at: Option<DateTimeUtc>,
    /// Uid of the last editor, if ever edited
    pub updated_by: Option<String>,
    /// Display name of the last editor, if ever edited
    pub updated_by_name: Option<String>,
}

/// No enforced relationship; `project_id` is a convention-only reference.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
