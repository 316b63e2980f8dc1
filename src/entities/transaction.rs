//! Transaction entity - A recorded expenditure against a project's budget.
//!
//! Each transaction has a `project_id`, amount, status, and a category with
//! mutually exclusive detail fields: `staff_id`/`staff_name` are present iff
//! the category is salaries, `procurement_type`/`procurement_details` iff it
//! is procurement. Only approved transactions count towards spend.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project this expenditure is charged against
    pub project_id: i64,
    /// Transaction amount, always positive
    pub amount: f64,
    /// `"pending"`, `"approved"`, or `"rejected"`; `"approved"` at creation
    pub status: String,
    /// `"salaries"` or `"procurement"`
    pub category: String,
    /// Referenced staff member, salaries only
    pub staff_id: Option<i64>,
    /// Staff name denormalized at creation/edit time, salaries only
    pub staff_name: Option<String>,
    /// Procurement bucket (`"Operations & admin"`, `"ICT"`, `"Logistics"`)
    pub procurement_type: Option<String>,
    /// Free-text procurement details, procurement only
    pub procurement_details: Option<String>,
    /// Human-readable description
    pub description: String,
    /// When the transaction was created (aggregator clock, not store clock)
    pub created_at: DateTimeUtc,
    /// Uid of the creating user
    pub created_by: String,
    /// Display name of the creating user
    pub created_by_name: String,
    /// Email of the creating user
    pub created_by_email: String,
    /// When the transaction was last edited, if ever
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
