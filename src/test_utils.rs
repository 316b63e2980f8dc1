//! Shared test utilities.
//!
//! Helpers for setting up in-memory test databases, seeding records with
//! sensible defaults, and building in-memory ledger snapshots for the pure
//! aggregation tests.

use crate::{
    core::{project, staff},
    entities,
    errors::Result,
    live::ChangeFeed,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a fresh change feed for tests that do not inspect events.
#[must_use]
pub fn test_feed() -> ChangeFeed {
    ChangeFeed::default()
}

/// Creates a test project with sensible defaults: empty description,
/// "software-dev" category, zero votes.
pub async fn create_test_project(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::project::Model> {
    project::create_project(
        db,
        project::ProjectDraft {
            name: name.to_string(),
            category: "software-dev".to_string(),
            ..project::ProjectDraft::default()
        },
    )
    .await
}

/// Creates a test staff member with the position "Engineer".
pub async fn create_test_staff(
    db: &DatabaseConnection,
    name: &str,
    salary: Option<f64>,
) -> Result<entities::staff_member::Model> {
    staff::create_staff_member(db, name, Some("Engineer".to_string()), salary).await
}

/// Builds in-memory allocation records with the given amounts, for exercising
/// the pure aggregation without a database.
#[must_use]
pub fn allocation_snapshot(amounts: &[f64]) -> Vec<entities::allocation::Model> {
    amounts
        .iter()
        .enumerate()
        .map(|(index, &amount)| entities::allocation::Model {
            id: index as i64 + 1,
            project_id: 1,
            amount,
            description: "Budget Allocation".to_string(),
            allocated_at: chrono::Utc::now(),
            created_by: "anonymous".to_string(),
            created_by_name: "Anonymous User".to_string(),
            updated_at: None,
            updated_by: None,
            updated_by_name: None,
        })
        .collect()
}

/// Builds in-memory funding records with the given amounts.
#[must_use]
pub fn funding_snapshot(amounts: &[f64]) -> Vec<entities::funding::Model> {
    amounts
        .iter()
        .enumerate()
        .map(|(index, &amount)| entities::funding::Model {
            id: index as i64 + 1,
            project_id: 1,
            amount,
            source: "WHO".to_string(),
            funding_type: "Grant".to_string(),
            description: "Grant funding from WHO".to_string(),
            created_at: chrono::Utc::now(),
            created_by: "anonymous".to_string(),
            created_by_name: "Anonymous User".to_string(),
            created_by_email: "no-email@example.com".to_string(),
        })
        .collect()
}

/// Builds in-memory transaction records from `(amount, status)` pairs.
#[must_use]
pub fn transaction_snapshot(entries: &[(f64, &str)]) -> Vec<entities::transaction::Model> {
    entries
        .iter()
        .enumerate()
        .map(|(index, &(amount, status))| entities::transaction::Model {
            id: index as i64 + 1,
            project_id: 1,
            amount,
            status: status.to_string(),
            category: "procurement".to_string(),
            staff_id: None,
            staff_name: None,
            procurement_type: Some("Operations & admin".to_string()),
            procurement_details: Some("Supplies".to_string()),
            description: "Operations & admin: Supplies".to_string(),
            created_at: chrono::Utc::now(),
            created_by: "anonymous".to_string(),
            created_by_name: "Anonymous User".to_string(),
            created_by_email: "no-email@example.com".to_string(),
            updated_at: None,
            updated_by: None,
            updated_by_name: None,
        })
        .collect()
}
