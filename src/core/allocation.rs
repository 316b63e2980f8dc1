//! Budget allocation operations.
//!
//! Allocations are internal budget assignments to a project. Amounts arrive
//! as raw form strings and are validated before any write; edits re-validate
//! the amount and stamp `updated_at`/`updated_by`. Deletion is immediate and
//! permanent.

use crate::{
    core::validate,
    entities::{allocation, Allocation},
    errors::{Error, Result},
    identity::Identity,
    live::{ChangeFeed, LedgerCollection},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Fields accepted by an allocation edit. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AllocationUpdate {
    /// Raw replacement amount, re-validated as positive before the write
    pub amount: Option<String>,
    /// Replacement description
    pub description: Option<String>,
}

/// Creates a budget allocation after validating the raw amount. Stamps the
/// creation time from the local clock and publishes the committed change.
pub async fn add_allocation(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    project_id: i64,
    raw_amount: &str,
    description: &str,
    identity: &Identity,
) -> Result<allocation::Model> {
    let amount = validate::parse_amount(raw_amount)?;
    let stamp = identity.authorship();

    let model = allocation::ActiveModel {
        project_id: Set(project_id),
        amount: Set(amount),
        description: Set(if description.trim().is_empty() {
            "Budget Allocation".to_string()
        } else {
            description.trim().to_string()
        }),
        allocated_at: Set(chrono::Utc::now()),
        created_by: Set(stamp.uid),
        created_by_name: Set(stamp.name),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    feed.publish(LedgerCollection::Allocations, project_id);
    info!(allocation_id = created.id, project_id, amount, "allocation added");
    Ok(created)
}

/// Applies an edit to an existing allocation. The amount, if present, must
/// re-validate as positive; every edit stamps `updated_at` and the editor.
pub async fn update_allocation(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    allocation_id: i64,
    update: AllocationUpdate,
    identity: &Identity,
) -> Result<allocation::Model> {
    let amount = update.amount.as_deref().map(validate::parse_amount).transpose()?;

    let existing = Allocation::find_by_id(allocation_id)
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            kind: "allocation",
            id: allocation_id,
        })?;
    let project_id = existing.project_id;
    let stamp = identity.authorship();

    let mut active: allocation::ActiveModel = existing.into();
    if let Some(amount) = amount {
        active.amount = Set(amount);
    }
    if let Some(description) = update.description {
        active.description = Set(description);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.updated_by = Set(Some(stamp.uid));
    active.updated_by_name = Set(Some(stamp.name));

    let updated = active.update(db).await?;
    feed.publish(LedgerCollection::Allocations, project_id);
    info!(allocation_id, project_id, "allocation updated");
    Ok(updated)
}

/// Deletes an allocation unconditionally. Intent confirmation is the
/// caller's responsibility.
pub async fn delete_allocation(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    allocation_id: i64,
) -> Result<()> {
    let existing = Allocation::find_by_id(allocation_id)
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            kind: "allocation",
            id: allocation_id,
        })?;
    let project_id = existing.project_id;

    Allocation::delete_by_id(allocation_id).exec(db).await?;
    feed.publish(LedgerCollection::Allocations, project_id);
    info!(allocation_id, project_id, "allocation deleted");
    Ok(())
}

/// Retrieves all allocations for a project, newest first.
pub async fn get_allocations_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<allocation::Model>> {
    Allocation::find()
        .filter(allocation::Column::ProjectId.eq(project_id))
        .order_by_desc(allocation::Column::AllocatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
