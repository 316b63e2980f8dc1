//! External funding operations.
//!
//! Fundings record money received for a project from an outside source. The
//! amount, source, and funding type are all required at the boundary; the
//! description defaults to "{type} funding from {source}" when left blank.

use crate::{
    core::validate,
    entities::{funding, Funding},
    errors::{Error, Result},
    identity::Identity,
    live::{ChangeFeed, LedgerCollection},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Records an external funding after validating amount, source, and type.
/// Stamps authorship from the acting identity and the local clock.
#[allow(clippy::too_many_arguments)]
pub async fn add_funding(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    project_id: i64,
    raw_amount: &str,
    source: &str,
    funding_type: &str,
    description: &str,
    identity: &Identity,
) -> Result<funding::Model> {
    let amount = validate::parse_amount(raw_amount)?;
    let source = validate::require("source", source)?;
    let funding_type = validate::require("type", funding_type)?;
    let stamp = identity.authorship();

    let description = if description.trim().is_empty() {
        format!("{funding_type} funding from {source}")
    } else {
        description.trim().to_string()
    };

    let model = funding::ActiveModel {
        project_id: Set(project_id),
        amount: Set(amount),
        source: Set(source),
        funding_type: Set(funding_type),
        description: Set(description),
        created_at: Set(chrono::Utc::now()),
        created_by: Set(stamp.uid),
        created_by_name: Set(stamp.name),
        created_by_email: Set(stamp.email),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    feed.publish(LedgerCollection::Fundings, project_id);
    info!(funding_id = created.id, project_id, amount, "funding added");
    Ok(created)
}

/// Deletes a funding record unconditionally. Intent confirmation is the
/// caller's responsibility.
pub async fn delete_funding(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    funding_id: i64,
) -> Result<()> {
    let existing = Funding::find_by_id(funding_id)
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            kind: "funding",
            id: funding_id,
        })?;
    let project_id = existing.project_id;

    Funding::delete_by_id(funding_id).exec(db).await?;
    feed.publish(LedgerCollection::Fundings, project_id);
    info!(funding_id, project_id, "funding deleted");
    Ok(())
}

/// Retrieves all fundings for a project, newest first.
pub async fn get_fundings_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<funding::Model>> {
    Funding::find()
        .filter(funding::Column::ProjectId.eq(project_id))
        .order_by_desc(funding::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
