//! Project business logic.
//!
//! Projects are created, edited, and deleted only through the admin surface.
//! Deleting a project does not cascade to its ledger records - orphans are
//! tolerated as display artifacts. The public vote counter is incremented
//! with a single atomic store-side update, never read-modify-write.

use crate::{
    core::validate,
    entities::{project, Project},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Editable project fields, as entered in the admin form.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    /// Project name, required
    pub name: String,
    /// Longer description
    pub description: String,
    /// Cover image URL
    pub image: Option<String>,
    /// Service category
    pub category: String,
    /// Comma-separated technology list
    pub technologies: Option<String>,
    /// Live deployment URL
    pub live_url: Option<String>,
    /// Source repository URL
    pub github_url: Option<String>,
    /// Display start date
    pub start_date: Option<String>,
    /// Display end date
    pub end_date: Option<String>,
}

/// Creates a project with a zeroed vote counter.
pub async fn create_project(
    db: &DatabaseConnection,
    draft: ProjectDraft,
) -> Result<project::Model> {
    let name = validate::require("name", &draft.name)?;

    let model = project::ActiveModel {
        name: Set(name),
        description: Set(draft.description.trim().to_string()),
        image: Set(draft.image),
        category: Set(draft.category),
        technologies: Set(draft.technologies),
        live_url: Set(draft.live_url),
        github_url: Set(draft.github_url),
        start_date: Set(draft.start_date),
        end_date: Set(draft.end_date),
        votes: Set(0),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(project_id = created.id, name = %created.name, "project created");
    Ok(created)
}

/// Replaces a project's editable fields and stamps `updated_at`. The vote
/// counter is untouched by edits.
pub async fn update_project(
    db: &DatabaseConnection,
    project_id: i64,
    draft: ProjectDraft,
) -> Result<project::Model> {
    let name = validate::require("name", &draft.name)?;

    let existing = Project::find_by_id(project_id)
        .one(db)
        .await?
        .ok_or(Error::ProjectNotFound { id: project_id })?;

    let mut active: project::ActiveModel = existing.into();
    active.name = Set(name);
    active.description = Set(draft.description.trim().to_string());
    active.image = Set(draft.image);
    active.category = Set(draft.category);
    active.technologies = Set(draft.technologies);
    active.live_url = Set(draft.live_url);
    active.github_url = Set(draft.github_url);
    active.start_date = Set(draft.start_date);
    active.end_date = Set(draft.end_date);
    active.updated_at = Set(Some(chrono::Utc::now()));

    let updated = active.update(db).await?;
    info!(project_id, "project updated");
    Ok(updated)
}

/// Deletes a project. Its allocations, fundings, and transactions are NOT
/// deleted - no cascading exists and orphaned ledger records remain behind.
pub async fn delete_project(db: &DatabaseConnection, project_id: i64) -> Result<()> {
    Project::find_by_id(project_id)
        .one(db)
        .await?
        .ok_or(Error::ProjectNotFound { id: project_id })?;

    Project::delete_by_id(project_id).exec(db).await?;
    info!(project_id, "project deleted");
    Ok(())
}

/// Finds a project by id. `Ok(None)` means the id resolved to nothing
/// (deleted concurrently, perhaps) and callers render a "not found" view.
pub async fn get_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Option<project::Model>> {
    Project::find_by_id(project_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all projects, newest first.
pub async fn get_all_projects(db: &DatabaseConnection) -> Result<Vec<project::Model>> {
    Project::find()
        .order_by_desc(project::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Increments a project's vote counter by exactly one.
///
/// The increment is a single store-side UPDATE (`votes = votes + 1`) rather
/// than a read-modify-write, so concurrent voters cannot lose updates.
/// Returns the updated project.
pub async fn add_vote(db: &DatabaseConnection, project_id: i64) -> Result<project::Model> {
    use sea_orm::sea_query::Expr;

    // First verify the project exists
    Project::find_by_id(project_id)
        .one(db)
        .await?
        .ok_or(Error::ProjectNotFound { id: project_id })?;

    Project::update_many()
        .col_expr(
            project::Column::Votes,
            Expr::col(project::Column::Votes).add(1),
        )
        .filter(project::Column::Id.eq(project_id))
        .exec(db)
        .await?;

    Project::find_by_id(project_id)
        .one(db)
        .await?
        .ok_or(Error::ProjectNotFound { id: project_id })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{allocation, funding, transaction};
    use crate::identity::Identity;
    use crate::test_utils::{create_test_project, setup_test_db, test_feed};

    #[tokio::test]
    async fn create_project_requires_a_name() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_project(
            &db,
            ProjectDraft {
                name: "   ".to_string(),
                ..ProjectDraft::default()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingField { field: "name" }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn create_and_fetch_project() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_project(
            &db,
            ProjectDraft {
                name: "Health Data Platform".to_string(),
                description: "ETL pipelines for county health data".to_string(),
                category: "data-engineering".to_string(),
                technologies: Some("Rust, Postgres".to_string()),
                ..ProjectDraft::default()
            },
        )
        .await?;
        assert_eq!(created.votes, 0);
        assert_eq!(
            created.technology_list(),
            vec!["Rust".to_string(), "Postgres".to_string()]
        );

        let fetched = get_project(&db, created.id).await?.unwrap();
        assert_eq!(fetched, created);

        let missing = get_project(&db, 999).await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn update_project_keeps_votes_and_stamps_updated_at() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_project(&db, "Before").await?;
        add_vote(&db, created.id).await?;

        let updated = update_project(
            &db,
            created.id,
            ProjectDraft {
                name: "After".to_string(),
                description: "revised".to_string(),
                category: "software-dev".to_string(),
                ..ProjectDraft::default()
            },
        )
        .await?;

        assert_eq!(updated.name, "After");
        assert_eq!(updated.votes, 1);
        assert!(updated.updated_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn vote_increments_by_exactly_one() -> Result<()> {
        let db = setup_test_db().await?;
        let project = create_test_project(&db, "P").await?;

        let after_first = add_vote(&db, project.id).await?;
        assert_eq!(after_first.votes, 1);
        let after_second = add_vote(&db, project.id).await?;
        assert_eq!(after_second.votes, 2);

        let missing = add_vote(&db, 999).await;
        assert!(matches!(
            missing.unwrap_err(),
            Error::ProjectNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_project_orphans_but_keeps_its_ledger_records() -> Result<()> {
        let db = setup_test_db().await?;
        let project = create_test_project(&db, "Doomed").await?;
        let feed = test_feed();
        let identity = Identity::anonymous();

        allocation::add_allocation(&db, &feed, project.id, "1000", "A", &identity).await?;
        funding::add_funding(&db, &feed, project.id, "500", "WHO", "Grant", "", &identity)
            .await?;
        transaction::add_procurement_transaction(
            &db, &feed, project.id, "300", "ICT", "Laptops", &identity,
        )
        .await?;

        delete_project(&db, project.id).await?;
        assert!(get_project(&db, project.id).await?.is_none());

        // No cascade: the children survive as orphans.
        let allocations =
            allocation::get_allocations_for_project(&db, project.id).await?;
        let fundings = funding::get_fundings_for_project(&db, project.id).await?;
        let transactions =
            transaction::get_transactions_for_project(&db, project.id).await?;
        assert_eq!(allocations.len(), 1);
        assert_eq!(fundings.len(), 1);
        assert_eq!(transactions.len(), 1);

        Ok(())
    }
}
