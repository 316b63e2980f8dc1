//! Public team member profiles.
//!
//! These are the profiles rendered on the marketing site, distinct from the
//! internal staff roster used for salaries.

use crate::{
    core::validate,
    entities::{team_member, TeamMember},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Editable team profile fields, as entered in the admin form.
#[derive(Debug, Clone, Default)]
pub struct TeamMemberDraft {
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    /// Comma-separated skill list
    pub skills: Option<String>,
}

pub async fn create_team_member(
    db: &DatabaseConnection,
    draft: TeamMemberDraft,
) -> Result<team_member::Model> {
    let name = validate::require("name", &draft.name)?;
    let role = validate::require("role", &draft.role)?;

    let model = team_member::ActiveModel {
        name: Set(name),
        role: Set(role),
        email: Set(draft.email),
        phone: Set(draft.phone),
        bio: Set(draft.bio),
        image: Set(draft.image),
        skills: Set(draft.skills),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(member_id = created.id, name = %created.name, "team member added");
    Ok(created)
}

/// Replaces a team profile's fields and stamps `updated_at`.
pub async fn update_team_member(
    db: &DatabaseConnection,
    member_id: i64,
    draft: TeamMemberDraft,
) -> Result<team_member::Model> {
    let name = validate::require("name", &draft.name)?;
    let role = validate::require("role", &draft.role)?;

    let existing = TeamMember::find_by_id(member_id)
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            kind: "team member",
            id: member_id,
        })?;

    let mut active: team_member::ActiveModel = existing.into();
    active.name = Set(name);
    active.role = Set(role);
    active.email = Set(draft.email);
    active.phone = Set(draft.phone);
    active.bio = Set(draft.bio);
    active.image = Set(draft.image);
    active.skills = Set(draft.skills);
    active.updated_at = Set(Some(chrono::Utc::now()));

    let updated = active.update(db).await?;
    info!(member_id, "team member updated");
    Ok(updated)
}

pub async fn delete_team_member(db: &DatabaseConnection, member_id: i64) -> Result<()> {
    TeamMember::find_by_id(member_id)
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            kind: "team member",
            id: member_id,
        })?;

    TeamMember::delete_by_id(member_id).exec(db).await?;
    info!(member_id, "team member deleted");
    Ok(())
}

/// Retrieves all team profiles, newest first.
pub async fn get_all_team_members(
    db: &DatabaseConnection,
) -> Result<Vec<team_member::Model>> {
    TeamMember::find()
        .order_by_desc(team_member::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
