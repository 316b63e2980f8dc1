//! Team member entity - Public team profiles managed from the admin surface.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Team member database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    /// Unique identifier for the team member
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name
    pub name: String,
    /// Role shown on the site (`"Data Engineer"`, ...)
    pub role: String,
    /// Contact email, if published
    pub email: Option<String>,
    /// Contact phone, if published
    pub phone: Option<String>,
    /// Short biography
    pub bio: Option<String>,
    /// Profile image URL
    pub image: Option<String>,
    /// Comma-separated skill list, display only
    pub skills: Option<String>,
    /// When the profile was created
    pub created_at: DateTimeUtc,
    /// When the profile was last edited, if ever
    pub updated_at: Option<DateTimeUtc>,
}

/// Team members have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Splits the comma-separated skills field for display.
    #[must_use]
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
