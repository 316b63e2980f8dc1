//! Booking entity - A service booking request submitted from the public site.
//! Bookings arrive with status `"new"` and are triaged from the admin surface.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service booking database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    /// Unique identifier for the booking
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Requester name
    pub name: String,
    /// Requester email
    pub email: String,
    /// Requester phone, if given
    pub phone: Option<String>,
    /// Requester company, if given
    pub company: Option<String>,
    /// Requested service (`"Data Engineering"`, ...)
    pub service: String,
    /// Project type free text, if given
    pub project_type: Option<String>,
    /// Additional details from the form
    pub details: Option<String>,
    /// Triage status, `"new"` on submission
    pub status: String,
    /// When the booking was submitted
    pub created_at: DateTimeUtc,
}

/// Bookings have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
