//! Service booking requests from the public site.
//!
//! A booking is a contact-form style request: name, email, and the requested
//! service are required, everything else is optional context. New bookings
//! always land with status "new" for the back office to triage.

use crate::{
    core::validate,
    entities::{booking, Booking},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Fields submitted by the public booking form.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub project_type: Option<String>,
    pub details: Option<String>,
}

/// Records a booking request. Name, email, and service are required; the
/// status always starts as "new".
pub async fn submit_booking(
    db: &DatabaseConnection,
    request: BookingRequest,
) -> Result<booking::Model> {
    let name = validate::require("name", &request.name)?;
    let email = validate::require("email", &request.email)?;
    let service = validate::require("service", &request.service)?;

    let model = booking::ActiveModel {
        name: Set(name),
        email: Set(email),
        phone: Set(request.phone),
        company: Set(request.company),
        service: Set(service),
        project_type: Set(request.project_type),
        details: Set(request.details),
        status: Set("new".to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(booking_id = created.id, service = %created.service, "booking submitted");
    Ok(created)
}

/// Retrieves all bookings for the back office, newest first.
pub async fn list_bookings(db: &DatabaseConnection) -> Result<Vec<booking::Model>> {
    Booking::find()
        .order_by_desc(booking::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
