//! Internal staff roster.
//!
//! Staff are payees for salary transactions. The roster carries a default
//! monthly salary per person, used to prefill the bulk salary form.

use crate::{
    core::{transaction::SalarySelection, validate},
    entities::{staff_member, StaffMember},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Adds a staff member to the roster.
pub async fn create_staff_member(
    db: &DatabaseConnection,
    name: &str,
    position: Option<String>,
    salary: Option<f64>,
) -> Result<staff_member::Model> {
    let name = validate::require("name", name)?;

    let model = staff_member::ActiveModel {
        name: Set(name),
        position: Set(position),
        salary: Set(salary),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(staff_id = created.id, name = %created.name, "staff member added");
    Ok(created)
}

pub async fn get_staff_member(
    db: &DatabaseConnection,
    staff_id: i64,
) -> Result<Option<staff_member::Model>> {
    StaffMember::find_by_id(staff_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the full roster, ordered by name.
pub async fn get_all_staff(db: &DatabaseConnection) -> Result<Vec<staff_member::Model>> {
    StaffMember::find()
        .order_by_asc(staff_member::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Builds the bulk salary form prefill: one unselected row per staff member,
/// amount prefilled from the roster salary (blank when none is recorded).
#[must_use]
pub fn default_salary_selections(staff: &[staff_member::Model]) -> Vec<SalarySelection> {
    staff
        .iter()
        .map(|member| SalarySelection {
            staff_id: member.id,
            amount: member
                .salary
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
            description: format!("Monthly salary for {}", member.name),
            selected: false,
        })
        .collect()
}
