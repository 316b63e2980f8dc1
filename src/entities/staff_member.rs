//! Staff member entity - Personnel referenced by salary transactions.
//! The salary field is only a default amount suggestion for the bulk salary
//! table; past transactions keep the name they were stamped with.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff member database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    /// Unique identifier for the staff member
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name, denormalized onto salary transactions at write time
    pub name: String,
    /// Role or position, display only
    pub position: Option<String>,
    /// Default monthly salary suggestion
    pub salary: Option<f64>,
}

/// Staff has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
