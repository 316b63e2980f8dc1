//! Database configuration module.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the stored schema always matches the Rust structs without manual SQL.

use crate::entities::{
    Allocation, Booking, Funding, Project, StaffMember, TeamMember, Transaction,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the `DATABASE_URL` environment variable, falling
/// back to a default local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/backoffice.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions. Safe to call on every
/// boot: existing tables are left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let project_table = schema
        .create_table_from_entity(Project)
        .if_not_exists()
        .to_owned();
    let allocation_table = schema
        .create_table_from_entity(Allocation)
        .if_not_exists()
        .to_owned();
    let funding_table = schema
        .create_table_from_entity(Funding)
        .if_not_exists()
        .to_owned();
    let transaction_table = schema
        .create_table_from_entity(Transaction)
        .if_not_exists()
        .to_owned();
    let staff_table = schema
        .create_table_from_entity(StaffMember)
        .if_not_exists()
        .to_owned();
    let team_table = schema
        .create_table_from_entity(TeamMember)
        .if_not_exists()
        .to_owned();
    let booking_table = schema
        .create_table_from_entity(Booking)
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&project_table)).await?;
    db.execute(builder.build(&allocation_table)).await?;
    db.execute(builder.build(&funding_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;
    db.execute(builder.build(&staff_table)).await?;
    db.execute(builder.build(&team_table)).await?;
    db.execute(builder.build(&booking_table)).await?;

    Ok(())
}
