//! Back-office service entry point.
//!
//! Boot order: tracing first, then `.env`, configuration, database, table
//! creation, and finally a ledger summary for every known project.

use dotenvy::dotenv;
use gocode_backoffice::{
    config::{company, database},
    core::{ledger::compute_stats, project},
    errors::Result,
    live,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the company profile used by the chat assistant
    let profile = company::load_default_profile()?;
    info!(company = %profile.name, "Loaded company profile.");

    // 4. Initialize database
    let db = database::create_connection().await?;
    database::create_tables(&db).await?;
    info!(url = %database::get_database_url(), "Database initialized.");

    // 5. Log a ledger summary per project
    let projects = project::get_all_projects(&db).await?;
    info!(count = projects.len(), "Loaded projects.");
    for p in &projects {
        let (allocations, fundings, transactions) = live::load_history(&db, p.id).await?;
        let stats = compute_stats(&allocations, &fundings, &transactions);
        info!(
            project = %p.name,
            budget = stats.budget,
            spent = stats.spent,
            remaining = stats.remaining,
            votes = p.votes,
            "ledger summary"
        );
    }

    Ok(())
}
