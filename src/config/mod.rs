/// Company profile loading from company.toml
pub mod company;

/// Database configuration and connection management
pub mod database;
