/// Seed chart-of-accounts and tax-rate configuration from bookkeeper.toml
pub mod chart;

/// Database configuration and connection management
pub mod database;
