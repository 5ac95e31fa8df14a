//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Table creation uses `Schema::create_table_from_entity` so the database schema is
//! generated from the entity definitions without manual SQL.

use crate::entities::{Account, Entry, TaxRate};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/bookkeeper.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or
/// returns the default local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
///
/// Falls back to a default local `SQLite` file if no environment variable is
/// set. The connection is created once at startup and passed by reference to
/// every store and report operation.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates the entries, accounts, and tax-rates tables from the entity
/// definitions. Safe to call on every startup: existing tables are kept.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut entry_table = schema.create_table_from_entity(Entry);
    let mut account_table = schema.create_table_from_entity(Account);
    let mut tax_rate_table = schema.create_table_from_entity(TaxRate);

    db.execute(builder.build(entry_table.if_not_exists())).await?;
    db.execute(builder.build(account_table.if_not_exists())).await?;
    db.execute(builder.build(tax_rate_table.if_not_exists())).await?;

    Ok(())
}
