//! Shared test utilities for `Bookkeeper`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::chart::ChartConfig,
    entities::{account, entry, tax_rate},
    errors::Result,
    store::{self, NewEntry},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an in-memory database seeded with the default chart
/// (9 accounts, 4 tax rates).
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    store::initialize_if_empty(&db, &ChartConfig::default()).await?;
    Ok(db)
}

/// Builds a calendar date; panics on impossible dates, which is fine in tests.
#[allow(clippy::unwrap_used)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a [`NewEntry`] with valid default references into the seeded chart.
///
/// # Defaults
/// * `category_number`: 440 (Sales) for income, 631 (Supplies) for expense
/// * `money_number`: 211 (Assets)
/// * `tax_rate_id`: None
pub fn test_entry(description: &str, date: NaiveDate, is_income: bool, total: i64) -> NewEntry {
    NewEntry {
        description: description.to_string(),
        date,
        is_income,
        category_number: Some(if is_income { 440 } else { 631 }),
        money_number: Some(211),
        total,
        tax_rate_id: None,
    }
}

/// Builds an entry model directly, bypassing store validation.
/// Used by the pure report tests, including ones exercising dangling references.
pub fn entry_model(
    id: i64,
    description: &str,
    is_income: bool,
    category_number: Option<i32>,
    money_number: Option<i32>,
    total: i64,
    tax_rate_id: Option<i64>,
) -> entry::Model {
    entry::Model {
        id,
        description: description.to_string(),
        date: date(2026, 1, 15),
        is_income,
        category_number,
        money_number,
        total,
        tax_rate_id,
    }
}

/// Builds an account model directly for pure report tests.
pub fn account_model(id: i64, name: &str, number: i32, kind: &str) -> account::Model {
    account::Model {
        id,
        name: name.to_string(),
        number,
        kind: kind.to_string(),
    }
}

/// Builds a tax-rate model directly for pure report tests.
pub fn rate_model(id: i64, rate: f64) -> tax_rate::Model {
    tax_rate::Model { id, rate }
}
