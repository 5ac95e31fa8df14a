//! Ledger store - persistence operations for entries, accounts, and tax rates.
//!
//! All functions are async over a shared [`sea_orm::DatabaseConnection`] and
//! return [`crate::errors::Result`]. The store owns no business logic beyond
//! write-boundary validation; the report engine consumes the snapshots it
//! returns.

pub mod accounts;
pub mod entries;
pub mod seed;
pub mod tax_rates;

pub use accounts::{get_account, list_accounts, list_accounts_of_kind};
pub use entries::{NewEntry, get_entry, insert_entry, list_entries, update_entry};
pub use seed::initialize_if_empty;
pub use tax_rates::{get_tax_rate, list_tax_rates};
