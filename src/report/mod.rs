//! Report engine.
//!
//! Turns a flat snapshot of entries plus account/tax-rate reference data into
//! the two textual reports. Each report comes in three layers the way the rest
//! of the crate separates concerns: a pure `compute_*` function over in-memory
//! slices, a `format_*` function producing the final text, and a db-driven
//! `generate_*` wrapper that fetches the snapshot through the store.
//!
//! Reports never abort on a single bad reference. A dangling or unselected
//! reference degrades that line only (flagged in the tax report, excluded from
//! the account report) and is logged.

pub mod account;
pub mod tax;

pub use account::{AccountReport, compute_account_report, format_account_report, generate_account_report};
pub use tax::{TaxReport, compute_tax_report, format_tax_report, generate_tax_report};
