//! Tax report computation and formatting.
//!
//! For every entry the tax share of its gross total is back-calculated via
//! gross-up (`net = total / (1 + rate)`, `tax = total - net`). Income entries
//! add their tax to the running total, expense entries subtract it.
//!
//! An entry whose tax rate is unselected or does not resolve is flagged rather
//! than silently taxed at rate zero: its line renders `no tax rate` and it
//! contributes nothing to the total.

use crate::{
    entities::{entry, tax_rate},
    errors::Result,
    store,
};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use tracing::warn;

/// One tax report line, in entry-processing order.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxReportLine {
    /// Id of the reported entry
    pub entry_id: i64,
    /// Entry description, reproduced verbatim
    pub description: String,
    /// Whether the entry is income (tax adds) or expense (tax subtracts)
    pub is_income: bool,
    /// Unsigned tax share of the gross total; `None` when the entry's tax
    /// rate was unselected or did not resolve
    pub tax: Option<f64>,
}

/// Structured tax report: per-entry lines plus the running total.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxReport {
    /// Per-entry lines in the order the entries were supplied
    pub lines: Vec<TaxReportLine>,
    /// Signed sum of all resolved line taxes, at full precision
    pub total: f64,
}

/// Computes the tax report over an entry snapshot.
///
/// Entries are consumed in the order given; the store already sorts them by
/// date, and this function does not re-sort. The running total accumulates at
/// full precision and is only rounded when formatted.
#[must_use]
pub fn compute_tax_report(
    entries: &[entry::Model],
    tax_rates: &[tax_rate::Model],
) -> TaxReport {
    let rates: HashMap<i64, f64> = tax_rates.iter().map(|r| (r.id, r.rate)).collect();

    let mut total = 0.0;
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let tax = entry
            .tax_rate_id
            .and_then(|id| rates.get(&id).copied())
            .map(|rate| {
                // Cast safety: totals are bounded monetary amounts, far below
                // the 2^53 range where i64 -> f64 loses precision.
                #[allow(clippy::cast_precision_loss)]
                let gross = entry.total as f64;
                gross - gross / (1.0 + rate)
            });

        match tax {
            Some(tax) if entry.is_income => total += tax,
            Some(tax) => total -= tax,
            None => warn!(
                entry_id = entry.id,
                tax_rate_id = ?entry.tax_rate_id,
                "entry has no resolvable tax rate; excluded from tax total"
            ),
        }

        lines.push(TaxReportLine {
            entry_id: entry.id,
            description: entry.description.clone(),
            is_income: entry.is_income,
            tax,
        });
    }

    TaxReport { lines, total }
}

/// Renders the tax report as plain text.
///
/// One line per entry (`Entry {id} {description}: {tax}` with income shown
/// unsigned and expense with a leading minus, both rounded to two decimals),
/// followed by a `Total tax:` summary line. Identical input yields
/// byte-identical output.
#[must_use]
pub fn format_tax_report(report: &TaxReport) -> String {
    let mut out = String::new();
    for line in &report.lines {
        match line.tax {
            Some(tax) if line.is_income => {
                out.push_str(&format!(
                    "Entry {} {}: {:.2}\n",
                    line.entry_id, line.description, tax
                ));
            }
            Some(tax) => {
                out.push_str(&format!(
                    "Entry {} {}: -{:.2}\n",
                    line.entry_id, line.description, tax
                ));
            }
            None => {
                out.push_str(&format!(
                    "Entry {} {}: no tax rate\n",
                    line.entry_id, line.description
                ));
            }
        }
    }
    out.push_str(&format!("Total tax: {:.2}", report.total));
    out
}

/// Fetches the current snapshot through the store and returns the formatted
/// tax report.
pub async fn generate_tax_report(db: &DatabaseConnection) -> Result<String> {
    let entries = store::list_entries(db).await?;
    let tax_rates = store::list_tax_rates(db).await?;
    Ok(format_tax_report(&compute_tax_report(&entries, &tax_rates)))
}
