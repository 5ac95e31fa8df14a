//! Per-account ledger report computation and formatting.
//!
//! The report is account-driven: every account gets a section, in the order
//! the store lists them, containing the entries that reference it and a signed
//! running total. Entries pointing at numbers no account carries simply appear
//! in no section.

use crate::{
    entities::{AccountKind, account, entry},
    errors::Result,
    store,
};
use sea_orm::DatabaseConnection;
use tracing::warn;

/// One matched entry within an account section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReportLine {
    /// Id of the matched entry
    pub entry_id: i64,
    /// Entry description, reproduced verbatim
    pub description: String,
    /// Signed contribution of this entry to the account total, in minor units
    pub amount: i64,
}

/// One account's section of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSection {
    /// Account display name
    pub name: String,
    /// Account category code
    pub number: i32,
    /// Matched entries in entry-snapshot order
    pub lines: Vec<AccountReportLine>,
    /// Sum of the line amounts; 0 for an account with no matching entries
    pub total: i64,
}

/// Structured account report: one section per account, in account order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    /// Sections in the order the accounts were supplied
    pub sections: Vec<AccountSection>,
}

/// Computes the account report over account and entry snapshots.
///
/// An entry belongs to an account's section when its category or money
/// reference equals the account number; an entry matching on both fields is
/// still counted once. The signed contribution depends on the account kind:
/// income counts positive, expense negative, and money follows the entry's
/// income/expense flag.
#[must_use]
pub fn compute_account_report(
    accounts: &[account::Model],
    entries: &[entry::Model],
) -> AccountReport {
    let mut sections = Vec::with_capacity(accounts.len());
    for account in accounts {
        let Ok(kind) = account.kind() else {
            // Unreachable for seeded data; degrade instead of aborting the report
            warn!(
                number = account.number,
                kind = %account.kind,
                "account has unparseable kind; section skipped"
            );
            continue;
        };

        let mut lines = Vec::new();
        let mut total = 0i64;
        for entry in entries {
            let matched = entry.category_number == Some(account.number)
                || entry.money_number == Some(account.number);
            if !matched {
                continue;
            }

            let amount = match kind {
                AccountKind::Income => entry.total,
                AccountKind::Expense => -entry.total,
                AccountKind::Money => {
                    if entry.is_income {
                        entry.total
                    } else {
                        -entry.total
                    }
                }
            };
            total += amount;
            lines.push(AccountReportLine {
                entry_id: entry.id,
                description: entry.description.clone(),
                amount,
            });
        }

        sections.push(AccountSection {
            name: account.name.clone(),
            number: account.number,
            lines,
            total,
        });
    }

    AccountReport { sections }
}

/// Renders the account report as plain text.
///
/// Each section: a `*** {name} ({number}) ***` header, one `Entry` line per
/// matched entry with its signed integer amount, a `*** Total: {n} ***` line,
/// then a blank line before the next section.
#[must_use]
pub fn format_account_report(report: &AccountReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        out.push_str(&format!("*** {} ({}) ***\n", section.name, section.number));
        for line in &section.lines {
            out.push_str(&format!(
                "Entry {} {}: {}\n",
                line.entry_id, line.description, line.amount
            ));
        }
        out.push_str(&format!("*** Total: {} ***\n\n", section.total));
    }
    out
}

/// Fetches the current snapshot through the store and returns the formatted
/// account report.
pub async fn generate_account_report(db: &DatabaseConnection) -> Result<String> {
    let accounts = store::list_accounts(db).await?;
    let entries = store::list_entries(db).await?;
    Ok(format_account_report(&compute_account_report(
        &accounts, &entries,
    )))
}
