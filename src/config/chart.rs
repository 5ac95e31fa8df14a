//! Seed chart configuration loading from bookkeeper.toml
//!
//! The accounts and tax rates defined here are used to seed the database on
//! first run. A `bookkeeper.toml` next to the binary may override the built-in
//! chart; in its absence the classic 9-account / 4-rate chart is used.

use crate::entities::AccountKind;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Seed configuration: the chart of accounts plus the tax-rate table
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Accounts to create on first initialization
    pub accounts: Vec<AccountSeed>,
    /// Tax rates to create on first initialization
    pub tax_rates: Vec<TaxRateSeed>,
}

/// Seed definition for a single account
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSeed {
    /// Display name of the account
    pub name: String,
    /// Category code, unique within its kind
    pub number: i32,
    /// Account category (`income`, `expense`, or `money`)
    pub kind: AccountKind,
}

/// Seed definition for a single tax rate
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TaxRateSeed {
    /// Fractional rate in `[0, 1)`
    pub rate: f64,
}

impl Default for ChartConfig {
    /// The classic chart: three accounts per category and four tax rates.
    fn default() -> Self {
        let account = |name: &str, number: i32, kind: AccountKind| AccountSeed {
            name: name.to_string(),
            number,
            kind,
        };
        Self {
            accounts: vec![
                account("Computer", 585, AccountKind::Expense),
                account("Supplies", 631, AccountKind::Expense),
                account("Labour & Welfare", 597, AccountKind::Expense),
                account("Rental", 400, AccountKind::Income),
                account("Interest", 420, AccountKind::Income),
                account("Sales", 440, AccountKind::Income),
                account("Assets", 211, AccountKind::Money),
                account("Founds", 224, AccountKind::Money),
                account("Project", 245, AccountKind::Money),
            ],
            tax_rates: vec![
                TaxRateSeed { rate: 0.06 },
                TaxRateSeed { rate: 0.12 },
                TaxRateSeed { rate: 0.20 },
                TaxRateSeed { rate: 0.25 },
            ],
        }
    }
}

impl ChartConfig {
    /// Checks the chart for out-of-range rates and duplicate account numbers.
    ///
    /// Rates must lie in `[0, 1)`. Account numbers must be positive and unique
    /// within their kind, since entries join on `(kind, number)`.
    pub fn validate(&self) -> Result<()> {
        for seed in &self.tax_rates {
            if !(0.0..1.0).contains(&seed.rate) || !seed.rate.is_finite() {
                return Err(Error::InvalidRate { rate: seed.rate });
            }
        }
        for (i, seed) in self.accounts.iter().enumerate() {
            if seed.number <= 0 {
                return Err(Error::Config {
                    message: format!("account '{}' has non-positive number {}", seed.name, seed.number),
                });
            }
            let duplicate = self.accounts[..i]
                .iter()
                .any(|other| other.number == seed.number && other.kind == seed.kind);
            if duplicate {
                return Err(Error::Config {
                    message: format!(
                        "duplicate {} account number {}",
                        seed.kind.as_str(),
                        seed.number
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Loads the seed chart from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_chart<P: AsRef<Path>>(path: P) -> Result<ChartConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read chart config: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse chart config: {e}"),
    })
}

/// Loads `./bookkeeper.toml` when present, falling back to the built-in chart.
///
/// A present-but-broken file is an error rather than a silent fallback.
pub fn load_chart_or_default() -> Result<ChartConfig> {
    let path = Path::new("bookkeeper.toml");
    if path.exists() {
        load_chart(path)
    } else {
        Ok(ChartConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn default_chart_has_nine_accounts_and_four_rates() {
        let chart = ChartConfig::default();
        assert_eq!(chart.accounts.len(), 9);
        assert_eq!(chart.tax_rates.len(), 4);
        for kind in [AccountKind::Income, AccountKind::Expense, AccountKind::Money] {
            let per_kind = chart.accounts.iter().filter(|a| a.kind == kind).count();
            assert_eq!(per_kind, 3, "expected 3 {} accounts", kind.as_str());
        }
        chart.validate().unwrap();
    }

    #[test]
    fn test_parse_chart_config() {
        let toml_str = r#"
            [[accounts]]
            name = "Sales"
            number = 440
            kind = "income"

            [[accounts]]
            name = "Assets"
            number = 211
            kind = "money"

            [[tax_rates]]
            rate = 0.25
        "#;

        let chart: ChartConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(chart.accounts.len(), 2);
        assert_eq!(chart.accounts[0].name, "Sales");
        assert_eq!(chart.accounts[0].number, 440);
        assert_eq!(chart.accounts[0].kind, AccountKind::Income);
        assert_eq!(chart.accounts[1].kind, AccountKind::Money);
        assert_eq!(chart.tax_rates.len(), 1);
        assert_eq!(chart.tax_rates[0].rate, 0.25);
    }

    #[test]
    fn validate_rejects_rate_of_one_or_more() {
        let mut chart = ChartConfig::default();
        chart.tax_rates.push(TaxRateSeed { rate: 1.0 });
        assert!(matches!(
            chart.validate(),
            Err(Error::InvalidRate { rate }) if rate == 1.0
        ));
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let mut chart = ChartConfig::default();
        chart.tax_rates.push(TaxRateSeed { rate: -0.06 });
        assert!(matches!(chart.validate(), Err(Error::InvalidRate { .. })));
    }

    #[test]
    fn validate_rejects_duplicate_number_within_kind() {
        let mut chart = ChartConfig::default();
        chart.accounts.push(AccountSeed {
            name: "Sales again".to_string(),
            number: 440,
            kind: AccountKind::Income,
        });
        assert!(matches!(chart.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn same_number_in_different_kinds_is_allowed() {
        let mut chart = ChartConfig::default();
        // 440 is already an income number; reusing it for a money account is fine
        chart.accounts.push(AccountSeed {
            name: "Petty cash".to_string(),
            number: 440,
            kind: AccountKind::Money,
        });
        chart.validate().unwrap();
    }
}
