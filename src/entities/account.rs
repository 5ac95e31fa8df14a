//! Account entity - Represents one category in the chart of accounts.
//!
//! Accounts are seeded once on first initialization and never mutated. Entries
//! reference accounts by `number` (the bookkeeping category code), not by the
//! surrogate `id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Fixed account categories. Never extended at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Revenue category (e.g. Sales); entry totals count positive
    Income,
    /// Cost category (e.g. Supplies); entry totals count negative
    Expense,
    /// Account holding or releasing funds (e.g. Assets); sign follows the entry
    Money,
}

impl AccountKind {
    /// Stable string form used as the database column value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Money => "money",
        }
    }
}

impl TryFrom<&str> for AccountKind {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "money" => Ok(Self::Money),
            other => Err(Error::Config {
                message: format!("invalid account kind: {other}"),
            }),
        }
    }
}

/// Account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Surrogate identifier; storage detail only, entries never reference it
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the account (e.g. "Sales", "Supplies")
    pub name: String,
    /// Bookkeeping category code, unique within its kind; the join key used
    /// by entries
    pub number: i32,
    /// Account category: `"income"`, `"expense"`, or `"money"`
    pub kind: String,
}

impl Model {
    /// Parses the stored kind column into the typed [`AccountKind`].
    pub fn kind(&self) -> crate::errors::Result<AccountKind> {
        AccountKind::try_from(self.kind.as_str())
    }
}

/// Account has no modeled relationships; entries reference it softly by number
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
