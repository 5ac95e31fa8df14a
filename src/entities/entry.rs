//! Entry entity - Represents a single financial transaction.
//!
//! Each entry records a gross, tax-inclusive `total` in minor currency units
//! against one income-or-expense category and one money account. References to
//! accounts (`category_number`, `money_number`) and tax rates (`tax_rate_id`)
//! are soft: they are matched by value and may dangle, which the report engine
//! tolerates per line.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    /// Unique identifier, assigned by the store on creation; immutable afterward
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Free-text label for the transaction
    pub description: String,
    /// Calendar date of the transaction
    pub date: Date,
    /// Whether this is income (true) or an expense (false); selects which
    /// account category `category_number` refers to
    pub is_income: bool,
    /// Account number of the income or expense category, per `is_income`;
    /// `None` when no category was selected
    pub category_number: Option<i32>,
    /// Account number of the money account holding or releasing the funds;
    /// `None` when no account was selected
    pub money_number: Option<i32>,
    /// Gross amount in minor currency units, tax inclusive, non-negative
    pub total: i64,
    /// Reference to the applied tax rate; `None` when no rate was selected
    pub tax_rate_id: Option<i64>,
}

/// Entry references accounts and tax rates by value only (soft foreign keys)
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
