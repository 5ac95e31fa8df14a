//! Tax rate entity - A stored fractional tax percentage.
//!
//! Tax rates are seeded once on first initialization and never mutated.
//! Rates apply to gross totals via gross-up: `net = total / (1 + rate)`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tax rate database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tax_rates")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Fractional rate in `[0, 1)` (e.g. 0.06, 0.25)
    pub rate: f64,
}

/// Tax rate has no modeled relationships; entries reference it softly by id
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
