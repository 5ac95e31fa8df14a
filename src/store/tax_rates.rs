//! Tax rate store operations.

use crate::{
    entities::{TaxRate, tax_rate},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*};

/// Retrieves every tax rate, ordered by id.
pub async fn list_tax_rates(db: &DatabaseConnection) -> Result<Vec<tax_rate::Model>> {
    TaxRate::find()
        .order_by_asc(tax_rate::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a tax rate by id, returning `None` when it does not exist.
pub async fn find_tax_rate(db: &DatabaseConnection, id: i64) -> Result<Option<tax_rate::Model>> {
    TaxRate::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Retrieves a tax rate by id, failing when it does not exist.
pub async fn get_tax_rate(db: &DatabaseConnection, id: i64) -> Result<tax_rate::Model> {
    find_tax_rate(db, id)
        .await?
        .ok_or(Error::TaxRateNotFound { id })
}
