//! First-run seeding of the chart of accounts and tax-rate table.

use crate::{
    config::chart::ChartConfig,
    entities::{Account, TaxRate, account, tax_rate},
    errors::Result,
};
use sea_orm::{PaginatorTrait, Set, prelude::*};
use tracing::info;

/// Seeds accounts and tax rates exactly once, detected independently by an
/// empty accounts table and an empty tax-rates table.
///
/// Idempotent: calling this on an already-seeded database changes nothing.
/// The chart is validated before any row is written, so a broken override
/// file cannot seed a partial chart.
pub async fn initialize_if_empty(db: &DatabaseConnection, chart: &ChartConfig) -> Result<()> {
    chart.validate()?;

    let account_count = Account::find().count(db).await?;
    if account_count == 0 {
        for seed in &chart.accounts {
            let model = account::ActiveModel {
                name: Set(seed.name.clone()),
                number: Set(seed.number),
                kind: Set(seed.kind.as_str().to_string()),
                ..Default::default()
            };
            model.insert(db).await?;
        }
        info!("Seeded {} accounts into empty chart", chart.accounts.len());
    }

    let rate_count = TaxRate::find().count(db).await?;
    if rate_count == 0 {
        for seed in &chart.tax_rates {
            let model = tax_rate::ActiveModel {
                rate: Set(seed.rate),
                ..Default::default()
            };
            model.insert(db).await?;
        }
        info!("Seeded {} tax rates", chart.tax_rates.len());
    }

    Ok(())
}
