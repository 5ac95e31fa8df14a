//! Entry store operations.
//!
//! Provides the insert/update/get/list contract the report engine and any UI
//! caller depend on. Writes validate the payload at the boundary: totals must
//! be non-negative and every selected reference must resolve to a record of
//! the expected kind. Stored data is still treated as untrusted by the report
//! engine, so rows predating these checks cannot break a report.

use crate::{
    entities::{Account, AccountKind, Entry, account, entry},
    errors::{Error, Result},
};
use sea_orm::{ActiveValue::Unchanged, QueryOrder, Set, prelude::*};

/// Payload for creating an entry; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Free-text label
    pub description: String,
    /// Calendar date of the transaction
    pub date: Date,
    /// Income (true) or expense (false)
    pub is_income: bool,
    /// Income/expense category account number, if selected
    pub category_number: Option<i32>,
    /// Money account number, if selected
    pub money_number: Option<i32>,
    /// Gross tax-inclusive amount in minor units
    pub total: i64,
    /// Applied tax rate id, if selected
    pub tax_rate_id: Option<i64>,
}

/// Creates a new entry after validating it, returning the persisted model
/// with its assigned id.
pub async fn insert_entry(db: &DatabaseConnection, new: NewEntry) -> Result<entry::Model> {
    validate_refs(
        db,
        new.is_income,
        new.category_number,
        new.money_number,
        new.total,
        new.tax_rate_id,
    )
    .await?;

    let model = entry::ActiveModel {
        description: Set(new.description),
        date: Set(new.date),
        is_income: Set(new.is_income),
        category_number: Set(new.category_number),
        money_number: Set(new.money_number),
        total: Set(new.total),
        tax_rate_id: Set(new.tax_rate_id),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Overwrites the stored entry matching `entry.id`.
///
/// Fails with [`Error::EntryNotFound`] when no such entry exists, and applies
/// the same validation as [`insert_entry`].
pub async fn update_entry(db: &DatabaseConnection, entry: entry::Model) -> Result<entry::Model> {
    Entry::find_by_id(entry.id)
        .one(db)
        .await?
        .ok_or(Error::EntryNotFound { id: entry.id })?;

    validate_refs(
        db,
        entry.is_income,
        entry.category_number,
        entry.money_number,
        entry.total,
        entry.tax_rate_id,
    )
    .await?;

    let active = entry::ActiveModel {
        id: Unchanged(entry.id),
        description: Set(entry.description),
        date: Set(entry.date),
        is_income: Set(entry.is_income),
        category_number: Set(entry.category_number),
        money_number: Set(entry.money_number),
        total: Set(entry.total),
        tax_rate_id: Set(entry.tax_rate_id),
    };

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Retrieves an entry by id, failing when it does not exist.
pub async fn get_entry(db: &DatabaseConnection, id: i64) -> Result<entry::Model> {
    Entry::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::EntryNotFound { id })
}

/// Retrieves every entry ordered by date ascending.
///
/// Same-day entries are ordered by id so that repeated calls over the same
/// data always produce the same sequence, which the tax report's determinism
/// guarantee relies on.
pub async fn list_entries(db: &DatabaseConnection) -> Result<Vec<entry::Model>> {
    Entry::find()
        .order_by_asc(entry::Column::Date)
        .order_by_asc(entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Write-boundary validation shared by insert and update.
async fn validate_refs(
    db: &DatabaseConnection,
    is_income: bool,
    category_number: Option<i32>,
    money_number: Option<i32>,
    total: i64,
    tax_rate_id: Option<i64>,
) -> Result<()> {
    if total < 0 {
        return Err(Error::InvalidAmount { amount: total });
    }

    if let Some(number) = category_number {
        let expected = if is_income {
            AccountKind::Income
        } else {
            AccountKind::Expense
        };
        require_account_of_kind(db, number, expected).await?;
    }

    if let Some(number) = money_number {
        require_account_of_kind(db, number, AccountKind::Money).await?;
    }

    if let Some(id) = tax_rate_id {
        crate::store::tax_rates::find_tax_rate(db, id)
            .await?
            .ok_or(Error::TaxRateNotFound { id })?;
    }

    Ok(())
}

/// Checks that `number` resolves to at least one account of `expected` kind.
async fn require_account_of_kind(
    db: &DatabaseConnection,
    number: i32,
    expected: AccountKind,
) -> Result<()> {
    let candidates = Account::find()
        .filter(account::Column::Number.eq(number))
        .all(db)
        .await?;

    if candidates.is_empty() {
        return Err(Error::AccountNotFound { number });
    }
    if !candidates.iter().any(|a| a.kind == expected.as_str()) {
        return Err(Error::WrongAccountKind {
            number,
            expected: expected.as_str(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, setup_seeded_db, test_entry};

    #[tokio::test]
    async fn test_insert_entry_assigns_id() -> Result<()> {
        let db = setup_seeded_db().await?;

        let created = insert_entry(&db, test_entry("Invoice 12", date(2026, 3, 5), true, 12000)).await?;
        assert!(created.id > 0);
        assert_eq!(created.description, "Invoice 12");
        assert_eq!(created.total, 12000);

        let fetched = get_entry(&db, created.id).await?;
        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_entry_not_found() -> Result<()> {
        let db = setup_seeded_db().await?;

        let result = get_entry(&db, 42).await;
        assert!(matches!(result, Err(Error::EntryNotFound { id: 42 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_entries_sorted_by_date_then_id() -> Result<()> {
        let db = setup_seeded_db().await?;

        // Inserted out of date order, plus two entries sharing a date
        let later = insert_entry(&db, test_entry("Later", date(2026, 6, 1), true, 100)).await?;
        let early = insert_entry(&db, test_entry("Early", date(2026, 1, 1), true, 100)).await?;
        let same_day_a = insert_entry(&db, test_entry("Same A", date(2026, 3, 1), true, 100)).await?;
        let same_day_b = insert_entry(&db, test_entry("Same B", date(2026, 3, 1), true, 100)).await?;

        let ids: Vec<i64> = list_entries(&db).await?.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![early.id, same_day_a.id, same_day_b.id, later.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_entry_overwrites() -> Result<()> {
        let db = setup_seeded_db().await?;

        let mut entry = insert_entry(&db, test_entry("Draft", date(2026, 3, 5), true, 100)).await?;
        entry.description = "Final".to_string();
        entry.total = 250;

        let updated = update_entry(&db, entry.clone()).await?;
        assert_eq!(updated.description, "Final");
        assert_eq!(updated.total, 250);

        let fetched = get_entry(&db, entry.id).await?;
        assert_eq!(fetched.description, "Final");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_entry_unknown_id_fails() -> Result<()> {
        let db = setup_seeded_db().await?;

        let mut entry = insert_entry(&db, test_entry("Real", date(2026, 3, 5), true, 100)).await?;
        entry.id = 9999;

        let result = update_entry(&db, entry).await;
        assert!(matches!(result, Err(Error::EntryNotFound { id: 9999 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_rejects_negative_total() -> Result<()> {
        let db = setup_seeded_db().await?;

        let new = test_entry("Bad", date(2026, 3, 5), true, -1);
        let result = insert_entry(&db, new).await;
        assert!(matches!(result, Err(Error::InvalidAmount { amount: -1 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_rejects_dangling_category() -> Result<()> {
        let db = setup_seeded_db().await?;

        let mut new = test_entry("Bad ref", date(2026, 3, 5), true, 100);
        new.category_number = Some(999);
        let result = insert_entry(&db, new).await;
        assert!(matches!(result, Err(Error::AccountNotFound { number: 999 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_rejects_category_of_wrong_kind() -> Result<()> {
        let db = setup_seeded_db().await?;

        // 440 (Sales) is an income account; an expense entry may not use it
        let mut new = test_entry("Mismatched", date(2026, 3, 5), false, 100);
        new.category_number = Some(440);
        let result = insert_entry(&db, new).await;
        assert!(matches!(
            result,
            Err(Error::WrongAccountKind { number: 440, expected: "expense" })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_rejects_non_money_account_reference() -> Result<()> {
        let db = setup_seeded_db().await?;

        let mut new = test_entry("Mismatched", date(2026, 3, 5), true, 100);
        new.money_number = Some(440);
        let result = insert_entry(&db, new).await;
        assert!(matches!(
            result,
            Err(Error::WrongAccountKind { number: 440, expected: "money" })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_rejects_dangling_tax_rate() -> Result<()> {
        let db = setup_seeded_db().await?;

        let mut new = test_entry("Bad rate", date(2026, 3, 5), true, 100);
        new.tax_rate_id = Some(999);
        let result = insert_entry(&db, new).await;
        assert!(matches!(result, Err(Error::TaxRateNotFound { id: 999 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_allows_unselected_references() -> Result<()> {
        let db = setup_seeded_db().await?;

        let new = NewEntry {
            description: "Bare".to_string(),
            date: date(2026, 3, 5),
            is_income: true,
            category_number: None,
            money_number: None,
            total: 0,
            tax_rate_id: None,
        };
        let created = insert_entry(&db, new).await?;
        assert_eq!(created.tax_rate_id, None);

        Ok(())
    }
}
