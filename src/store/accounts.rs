//! Account store operations.
//!
//! Accounts are read-only after seeding, so this module only lists and looks
//! them up. Lookups go through the `number` category code, never the
//! surrogate id.

use crate::{
    entities::{Account, AccountKind, account},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*};

/// Retrieves every account in seed order (ascending id).
///
/// The account report iterates accounts in exactly this order, so it must be
/// stable across calls.
pub async fn list_accounts(db: &DatabaseConnection) -> Result<Vec<account::Model>> {
    Account::find()
        .order_by_asc(account::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the accounts of one category, in seed order.
pub async fn list_accounts_of_kind(
    db: &DatabaseConnection,
    kind: AccountKind,
) -> Result<Vec<account::Model>> {
    Account::find()
        .filter(account::Column::Kind.eq(kind.as_str()))
        .order_by_asc(account::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an account by its category code, returning `None` when no account
/// carries that number.
///
/// Entry references are matched by value, so absence is an expected outcome
/// here rather than an error.
pub async fn find_account(
    db: &DatabaseConnection,
    number: i32,
) -> Result<Option<account::Model>> {
    Account::find()
        .filter(account::Column::Number.eq(number))
        .order_by_asc(account::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves an account by its category code, failing when it does not exist.
pub async fn get_account(db: &DatabaseConnection, number: i32) -> Result<account::Model> {
    find_account(db, number)
        .await?
        .ok_or(Error::AccountNotFound { number })
}
