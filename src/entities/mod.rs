//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod entry;
pub mod tax_rate;

// Re-export specific types to avoid conflicts
pub use account::{AccountKind, Column as AccountColumn, Entity as Account, Model as AccountModel};
pub use entry::{Column as EntryColumn, Entity as Entry, Model as EntryModel};
pub use tax_rate::{Column as TaxRateColumn, Entity as TaxRate, Model as TaxRateModel};
