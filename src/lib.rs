//! paisa-ledger - Domain core for a rupee-and-paise expense tracker
//!
//! This library provides the money handling and ledger logic behind a
//! personal-finance application for Indian-rupee users. Amounts are stored
//! as integer paise (1/100 of a rupee) so no floating-point rounding ever
//! touches a balance, and rendered as ₹ strings by the `Money` type.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, accounts, categories, expenses)
//! - `services`: The in-memory ledger and its computed amounts
//! - `display`: Plain-text table rendering of ledger data
//! - `error`: Custom error types
//!
//! Persistence, UI, and navigation belong to the host application; the
//! ledger serializes with serde for hosts that want to snapshot it.
//!
//! # Example
//!
//! ```rust
//! use paisa_ledger::models::{AccountType, Money};
//! use paisa_ledger::services::Ledger;
//! use chrono::NaiveDate;
//!
//! # fn main() -> paisa_ledger::error::LedgerResult<()> {
//! let mut ledger = Ledger::new();
//! let account = ledger.add_account("Cash", AccountType::Cash, Money::from_paise(500000))?;
//! let category = ledger.add_category("Groceries", None)?;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! ledger.record_expense(account, category, Money::from_paise(12550), date, None)?;
//!
//! assert_eq!(ledger.account_balance(account)?.to_string(), "₹4874.50");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{LedgerError, LedgerResult};
pub use models::Money;
pub use services::Ledger;
