//! Core data models for paisa-ledger
//!
//! This module contains the data structures that represent the expense
//! tracking domain: accounts, categories, expenses, and the Money type.

pub mod account;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use account::{Account, AccountType};
pub use category::Category;
pub use expense::Expense;
pub use ids::{AccountId, CategoryId, ExpenseId};
pub use money::{Money, MoneyParseError};
