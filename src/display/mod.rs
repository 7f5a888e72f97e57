//! Display formatting for terminal output
//!
//! Renders ledger data as plain-text tables. All monetary cells go through
//! the `Display` impl of `Money`; nothing here re-derives the ₹ format.

pub mod account;
pub mod expense;
pub mod summary;

pub use account::format_account_list;
pub use expense::format_expense_list;
pub use summary::format_month_summary;
