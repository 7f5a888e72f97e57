//! Service layer for paisa-ledger
//!
//! The service layer provides the in-memory ledger: validation, referential
//! checks, and the computed amounts (balances, monthly spend) that feed the
//! money formatter. Persistence is the host application's concern; the
//! ledger serializes as a single serde document for hosts that want a
//! snapshot.

pub mod ledger;

pub use ledger::{AccountBalance, CategorySpend, ExpenseView, Ledger, MonthSummary};
