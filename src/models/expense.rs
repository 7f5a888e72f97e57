//! Expense model
//!
//! A single spend: money leaving an account, tagged with a category. Amounts
//! are recorded as positive paise; refunds are modeled by deleting the
//! expense, not by negative amounts.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The account the money left
    pub account_id: AccountId,

    /// The category this spend belongs to
    pub category_id: CategoryId,

    /// Amount spent (positive paise)
    pub amount: Money,

    /// Date of the spend
    pub date: NaiveDate,

    /// Free-form note
    #[serde(default)]
    pub note: String,

    /// When the expense was created
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            account_id,
            category_id,
            amount,
            date,
            note: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new expense with a note
    pub fn with_note(
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(account_id, category_id, amount, date);
        expense.note = note.into();
        expense
    }

    /// Change the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Change the note
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
        self.updated_at = Utc::now();
    }

    /// Check whether this expense falls in the given calendar month
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(
                self.amount.paise(),
            ));
        }

        if self.note.len() > 500 {
            return Err(ExpenseValidationError::NoteTooLong(self.note.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(i64),
    NoteTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(paise) => {
                write!(f, "Expense amount must be positive (got {} paise)", paise)
            }
            Self::NoteTooLong(len) => {
                write!(f, "Expense note too long ({} chars, max 500)", len)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
