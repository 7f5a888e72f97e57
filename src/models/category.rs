//! Category model
//!
//! Expenses are tagged with a category (e.g., "Groceries", "Transport").
//! A category may carry an optional monthly spending limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// An expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Optional spending limit per calendar month
    pub monthly_limit: Option<Money>,

    /// Whether this category is hidden from summaries
    #[serde(default)]
    pub hidden: bool,

    /// Sort order for display
    #[serde(default)]
    pub sort_order: i32,

    /// Notes about this category
    #[serde(default)]
    pub notes: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            monthly_limit: None,
            hidden: false,
            sort_order: 0,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new category with a monthly spending limit
    pub fn with_limit(name: impl Into<String>, limit: Money) -> Self {
        let mut category = Self::new(name);
        category.monthly_limit = Some(limit);
        category
    }

    /// Set the monthly spending limit
    pub fn set_limit(&mut self, limit: Money) {
        self.monthly_limit = Some(limit);
        self.updated_at = Utc::now();
    }

    /// Clear the monthly spending limit
    pub fn clear_limit(&mut self) {
        self.monthly_limit = None;
        self.updated_at = Utc::now();
    }

    /// Hide this category from summaries
    pub fn hide(&mut self) {
        self.hidden = true;
        self.updated_at = Utc::now();
    }

    /// Unhide this category
    pub fn unhide(&mut self) {
        self.hidden = false;
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if let Some(limit) = self.monthly_limit {
            if !limit.is_positive() {
                return Err(CategoryValidationError::NonPositiveLimit(limit.paise()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveLimit(i64),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NonPositiveLimit(paise) => {
                write!(f, "Monthly limit must be positive (got {} paise)", paise)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
