//! Account model
//!
//! Represents the places money is spent from (bank accounts, cash wallets,
//! cards, UPI wallets).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Type of spending account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Bank account (savings or current)
    Bank,
    /// Physical cash
    Cash,
    /// Credit or debit card
    Card,
    /// UPI/mobile wallet
    Wallet,
    /// Other account type
    Other,
}

impl AccountType {
    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bank" => Some(Self::Bank),
            "cash" => Some(Self::Cash),
            "card" | "credit" | "debit" => Some(Self::Card),
            "wallet" | "upi" => Some(Self::Wallet),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Bank
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bank => write!(f, "Bank"),
            Self::Cash => write!(f, "Cash"),
            Self::Card => write!(f, "Card"),
            Self::Wallet => write!(f, "Wallet"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A spending account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "SBI Savings")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Balance when the account was created, in paise
    pub starting_balance: Money,

    /// Whether this account is archived (soft-deleted)
    pub archived: bool,

    /// Notes about this account
    #[serde(default)]
    pub notes: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with default values
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            starting_balance: Money::zero(),
            archived: false,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new account with a starting balance
    pub fn with_starting_balance(
        name: impl Into<String>,
        account_type: AccountType,
        starting_balance: Money,
    ) -> Self {
        let mut account = Self::new(name, account_type);
        account.starting_balance = starting_balance;
        account
    }

    /// Mark this account as archived
    pub fn archive(&mut self) {
        self.archived = true;
        self.updated_at = Utc::now();
    }

    /// Unarchive this account
    pub fn unarchive(&mut self) {
        self.archived = false;
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("SBI Savings", AccountType::Bank);
        assert_eq!(account.name, "SBI Savings");
        assert_eq!(account.account_type, AccountType::Bank);
        assert!(!account.archived);
        assert_eq!(account.starting_balance, Money::zero());
    }

    #[test]
    fn test_with_starting_balance() {
        let account =
            Account::with_starting_balance("Cash", AccountType::Cash, Money::from_paise(500000));
        assert_eq!(account.starting_balance.paise(), 500000);
    }

    #[test]
    fn test_archive() {
        let mut account = Account::new("Test", AccountType::Bank);
        assert!(!account.archived);

        account.archive();
        assert!(account.archived);

        account.unarchive();
        assert!(!account.archived);
    }

    #[test]
    fn test_account_type_parse() {
        assert_eq!(AccountType::parse("bank"), Some(AccountType::Bank));
        assert_eq!(AccountType::parse("UPI"), Some(AccountType::Wallet));
        assert_eq!(AccountType::parse("credit"), Some(AccountType::Card));
        assert_eq!(AccountType::parse("bogus"), None);
    }

    #[test]
    fn test_validate() {
        let mut account = Account::new("Valid", AccountType::Bank);
        assert!(account.validate().is_ok());

        account.name = "   ".to_string();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "x".repeat(101);
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(101))
        );
    }

    #[test]
    fn test_display() {
        let account = Account::new("HDFC", AccountType::Bank);
        assert_eq!(account.to_string(), "HDFC (Bank)");
    }

    #[test]
    fn test_serialization_round_trip() {
        let account = Account::with_starting_balance("Paytm", AccountType::Wallet, Money::from_paise(12345));
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, account.id);
        assert_eq!(back.name, account.name);
        assert_eq!(back.starting_balance, account.starting_balance);
    }
}
