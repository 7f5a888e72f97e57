//! In-memory ledger
//!
//! Owns the accounts, categories, and expenses and enforces the rules that
//! relate them: unique names, valid models, and expenses that reference
//! existing entities. All monetary queries return [`Money`], whose `Display`
//! impl is the canonical ₹ formatter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, AccountId, AccountType, Category, CategoryId, Expense, ExpenseId, Money,
};

/// The in-memory ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    expenses: Vec<Expense>,
}

/// An account with its computed balance
#[derive(Debug, Clone)]
pub struct AccountBalance {
    pub account: Account,
    /// Starting balance minus all recorded expenses
    pub balance: Money,
}

/// Spend in one category for one calendar month
#[derive(Debug, Clone)]
pub struct CategorySpend {
    pub category_id: CategoryId,
    pub name: String,
    pub spent: Money,
    /// The category's monthly limit, if set
    pub limit: Option<Money>,
    /// Limit minus spent; negative when over budget
    pub remaining: Option<Money>,
}

/// Monthly roll-up across all visible categories
#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub total: Money,
    pub rows: Vec<CategorySpend>,
}

/// An expense with its account and category names resolved for display
#[derive(Debug, Clone)]
pub struct ExpenseView {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub account: String,
    pub category: String,
    pub amount: Money,
    pub note: String,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    // ---- accounts ----

    /// Create a new account
    pub fn add_account(
        &mut self,
        name: &str,
        account_type: AccountType,
        starting_balance: Money,
    ) -> LedgerResult<AccountId> {
        let name = name.trim();
        if self.account_name_exists(name) {
            return Err(LedgerError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let account = Account::with_starting_balance(name, account_type, starting_balance);
        account
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let id = account.id;
        self.accounts.push(account);
        Ok(id)
    }

    /// Get an account by ID
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Find an account by name (case-insensitive) or ID string
    pub fn find_account(&self, identifier: &str) -> Option<&Account> {
        if let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(identifier))
        {
            return Some(account);
        }

        identifier
            .parse::<AccountId>()
            .ok()
            .and_then(|id| self.account(id))
    }

    /// Get all accounts, optionally including archived ones
    pub fn accounts(&self, include_archived: bool) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|a| include_archived || !a.archived)
            .collect()
    }

    /// Archive an account (its expenses remain on the books)
    pub fn archive_account(&mut self, id: AccountId) -> LedgerResult<()> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))?;
        account.archive();
        Ok(())
    }

    /// Current balance of an account: starting balance minus its expenses
    pub fn account_balance(&self, id: AccountId) -> LedgerResult<Money> {
        let account = self
            .account(id)
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))?;

        let spent: Money = self
            .expenses
            .iter()
            .filter(|e| e.account_id == id)
            .map(|e| e.amount)
            .sum();

        Ok(account.starting_balance - spent)
    }

    /// All accounts with their computed balances
    pub fn accounts_with_balances(&self, include_archived: bool) -> Vec<AccountBalance> {
        self.accounts
            .iter()
            .filter(|a| include_archived || !a.archived)
            .map(|account| {
                let spent: Money = self
                    .expenses
                    .iter()
                    .filter(|e| e.account_id == account.id)
                    .map(|e| e.amount)
                    .sum();
                AccountBalance {
                    account: account.clone(),
                    balance: account.starting_balance - spent,
                }
            })
            .collect()
    }

    // ---- categories ----

    /// Create a new category
    pub fn add_category(
        &mut self,
        name: &str,
        monthly_limit: Option<Money>,
    ) -> LedgerResult<CategoryId> {
        let name = name.trim();
        if self.category_name_exists(name) {
            return Err(LedgerError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let mut category = Category::new(name);
        category.monthly_limit = monthly_limit;
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let id = category.id;
        self.categories.push(category);
        Ok(id)
    }

    /// Get a category by ID
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find a category by name (case-insensitive) or ID string
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        if let Some(category) = self
            .categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(identifier))
        {
            return Some(category);
        }

        identifier
            .parse::<CategoryId>()
            .ok()
            .and_then(|id| self.category(id))
    }

    /// Get all categories, sorted for display
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        categories.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        categories
    }

    // ---- expenses ----

    /// Record an expense against an account and category
    pub fn record_expense(
        &mut self,
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        date: NaiveDate,
        note: Option<&str>,
    ) -> LedgerResult<ExpenseId> {
        let account = self
            .account(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id.to_string()))?;
        if account.archived {
            return Err(LedgerError::Validation(format!(
                "Account is archived: {}",
                account.name
            )));
        }
        if self.category(category_id).is_none() {
            return Err(LedgerError::category_not_found(category_id.to_string()));
        }

        let expense = match note {
            Some(note) => Expense::with_note(account_id, category_id, amount, date, note),
            None => Expense::new(account_id, category_id, amount, date),
        };
        expense
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let id = expense.id;
        self.expenses.push(expense);
        Ok(id)
    }

    /// Get an expense by ID
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Delete an expense, returning it
    pub fn remove_expense(&mut self, id: ExpenseId) -> LedgerResult<Expense> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;
        Ok(self.expenses.remove(position))
    }

    /// All expenses for an account, newest first
    pub fn expenses_for_account(&self, id: AccountId) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| e.account_id == id)
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    /// All expenses for a category, newest first
    pub fn expenses_for_category(&self, id: CategoryId) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| e.category_id == id)
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    /// All expenses with names resolved, newest first
    pub fn expense_views(&self) -> Vec<ExpenseView> {
        let mut views: Vec<ExpenseView> = self
            .expenses
            .iter()
            .map(|e| ExpenseView {
                id: e.id,
                date: e.date,
                account: self
                    .account(e.account_id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| e.account_id.to_string()),
                category: self
                    .category(e.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| e.category_id.to_string()),
                amount: e.amount,
                note: e.note.clone(),
            })
            .collect();
        views.sort_by(|a, b| b.date.cmp(&a.date));
        views
    }

    // ---- monthly roll-ups ----

    /// Total spent in one category in the given calendar month
    pub fn category_spent_in_month(
        &self,
        id: CategoryId,
        year: i32,
        month: u32,
    ) -> LedgerResult<Money> {
        if self.category(id).is_none() {
            return Err(LedgerError::category_not_found(id.to_string()));
        }

        Ok(self
            .expenses
            .iter()
            .filter(|e| e.category_id == id && e.is_in_month(year, month))
            .map(|e| e.amount)
            .sum())
    }

    /// Total spent across all categories in the given calendar month
    pub fn total_spent_in_month(&self, year: i32, month: u32) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.is_in_month(year, month))
            .map(|e| e.amount)
            .sum()
    }

    /// Per-category roll-up for a calendar month
    ///
    /// Hidden categories are excluded from the rows but their expenses still
    /// count toward the total.
    pub fn month_summary(&self, year: i32, month: u32) -> MonthSummary {
        let rows = self
            .categories()
            .into_iter()
            .filter(|c| !c.hidden)
            .map(|category| {
                let spent: Money = self
                    .expenses
                    .iter()
                    .filter(|e| e.category_id == category.id && e.is_in_month(year, month))
                    .map(|e| e.amount)
                    .sum();
                CategorySpend {
                    category_id: category.id,
                    name: category.name.clone(),
                    spent,
                    limit: category.monthly_limit,
                    remaining: category.monthly_limit.map(|limit| limit - spent),
                }
            })
            .collect();

        MonthSummary {
            year,
            month,
            total: self.total_spent_in_month(year, month),
            rows,
        }
    }

    fn account_name_exists(&self, name: &str) -> bool {
        self.accounts
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case(name))
    }

    fn category_name_exists(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_ledger() -> (Ledger, AccountId, CategoryId) {
        let mut ledger = Ledger::new();
        let account = ledger
            .add_account("SBI Savings", AccountType::Bank, Money::from_paise(1000000))
            .unwrap();
        let category = ledger
            .add_category("Groceries", Some(Money::from_paise(500000)))
            .unwrap();
        (ledger, account, category)
    }

    #[test]
    fn test_add_account_rejects_duplicate_name() {
        let (mut ledger, _, _) = sample_ledger();
        let err = ledger
            .add_account("sbi savings", AccountType::Cash, Money::zero())
            .unwrap_err();
        assert!(matches!(err, LedgerError::Duplicate { .. }));
    }

    #[test]
    fn test_add_account_rejects_empty_name() {
        let mut ledger = Ledger::new();
        let err = ledger
            .add_account("   ", AccountType::Bank, Money::zero())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_find_account_by_name_or_id() {
        let (ledger, account, _) = sample_ledger();
        assert_eq!(ledger.find_account("SBI SAVINGS").unwrap().id, account);
        assert_eq!(
            ledger
                .find_account(&account.as_uuid().to_string())
                .unwrap()
                .id,
            account
        );
        assert!(ledger.find_account("missing").is_none());
    }

    #[test]
    fn test_record_expense_updates_balance() {
        let (mut ledger, account, category) = sample_ledger();
        ledger
            .record_expense(
                account,
                category,
                Money::from_paise(25000),
                date(2024, 3, 10),
                Some("weekly sabzi"),
            )
            .unwrap();

        let balance = ledger.account_balance(account).unwrap();
        assert_eq!(balance, Money::from_paise(975000));
        assert_eq!(balance.to_string(), "₹9750.00");
    }

    #[test]
    fn test_record_expense_checks_references() {
        let (mut ledger, account, category) = sample_ledger();

        let err = ledger
            .record_expense(
                AccountId::new(),
                category,
                Money::from_paise(100),
                date(2024, 1, 1),
                None,
            )
            .unwrap_err();
        assert!(err.is_not_found());

        let err = ledger
            .record_expense(
                account,
                CategoryId::new(),
                Money::from_paise(100),
                date(2024, 1, 1),
                None,
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_record_expense_rejects_non_positive_amount() {
        let (mut ledger, account, category) = sample_ledger();
        let err = ledger
            .record_expense(account, category, Money::zero(), date(2024, 1, 1), None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_record_expense_rejects_archived_account() {
        let (mut ledger, account, category) = sample_ledger();
        ledger.archive_account(account).unwrap();
        let err = ledger
            .record_expense(
                account,
                category,
                Money::from_paise(100),
                date(2024, 1, 1),
                None,
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_remove_expense() {
        let (mut ledger, account, category) = sample_ledger();
        let id = ledger
            .record_expense(
                account,
                category,
                Money::from_paise(5000),
                date(2024, 2, 1),
                None,
            )
            .unwrap();

        let removed = ledger.remove_expense(id).unwrap();
        assert_eq!(removed.amount.paise(), 5000);
        assert!(ledger.expense(id).is_none());
        assert!(ledger.remove_expense(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_category_spent_in_month() {
        let (mut ledger, account, category) = sample_ledger();
        for (day, paise) in [(3, 12000), (15, 8000), (28, 5000)] {
            ledger
                .record_expense(
                    account,
                    category,
                    Money::from_paise(paise),
                    date(2024, 3, day),
                    None,
                )
                .unwrap();
        }
        // Outside the month
        ledger
            .record_expense(
                account,
                category,
                Money::from_paise(99999),
                date(2024, 4, 1),
                None,
            )
            .unwrap();

        let spent = ledger
            .category_spent_in_month(category, 2024, 3)
            .unwrap();
        assert_eq!(spent, Money::from_paise(25000));
    }

    #[test]
    fn test_month_summary() {
        let (mut ledger, account, groceries) = sample_ledger();
        let transport = ledger.add_category("Transport", None).unwrap();

        ledger
            .record_expense(
                account,
                groceries,
                Money::from_paise(420000),
                date(2024, 3, 5),
                None,
            )
            .unwrap();
        ledger
            .record_expense(
                account,
                transport,
                Money::from_paise(15000),
                date(2024, 3, 6),
                None,
            )
            .unwrap();

        let summary = ledger.month_summary(2024, 3);
        assert_eq!(summary.total, Money::from_paise(435000));
        assert_eq!(summary.rows.len(), 2);

        let groceries_row = summary
            .rows
            .iter()
            .find(|r| r.name == "Groceries")
            .unwrap();
        assert_eq!(groceries_row.spent, Money::from_paise(420000));
        assert_eq!(groceries_row.limit, Some(Money::from_paise(500000)));
        assert_eq!(groceries_row.remaining, Some(Money::from_paise(80000)));

        let transport_row = summary
            .rows
            .iter()
            .find(|r| r.name == "Transport")
            .unwrap();
        assert_eq!(transport_row.limit, None);
        assert_eq!(transport_row.remaining, None);
    }

    #[test]
    fn test_month_summary_over_budget_goes_negative() {
        let (mut ledger, account, groceries) = sample_ledger();
        ledger
            .record_expense(
                account,
                groceries,
                Money::from_paise(550000),
                date(2024, 3, 5),
                None,
            )
            .unwrap();

        let summary = ledger.month_summary(2024, 3);
        let row = &summary.rows[0];
        assert_eq!(row.remaining, Some(Money::from_paise(-50000)));
        assert_eq!(row.remaining.unwrap().to_string(), "-₹500.00");
    }

    #[test]
    fn test_expense_views_resolve_names() {
        let (mut ledger, account, category) = sample_ledger();
        ledger
            .record_expense(
                account,
                category,
                Money::from_paise(7500),
                date(2024, 3, 1),
                Some("milk"),
            )
            .unwrap();

        let views = ledger.expense_views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].account, "SBI Savings");
        assert_eq!(views[0].category, "Groceries");
        assert_eq!(views[0].amount.to_string(), "₹75.00");
        assert_eq!(views[0].note, "milk");
    }

    #[test]
    fn test_serialization_round_trip() {
        let (mut ledger, account, category) = sample_ledger();
        ledger
            .record_expense(
                account,
                category,
                Money::from_paise(100),
                date(2024, 1, 1),
                None,
            )
            .unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.account_balance(account).unwrap().paise(), 999900);
        assert_eq!(back.expense_views().len(), 1);
    }
}
