//! Expense display formatting

use crate::services::ExpenseView;

/// Format a list of expenses as a table, one row per expense
pub fn format_expense_list(views: &[ExpenseView]) -> String {
    if views.is_empty() {
        return "No expenses found.".to_string();
    }

    let account_width = views
        .iter()
        .map(|v| v.account.len())
        .max()
        .unwrap_or(7)
        .max(7);

    let category_width = views
        .iter()
        .map(|v| v.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<account_width$}  {:<category_width$}  {:>14}  {}\n",
        "Date",
        "Account",
        "Category",
        "Amount",
        "Note",
        account_width = account_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<account_width$}  {:-<category_width$}  {:->14}  {:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        account_width = account_width,
        category_width = category_width,
    ));

    for view in views {
        output.push_str(&format!(
            "{:<10}  {:<account_width$}  {:<category_width$}  {:>14}  {}\n",
            view.date.to_string(),
            view.account,
            view.category,
            view.amount.to_string(),
            view.note,
            account_width = account_width,
            category_width = category_width,
        ));
    }

    output
}
