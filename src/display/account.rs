//! Account display formatting

use crate::models::Money;
use crate::services::AccountBalance;

/// Format a list of accounts with balances as a table
pub fn format_account_list(balances: &[AccountBalance]) -> String {
    if balances.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = balances
        .iter()
        .map(|b| b.account.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let type_width = balances
        .iter()
        .map(|b| b.account.account_type.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {:>14}  {}\n",
        "Name",
        "Type",
        "Balance",
        "Status",
        name_width = name_width,
        type_width = type_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<type_width$}  {:->14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    for balance in balances {
        let status = if balance.account.archived {
            "Archived"
        } else {
            ""
        };

        output.push_str(&format!(
            "{:<name_width$}  {:<type_width$}  {:>14}  {}\n",
            balance.account.name,
            balance.account.account_type.to_string(),
            balance.balance.to_string(),
            status,
            name_width = name_width,
            type_width = type_width,
        ));
    }

    let total: Money = balances.iter().map(|b| b.balance).sum();
    output.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {:>14}\n",
        "Total",
        "",
        total.to_string(),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}
