//! Monthly summary display formatting

use crate::services::MonthSummary;

/// Format a monthly per-category summary as a table
pub fn format_month_summary(summary: &MonthSummary) -> String {
    let mut output = format!("Spending for {:04}-{:02}\n\n", summary.year, summary.month);

    if summary.rows.is_empty() {
        output.push_str("No categories defined.\n");
        output.push_str(&format!("Total spent: {}\n", summary.total));
        return output;
    }

    let name_width = summary
        .rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>14}  {:>14}\n",
        "Category",
        "Spent",
        "Limit",
        "Remaining",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for row in &summary.rows {
        let limit = row
            .limit
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        let remaining = row
            .remaining
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {:>14}  {:>14}\n",
            row.name,
            row.spent.to_string(),
            limit,
            remaining,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "\n{:<name_width$}  {:>14}\n",
        "Total",
        summary.total.to_string(),
        name_width = name_width,
    ));

    output
}
