//! Aggregates over transactions: per-category summary and ranked description reports.

use crate::models::{Category, Transaction};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_net};
use crate::utils::formatting::{banner, money};
use crate::utils::table::Table;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: Category,
    pub count: usize,
    pub mean: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Only categories present in the rows, alphabetical.
    pub per_category: Vec<CategoryStats>,
    pub total_income: Decimal,
    pub total_expense: Decimal,
}

impl Summary {
    pub fn net(&self) -> Decimal {
        self.total_income - self.total_expense
    }
}

pub fn summary(rows: &[Transaction]) -> Summary {
    let mut per_category = Vec::new();
    let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();

    for category in Category::ALL {
        let amounts: Vec<Decimal> = rows
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.amount)
            .collect();

        let total: Decimal = amounts.iter().sum();
        totals.insert(category, total);

        if !amounts.is_empty() {
            per_category.push(CategoryStats {
                category,
                count: amounts.len(),
                mean: total / Decimal::from(amounts.len()),
            });
        }
    }

    Summary {
        per_category,
        total_income: totals.get(&Category::Income).copied().unwrap_or_default(),
        total_expense: totals.get(&Category::Expense).copied().unwrap_or_default(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub description: String,
    pub amount: Decimal,
    pub rank: usize,
}

/// Sum of `category` amounts per lower-cased description, largest first.
///
/// Ranks use the "min" method: equal sums share the best rank and the next
/// distinct sum skips the shared positions (50, 50, 30 → 1, 1, 3).
pub fn ranked_report(rows: &[Transaction], category: Category) -> Vec<RankedRow> {
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in rows.iter().filter(|t| t.category == category) {
        *sums.entry(t.description.to_lowercase()).or_default() += t.amount;
    }

    let mut grouped: Vec<(String, Decimal)> = sums.into_iter().collect();
    grouped.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out: Vec<RankedRow> = Vec::with_capacity(grouped.len());
    for (i, (description, amount)) in grouped.into_iter().enumerate() {
        let rank = match out.last() {
            Some(prev) if prev.amount == amount => prev.rank,
            _ => i + 1,
        };
        out.push(RankedRow {
            description,
            amount,
            rank,
        });
    }
    out
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn print_summary(summary: &Summary, symbol: &str) {
        header("Summary");

        if summary.per_category.is_empty() {
            info("No transactions to summarize.");
        } else {
            println!("{}", banner("Number of Entries"));
            for s in &summary.per_category {
                println!("{:<10} {}", s.category, s.count);
            }

            println!("\n{}", banner("Average Income and Expense"));
            for s in &summary.per_category {
                println!("{:<10} {}", s.category, money(symbol, s.mean));
            }
        }

        // Totals are always shown, all zero on an empty table.
        println!("\nTotal Income {}", money(symbol, summary.total_income));
        println!("Total Expense {}", money(symbol, summary.total_expense));
        println!("{}", "/".repeat(60));
        let net = summary.net();
        println!("Net Saving: {}{}{}", color_for_net(net), money(symbol, net), RESET);
        println!("{}", "/".repeat(60));
    }

    pub fn print_ranked(category: Category, rows: &[RankedRow], symbol: &str) {
        header(format!("Here is {} Report", category));

        if rows.is_empty() {
            info(format!("No {} transactions recorded.", category.as_str().to_lowercase()));
            return;
        }

        let mut table = Table::new(["rank", "description", "amount"]);
        for r in rows {
            table.add_row(vec![r.rank.to_string(), r.description.clone(), money(symbol, r.amount)]);
        }
        print!("{}", table.render());
        println!("{}", banner("End of Report"));
    }
}
