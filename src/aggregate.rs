//! Month and category aggregation over the record set. All outputs are
//! recomputed from scratch on every request; nothing here is persisted.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::Expense;

#[derive(Debug, Clone, Serialize)]
pub struct MonthTotal {
    pub month: String,
    pub total: f64,
}

/// Dense month-by-category table of summed amounts. Every observed
/// (month, category) combination is present, zero where no record fell in
/// it. Months ascend chronologically, categories alphabetically.
#[derive(Debug, Clone, Serialize)]
pub struct Pivot {
    pub months: Vec<String>,
    pub categories: Vec<String>,
    pub cells: Vec<Vec<f64>>,
}

/// Calendar month a record belongs to, as its YYYY-MM date prefix.
fn month_of(date: &str) -> &str {
    date.get(..7).unwrap_or(date)
}

/// Sum amounts per calendar month, chronologically ascending. Empty input
/// yields an empty vector, which callers render as "nothing to display".
pub fn monthly_totals(records: &[Expense]) -> Vec<MonthTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for rec in records {
        *totals.entry(month_of(&rec.date)).or_insert(0.0) += rec.amount;
    }
    totals
        .into_iter()
        .map(|(month, total)| MonthTotal {
            month: month.to_string(),
            total,
        })
        .collect()
}

/// Sum amounts per category, descending by total.
pub fn category_totals(records: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for rec in records {
        *totals.entry(rec.category.as_str()).or_insert(0.0) += rec.amount;
    }
    let mut out: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(category, total)| (category.to_string(), total))
        .collect();
    out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    out
}

pub fn pivot(records: &[Expense]) -> Pivot {
    let month_set: BTreeSet<&str> = records.iter().map(|r| month_of(&r.date)).collect();
    let category_set: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
    let months: Vec<String> = month_set.iter().map(|m| m.to_string()).collect();
    let categories: Vec<String> = category_set.iter().map(|c| c.to_string()).collect();

    let mut cells = vec![vec![0.0; categories.len()]; months.len()];
    for rec in records {
        let row = months.iter().position(|m| m.as_str() == month_of(&rec.date));
        let col = categories.iter().position(|c| c.as_str() == rec.category);
        if let (Some(row), Some(col)) = (row, col) {
            cells[row][col] += rec.amount;
        }
    }

    Pivot {
        months,
        categories,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id: 0,
            date: date.to_string(),
            category: category.to_string(),
            amount,
            description: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_monthly_totals_groups_and_orders() {
        let records = vec![
            expense("2024-01-05", "Other", 10.0),
            expense("2024-01-20", "Other", 5.0),
            expense("2024-02-03", "Other", 20.0),
        ];
        let totals = monthly_totals(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].month, "2024-01");
        assert!((totals[0].total - 15.0).abs() < 1e-9);
        assert_eq!(totals[1].month, "2024-02");
        assert!((totals[1].total - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_totals_conserve_input_sum() {
        let records = vec![
            expense("2023-11-02", "Housing", 900.0),
            expense("2023-12-14", "Utilities", 61.25),
            expense("2023-12-30", "Dining Out", 38.75),
            expense("2024-02-01", "Other", 7.5),
        ];
        let input_sum: f64 = records.iter().map(|r| r.amount).sum();
        let output_sum: f64 = monthly_totals(&records).iter().map(|m| m.total).sum();
        assert!((input_sum - output_sum).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_empty_aggregate() {
        assert!(monthly_totals(&[]).is_empty());
        let p = pivot(&[]);
        assert!(p.months.is_empty());
        assert!(p.categories.is_empty());
        assert!(p.cells.is_empty());
    }

    #[test]
    fn test_pivot_is_dense_with_zero_fill() {
        // 2 months x 3 categories, only 4 combinations populated.
        let records = vec![
            expense("2024-01-05", "Housing", 900.0),
            expense("2024-01-10", "Utilities", 60.0),
            expense("2024-02-05", "Housing", 900.0),
            expense("2024-02-18", "Dining Out", 42.0),
        ];
        let p = pivot(&records);
        assert_eq!(p.months, vec!["2024-01", "2024-02"]);
        assert_eq!(p.categories, vec!["Dining Out", "Housing", "Utilities"]);
        assert_eq!(p.cells.len(), 2);
        assert!(p.cells.iter().all(|row| row.len() == 3));

        // Absent combinations are explicit zeros.
        assert_eq!(p.cells[0][0], 0.0); // 2024-01 Dining Out
        assert_eq!(p.cells[1][2], 0.0); // 2024-02 Utilities

        let cell_sum: f64 = p.cells.iter().flatten().sum();
        let input_sum: f64 = records.iter().map(|r| r.amount).sum();
        assert!((cell_sum - input_sum).abs() < 1e-9);
    }

    #[test]
    fn test_category_totals_descend() {
        let records = vec![
            expense("2024-01-05", "Housing", 900.0),
            expense("2024-01-10", "Utilities", 60.0),
            expense("2024-02-10", "Utilities", 65.0),
        ];
        let totals = category_totals(&records);
        assert_eq!(totals[0].0, "Housing");
        assert_eq!(totals[1].0, "Utilities");
        assert!((totals[1].1 - 125.0).abs() < 1e-9);
    }
}
