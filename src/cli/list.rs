use comfy_table::{Cell, Table};

use crate::cli::parse_range;
use crate::db::{open_store, query_expenses};
use crate::error::Result;
use crate::fmt::money;
use crate::models::Expense;

pub fn run(from: Option<String>, to: Option<String>, limit: Option<usize>) -> Result<()> {
    let range = parse_range(&from, &to)?;
    let conn = open_store()?;
    let records = query_expenses(&conn, range.as_ref().map(|(f, t)| (f.as_str(), t.as_str())))?;

    if records.is_empty() {
        if range.is_some() {
            println!("No expenses found for the selected date range.");
        } else {
            println!("No expenses recorded yet.");
        }
        return Ok(());
    }

    // With a limit, show the newest records first; otherwise the full
    // ledger in chronological order.
    let rows: Vec<&Expense> = match limit {
        Some(n) => records.iter().rev().take(n).collect(),
        None => records.iter().collect(),
    };

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Category", "Amount", "Description"]);
    for rec in &rows {
        table.add_row(vec![
            Cell::new(rec.id),
            Cell::new(&rec.date),
            Cell::new(&rec.category),
            Cell::new(money(rec.amount)),
            Cell::new(&rec.description),
        ]);
    }

    let total: f64 = rows.iter().map(|r| r.amount).sum();
    println!("Expenses\n{table}");
    println!("{} record(s), {}", rows.len(), money(total));
    Ok(())
}
