use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::aggregate;
use crate::anomaly;
use crate::cli::ReportCommands;
use crate::db::{open_store, query_expenses};
use crate::error::Result;
use crate::fmt::money;
use crate::forecast;
use crate::models::Expense;

/// Run one analytics pass over the full record set. The empty-store check
/// lives here: the forecaster and the anomaly detector are never invoked
/// on an empty series.
pub fn dispatch(cmd: ReportCommands) -> Result<()> {
    let conn = open_store()?;
    let records = query_expenses(&conn, None)?;
    if records.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    match cmd {
        ReportCommands::Monthly { json } => monthly(&records, json),
        ReportCommands::Categories { json } => categories(&records, json),
        ReportCommands::Pivot { json } => pivot(&records, json),
        ReportCommands::Forecast { horizon, json } => forecast_trend(&records, horizon, json),
        ReportCommands::Anomalies {
            seed,
            contamination,
            json,
        } => anomalies(&records, seed, contamination, json),
    }
}

fn monthly(records: &[Expense], json: bool) -> Result<()> {
    let totals = aggregate::monthly_totals(records);
    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Month", "Total"]);
    for row in &totals {
        table.add_row(vec![Cell::new(&row.month), Cell::new(money(row.total))]);
    }
    let grand: f64 = totals.iter().map(|t| t.total).sum();
    table.add_row(vec![Cell::new("Total"), Cell::new(money(grand))]);

    println!("Monthly Spending\n{table}");
    Ok(())
}

fn categories(records: &[Expense], json: bool) -> Result<()> {
    let totals = aggregate::category_totals(records);
    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Total"]);
    for (category, total) in &totals {
        table.add_row(vec![Cell::new(category), Cell::new(money(*total))]);
    }

    println!("Category Distribution\n{table}");
    Ok(())
}

fn pivot(records: &[Expense], json: bool) -> Result<()> {
    let p = aggregate::pivot(records);
    if json {
        println!("{}", serde_json::to_string_pretty(&p)?);
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec![Cell::new("Month")];
    header.extend(p.categories.iter().map(Cell::new));
    table.set_header(header);
    for (month, row) in p.months.iter().zip(&p.cells) {
        let mut cells = vec![Cell::new(month)];
        cells.extend(row.iter().map(|v| Cell::new(money(*v))));
        table.add_row(cells);
    }

    println!("Monthly Spending by Category\n{table}");
    Ok(())
}

fn forecast_trend(records: &[Expense], horizon: usize, json: bool) -> Result<()> {
    let series: Vec<f64> = aggregate::monthly_totals(records)
        .iter()
        .map(|m| m.total)
        .collect();
    let points = forecast::forecast(&series, horizon)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    let line = forecast::fit(&series)?;
    println!(
        "Trend over {} observed month(s): {} per month",
        series.len(),
        money(line.slope)
    );

    let mut table = Table::new();
    table.set_header(vec!["Period", "Projected"]);
    for (i, point) in points.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("Forecast {}", i + 1)),
            Cell::new(money(point.amount)),
        ]);
    }

    println!("Spending Forecast\n{table}");
    Ok(())
}

fn anomalies(records: &[Expense], seed: u64, contamination: f64, json: bool) -> Result<()> {
    let amounts: Vec<f64> = records.iter().map(|r| r.amount).collect();
    let flags = anomaly::detect(&amounts, seed, contamination)?;
    let flagged: Vec<&Expense> = records
        .iter()
        .zip(&flags)
        .filter(|(_, flagged)| **flagged)
        .map(|(rec, _)| rec)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&flagged)?);
        return Ok(());
    }

    if flagged.is_empty() {
        println!("{}", "No unusual spending patterns detected.".green());
        return Ok(());
    }

    println!("{}", "Unusual spending patterns detected:".yellow());
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Category", "Amount", "Description"]);
    for rec in &flagged {
        table.add_row(vec![
            Cell::new(rec.id),
            Cell::new(&rec.date),
            Cell::new(&rec.category),
            Cell::new(money(rec.amount)),
            Cell::new(&rec.description),
        ]);
    }
    println!("{table}");
    Ok(())
}
