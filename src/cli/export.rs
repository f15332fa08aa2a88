use std::path::PathBuf;

use crate::cli::parse_range;
use crate::db::{open_store, query_expenses};
use crate::error::Result;
use crate::settings::get_data_dir;

/// Straight column mapping of the (optionally filtered) record sequence
/// to a CSV spreadsheet.
pub fn run(from: Option<String>, to: Option<String>, output: Option<String>) -> Result<()> {
    let range = parse_range(&from, &to)?;
    let conn = open_store()?;
    let records = query_expenses(&conn, range.as_ref().map(|(f, t)| (f.as_str(), t.as_str())))?;

    let path = output.map(PathBuf::from).unwrap_or_else(|| {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        get_data_dir()
            .join("exports")
            .join(format!("expenses-{date}.csv"))
    });
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["id", "date", "category", "amount", "description", "created_at"])?;
    for rec in &records {
        writer.write_record([
            rec.id.to_string(),
            rec.date.clone(),
            rec.category.clone(),
            format!("{:.2}", rec.amount),
            rec.description.clone(),
            rec.created_at.clone(),
        ])?;
    }
    writer.flush()?;

    println!("Exported {} expenses to {}", records.len(), path.display());
    Ok(())
}
