use crate::db::{count_expenses, get_connection, init_db, query_expenses};
use crate::error::Result;
use crate::fmt::money;
use crate::settings::get_data_dir;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let db_path = data_dir.join("outlay.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `outlay init` to set up.");
        return Ok(());
    }

    let conn = get_connection(&db_path)?;
    init_db(&conn)?;
    let count = count_expenses(&conn)?;

    println!();
    println!("Expenses:   {count}");
    if count > 0 {
        let records = query_expenses(&conn, None)?;
        if let (Some(first), Some(last)) = (records.first(), records.last()) {
            println!("Span:       {} to {}", first.date, last.date);
        }
        let total: f64 = records.iter().map(|r| r.amount).sum();
        println!("Total:      {}", money(total));
    }
    Ok(())
}
