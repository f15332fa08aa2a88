use std::path::Path;

use rusqlite::Connection;

use crate::error::{OutlayError, Result};
use crate::models::{Expense, NewExpense, RestoredExpense};
use crate::settings::get_data_dir;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    category TEXT NOT NULL,
    amount REAL NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

/// Create the schema if it is absent. Safe to run on every open.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Open the ledger in the active data directory and ensure the schema
/// exists. Every command goes through here; connections are scoped to a
/// single operation and dropped on exit.
pub fn open_store() -> Result<Connection> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let conn = get_connection(&data_dir.join("outlay.db"))?;
    init_db(&conn)?;
    Ok(conn)
}

pub fn insert_expense(conn: &Connection, new: &NewExpense) -> Result<i64> {
    new.validate()?;
    conn.execute(
        "INSERT INTO expenses (date, category, amount, description) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![new.date, new.category, new.amount, new.description],
    )?;
    Ok(conn.last_insert_rowid())
}

fn row_to_expense(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        description: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Fetch expenses ordered by (date, id), optionally bounded to an
/// inclusive date range. Bounds are always bound parameters.
pub fn query_expenses(conn: &Connection, range: Option<(&str, &str)>) -> Result<Vec<Expense>> {
    let rows = match range {
        Some((from, to)) => {
            let mut stmt = conn.prepare(
                "SELECT id, date, category, amount, description, created_at FROM expenses \
                 WHERE date BETWEEN ?1 AND ?2 ORDER BY date, id",
            )?;
            let rows = stmt.query_map(rusqlite::params![from, to], row_to_expense)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, date, category, amount, description, created_at FROM expenses \
                 ORDER BY date, id",
            )?;
            let rows = stmt.query_map([], row_to_expense)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        }
    };
    Ok(rows)
}

pub fn count_expenses(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM expenses", [], |r| r.get(0))?)
}

pub fn delete_expense(conn: &Connection, id: i64) -> Result<()> {
    let affected = conn.execute("DELETE FROM expenses WHERE id = ?1", rusqlite::params![id])?;
    if affected == 0 {
        return Err(OutlayError::NotFound(id));
    }
    Ok(())
}

/// Replace the entire ledger with `rows` in a single transaction. Ids are
/// renumbered sequentially from 1 in input order; `created_at` stamps are
/// carried through. Returns the number of rows inserted.
pub fn bulk_replace(conn: &mut Connection, rows: &[RestoredExpense]) -> Result<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM expenses", [])?;
    tx.execute("DELETE FROM sqlite_sequence WHERE name = 'expenses'", [])?;
    for row in rows {
        tx.execute(
            "INSERT INTO expenses (date, category, amount, description, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.date, row.category, row.amount, row.description, row.created_at],
        )?;
    }
    tx.commit()?;
    Ok(rows.len())
}
