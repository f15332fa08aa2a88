use colored::Colorize;

use crate::classifier::{classify, CATEGORIES};
use crate::db::{insert_expense, open_store};
use crate::error::{OutlayError, Result};
use crate::fmt::money;
use crate::models::NewExpense;

pub fn run(
    amount: f64,
    date: Option<String>,
    category: Option<String>,
    description: String,
) -> Result<()> {
    let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let category = match category {
        Some(c) => {
            if !CATEGORIES.contains(&c.as_str()) {
                return Err(OutlayError::Validation(format!(
                    "unknown category '{c}' (expected one of: {})",
                    CATEGORIES.join(", ")
                )));
            }
            c
        }
        None => classify(&description).to_string(),
    };

    let new = NewExpense {
        date,
        category,
        amount,
        description,
    };
    let conn = open_store()?;
    let id = insert_expense(&conn, &new)?;

    println!(
        "{}",
        format!(
            "Recorded expense #{id}: {} ({}) on {}",
            money(new.amount),
            new.category,
            new.date
        )
        .green()
    );
    Ok(())
}
