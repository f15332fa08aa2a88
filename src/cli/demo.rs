use colored::Colorize;

use crate::classifier::classify;
use crate::db::{insert_expense, open_store};
use crate::error::Result;
use crate::models::NewExpense;

// (date, amount, description, category). An empty category means "let the
// keyword table decide", which is how the entry form behaves.
const SAMPLES: &[(&str, f64, &str, &str)] = &[
    ("2024-01-01", 950.00, "January rent", ""),
    ("2024-01-06", 84.30, "Weekly grocery run", ""),
    ("2024-01-08", 15.49, "Netflix subscription", ""),
    ("2024-01-12", 45.00, "Fuel for the commute", ""),
    ("2024-01-19", 62.75, "Anniversary restaurant dinner", ""),
    ("2024-01-28", 58.20, "Utility bill", ""),
    ("2024-02-01", 950.00, "February rent", ""),
    ("2024-02-03", 91.15, "Weekly grocery run", ""),
    ("2024-02-08", 15.49, "Netflix subscription", ""),
    ("2024-02-10", 18.60, "Uber to the airport", ""),
    ("2024-02-14", 32.00, "Movie night", ""),
    ("2024-02-17", 24.99, "Pharmacy refill", "Healthcare"),
    ("2024-02-27", 61.40, "Utility bill", ""),
    ("2024-03-01", 950.00, "March rent", ""),
    ("2024-03-02", 78.40, "Weekly grocery run", ""),
    ("2024-03-08", 15.49, "Netflix subscription", ""),
    ("2024-03-11", 52.30, "Fuel for the commute", ""),
    ("2024-03-15", 1450.00, "Annual auto insurance premium", "Transportation"),
    ("2024-03-21", 41.20, "Lunch at the corner restaurant", ""),
    ("2024-03-24", 89.99, "New headphones", "Shopping"),
    ("2024-03-29", 57.75, "Utility bill", ""),
    ("2024-04-01", 950.00, "April rent", ""),
    ("2024-04-06", 88.00, "Weekly grocery run", ""),
    ("2024-04-08", 15.49, "Netflix subscription", ""),
    ("2024-04-13", 22.35, "Uber across town", ""),
    ("2024-04-20", 55.40, "Restaurant takeout", ""),
    ("2024-04-27", 59.10, "Utility bill", ""),
];

pub fn run() -> Result<()> {
    let conn = open_store()?;

    let mut count = 0usize;
    for &(date, amount, description, category) in SAMPLES {
        let category = if category.is_empty() {
            classify(description).to_string()
        } else {
            category.to_string()
        };
        insert_expense(
            &conn,
            &NewExpense {
                date: date.to_string(),
                category,
                amount,
                description: description.to_string(),
            },
        )?;
        count += 1;
    }

    println!("{}", format!("Loaded {count} sample expenses.").green());
    println!("Try `outlay report monthly`, `outlay report forecast`, or `outlay report anomalies`.");
    Ok(())
}
