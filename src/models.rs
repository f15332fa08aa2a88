use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{OutlayError, Result};

/// A recorded expense. Immutable once inserted; the only mutations the
/// store supports are whole-record deletion and wholesale replacement.
#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub created_at: String,
}

/// Insert-side expense, before the store assigns an id and timestamp.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

/// A row parsed out of a backup document. Ids are not carried; the store
/// renumbers sequentially on restore.
#[derive(Debug, Clone)]
pub struct RestoredExpense {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub created_at: String,
}

/// Record invariants: positive finite amount, canonical YYYY-MM-DD
/// calendar date, non-empty category.
fn check_fields(date: &str, category: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(OutlayError::Validation(format!(
            "amount must be a positive number, got {amount}"
        )));
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        OutlayError::Validation(format!("invalid date '{date}' (expected YYYY-MM-DD)"))
    })?;
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(OutlayError::Validation(format!(
            "date '{date}' must be written as YYYY-MM-DD"
        )));
    }
    if category.trim().is_empty() {
        return Err(OutlayError::Validation("category must not be empty".to_string()));
    }
    Ok(())
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        check_fields(&self.date, &self.category, self.amount)
    }
}

impl RestoredExpense {
    pub fn validate(&self) -> Result<()> {
        check_fields(&self.date, &self.category, self.amount)
    }
}
