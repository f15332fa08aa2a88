//! Columnar JSON backup of the full ledger, and restore parsing.
//!
//! The document holds one array per field, keyed by field name. Decoding
//! happens entirely before the store is touched: a malformed document
//! surfaces as a RestoreParse error and leaves the ledger as it was.

use serde::{Deserialize, Serialize};

use crate::error::{OutlayError, Result};
use crate::models::{Expense, RestoredExpense};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BackupDocument {
    pub id: Vec<i64>,
    pub date: Vec<String>,
    pub category: Vec<String>,
    pub amount: Vec<f64>,
    pub description: Vec<String>,
    pub created_at: Vec<String>,
}

pub fn encode(records: &[Expense]) -> Result<String> {
    let mut doc = BackupDocument::default();
    for rec in records {
        doc.id.push(rec.id);
        doc.date.push(rec.date.clone());
        doc.category.push(rec.category.clone());
        doc.amount.push(rec.amount);
        doc.description.push(rec.description.clone());
        doc.created_at.push(rec.created_at.clone());
    }
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a backup document into insert-side rows. The `id` column is
/// read but not carried: the store renumbers on restore. Every row is
/// re-validated, so a hand-edited document cannot smuggle in records the
/// entry form would reject.
pub fn decode(text: &str) -> Result<Vec<RestoredExpense>> {
    let doc: BackupDocument =
        serde_json::from_str(text).map_err(|e| OutlayError::RestoreParse(e.to_string()))?;

    let n = doc.date.len();
    if doc.category.len() != n
        || doc.amount.len() != n
        || doc.description.len() != n
        || doc.created_at.len() != n
    {
        return Err(OutlayError::RestoreParse(
            "field arrays have mismatched lengths".to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let row = RestoredExpense {
            date: doc.date[i].clone(),
            category: doc.category[i].clone(),
            amount: doc.amount[i],
            description: doc.description[i].clone(),
            created_at: doc.created_at[i].clone(),
        };
        row.validate()
            .map_err(|e| OutlayError::RestoreParse(format!("record {}: {e}", i + 1)))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Expense> {
        vec![
            Expense {
                id: 4,
                date: "2024-01-15".to_string(),
                category: "Food & Groceries".to_string(),
                amount: 54.20,
                description: "weekly grocery run".to_string(),
                created_at: "2024-01-15 18:02:11".to_string(),
            },
            Expense {
                id: 9,
                date: "2024-02-01".to_string(),
                category: "Housing".to_string(),
                amount: 950.0,
                description: "rent".to_string(),
                created_at: "2024-02-01 09:00:00".to_string(),
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let records = sample_records();
        let rows = decode(&encode(&records).unwrap()).unwrap();
        assert_eq!(rows.len(), 2);
        for (row, rec) in rows.iter().zip(&records) {
            assert_eq!(row.date, rec.date);
            assert_eq!(row.category, rec.category);
            assert!((row.amount - rec.amount).abs() < 1e-9);
            assert_eq!(row.description, rec.description);
            assert_eq!(row.created_at, rec.created_at);
        }
    }

    #[test]
    fn test_not_json_is_a_parse_error() {
        assert!(matches!(
            decode("definitely not json"),
            Err(OutlayError::RestoreParse(_))
        ));
    }

    #[test]
    fn test_missing_column_is_a_parse_error() {
        let text = r#"{"date": ["2024-01-15"], "amount": [10.0]}"#;
        assert!(matches!(decode(text), Err(OutlayError::RestoreParse(_))));
    }

    #[test]
    fn test_mismatched_lengths_are_a_parse_error() {
        let text = r#"{
            "id": [1, 2],
            "date": ["2024-01-15", "2024-01-16"],
            "category": ["Other"],
            "amount": [10.0, 11.0],
            "description": ["", ""],
            "created_at": ["2024-01-15 10:00:00", "2024-01-16 10:00:00"]
        }"#;
        assert!(matches!(decode(text), Err(OutlayError::RestoreParse(_))));
    }

    #[test]
    fn test_invalid_row_is_a_parse_error() {
        let text = r#"{
            "id": [1],
            "date": ["2024-01-15"],
            "category": ["Other"],
            "amount": [-3.0],
            "description": [""],
            "created_at": ["2024-01-15 10:00:00"]
        }"#;
        match decode(text) {
            Err(OutlayError::RestoreParse(msg)) => assert!(msg.contains("record 1")),
            other => panic!("expected RestoreParse, got {other:?}"),
        }
    }
}
