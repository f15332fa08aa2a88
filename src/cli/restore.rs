use colored::Colorize;

use crate::backup::decode;
use crate::cli::confirm;
use crate::db::{bulk_replace, open_store};
use crate::error::Result;

/// Destructive: replaces the entire ledger, no merge. The document is
/// parsed in full before the store is touched, so a parse failure leaves
/// the prior contents in place.
pub fn run(file: &str, yes: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)?;
    let rows = decode(&text)?;

    if !yes {
        let prompt = format!(
            "Replace the entire ledger with {} record(s) from {file}?",
            rows.len()
        );
        if !confirm(&prompt)? {
            println!("Restore cancelled.");
            return Ok(());
        }
    }

    let mut conn = open_store()?;
    let count = bulk_replace(&mut conn, &rows)?;
    println!("{}", format!("Restored {count} expenses.").green());
    Ok(())
}
