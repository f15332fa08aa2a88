use std::path::PathBuf;

use crate::backup::encode;
use crate::db::{open_store, query_expenses};
use crate::error::Result;
use crate::settings::get_data_dir;

pub fn run(output: Option<String>) -> Result<()> {
    let conn = open_store()?;
    let records = query_expenses(&conn, None)?;
    let document = encode(&records)?;

    let path = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let backups_dir = get_data_dir().join("backups");
            std::fs::create_dir_all(&backups_dir)?;
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            backups_dir.join(format!("outlay-{stamp}.json"))
        }
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, document)?;

    println!("Backup of {} expenses saved to {}", records.len(), path.display());
    Ok(())
}
