use std::path::PathBuf;

use crate::db;
use crate::error::Result;
use crate::settings::{default_data_dir, save_settings, Settings};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let dir = data_dir.map(PathBuf::from).unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&dir)?;
    save_settings(&Settings {
        data_dir: dir.to_string_lossy().to_string(),
    })?;

    let conn = db::get_connection(&dir.join("outlay.db"))?;
    db::init_db(&conn)?;

    println!("Initialized ledger at {}", dir.display());
    Ok(())
}
