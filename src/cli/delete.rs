use crate::db::{delete_expense, open_store};
use crate::error::Result;

pub fn run(id: i64) -> Result<()> {
    let conn = open_store()?;
    delete_expense(&conn, id)?;
    println!("Deleted expense #{id}");
    Ok(())
}
