use crate::classifier::classify;
use crate::error::Result;

pub fn run(description: &str) -> Result<()> {
    println!("{}", classify(description));
    Ok(())
}
