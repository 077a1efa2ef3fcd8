//! `linestamp validate`

use crate::bot::validate_placeholder;
use anyhow::Result;

/// Print the verdict for a placeholder token
pub fn run_validate_command(placeholder: &str) -> Result<()> {
    let check = validate_placeholder(placeholder)?;

    if check.is_warning() {
        println!("Warning: {}", check.message());
    } else {
        println!("{}", check.message());
    }
    if let Some(example) = check.example() {
        println!("Example: {}", example);
    }
    Ok(())
}
