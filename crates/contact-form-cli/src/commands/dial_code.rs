use anyhow::{bail, Result};
use colored::Colorize;
use contact_form_validation::dial_code;

pub fn execute(country: &str) -> Result<()> {
    match dial_code(country.trim()) {
        Some(code) => {
            println!("{} {}", country.trim().to_uppercase().cyan(), code.bold());
            Ok(())
        }
        None => bail!("No dial code known for country: {}", country),
    }
}
