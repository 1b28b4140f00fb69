use crate::values::FormValues;
use anyhow::Result;
use colored::Colorize;
use contact_form_validation::{validate, FieldId};
use std::path::Path;

/// Validate every tracked field and report all errors at once
///
/// Returns the number of failing fields.
pub fn execute(file: &Path) -> Result<usize> {
    let values = FormValues::load(file)?;

    println!("{}", "Checking contact form values...".green().bold());
    println!();

    let mut errors = 0;
    for field in FieldId::TRACKED {
        match validate(field, values.get(field)) {
            Some(message) => {
                errors += 1;
                println!("  {} {}: {}", "✗".red(), field.as_str().cyan(), message.red());
            }
            None => println!("  {} {}", "✓".green(), field.as_str().cyan()),
        }
    }

    println!();
    if errors == 0 {
        println!("{}", "All fields are valid".green().bold());
    } else {
        println!("{}", format!("{} field(s) need attention", errors).yellow().bold());
    }

    Ok(errors)
}
