//! Field prompts for the add/edit forms.

use dialoguer::{theme::ColorfulTheme, Input};

use crate::domain::{Category, HsrStation, Transaction};
use crate::errors::CliError;

pub fn fill_category(category: &mut Category) -> Result<(), CliError> {
    category.name = text("Name", &category.name)?;
    category.parent = text("Parent category", &category.parent)?;
    Ok(())
}

/// Fills every transaction field except `category`, which goes through the
/// type-ahead picker so it always names a loaded category.
pub fn fill_transaction_fields(transaction: &mut Transaction) -> Result<(), CliError> {
    transaction.name = text("Name", &transaction.name)?;
    transaction.unit = text("Unit", &transaction.unit)?;
    transaction.coefficient = number("Emission coefficient", transaction.coefficient)?;
    transaction.source = text("Data source", &transaction.source)?;
    let source_name = text(
        "Source name (optional)",
        transaction.source_name.as_deref().unwrap_or(""),
    )?;
    transaction.source_name = if source_name.is_empty() {
        None
    } else {
        Some(source_name)
    };
    Ok(())
}

pub fn fill_station(station: &mut HsrStation) -> Result<(), CliError> {
    station.origin = text("Origin station", &station.origin)?;
    station.destination = text("Destination station", &station.destination)?;
    station.carbon_footprint = number("Carbon footprint (kgCO2e)", station.carbon_footprint)?;
    Ok(())
}

pub fn search_text() -> Result<String, CliError> {
    text("Category search (empty keeps the current value)", "")
}

fn text(prompt: &str, initial: &str) -> Result<String, CliError> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn number(prompt: &str, initial: f64) -> Result<f64, CliError> {
    let value = Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial.to_string())
        .interact_text()?;
    Ok(value)
}
