use dialoguer::{theme::ColorfulTheme, Select};

use crate::domain::RecordKind;
use crate::errors::CliError;

pub enum MainChoice {
    Kind(RecordKind),
    Quit,
}

pub fn main_menu(selected: RecordKind) -> Result<MainChoice, CliError> {
    let labels = ["Line items", "Categories", "HSR stations", "Quit"];
    let default = match selected {
        RecordKind::Transaction => 0,
        RecordKind::Category => 1,
        RecordKind::HsrStation => 2,
    };
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Manage which records?")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(match choice {
        0 => MainChoice::Kind(RecordKind::Transaction),
        1 => MainChoice::Kind(RecordKind::Category),
        2 => MainChoice::Kind(RecordKind::HsrStation),
        _ => MainChoice::Quit,
    })
}

pub enum RecordAction {
    List,
    Add,
    Edit,
    Delete,
    Back,
}

pub fn record_menu(kind: RecordKind) -> Result<RecordAction, CliError> {
    let labels = ["list", "add", "edit", "delete", "back"];
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} menu", kind.title()))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => RecordAction::List,
        1 => RecordAction::Add,
        2 => RecordAction::Edit,
        3 => RecordAction::Delete,
        _ => RecordAction::Back,
    })
}
