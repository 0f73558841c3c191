//! Interactive management shell driving the controller.

mod forms;
mod menus;
mod output;

use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use tracing::info;

use crate::client::{RecordStore, RestClient};
use crate::config::ConfigManager;
use crate::controller::{Controller, Draft, Notice};
use crate::domain::common::{Displayable, Identifiable};
use crate::domain::{Record, RecordKind};
use crate::errors::CliError;

use menus::{MainChoice, RecordAction};

pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::new()?.load()?;
    info!(base_url = %config.base_url, "starting management shell");

    let mut controller = Controller::new(RestClient::from_config(&config));
    output::banner(&config.base_url);
    output::notice(&controller.bootstrap());

    loop {
        match menus::main_menu(controller.selected())? {
            MainChoice::Quit => return Ok(()),
            MainChoice::Kind(kind) => {
                output::notice(&controller.select_kind(kind));
                record_loop(&mut controller)?;
            }
        }
    }
}

fn record_loop<S: RecordStore>(controller: &mut Controller<S>) -> Result<(), CliError> {
    loop {
        match menus::record_menu(controller.selected())? {
            RecordAction::Back => return Ok(()),
            RecordAction::List => {
                output::notice(&controller.refresh());
                output::listing(controller);
            }
            RecordAction::Add => {
                controller.begin_add();
                edit_draft(controller)?;
            }
            RecordAction::Edit => {
                let Some(record) = pick_record(controller)? else {
                    continue;
                };
                controller.begin_edit(record);
                edit_draft(controller)?;
            }
            RecordAction::Delete => delete_flow(controller)?,
        }
    }
}

fn edit_draft<S: RecordStore>(controller: &mut Controller<S>) -> Result<(), CliError> {
    loop {
        match controller.draft_mut() {
            Some(Draft::Category(category)) => forms::fill_category(category)?,
            Some(Draft::Transaction(transaction)) => {
                forms::fill_transaction_fields(transaction)?
            }
            Some(Draft::HsrStation(station)) => forms::fill_station(station)?,
            None => return Ok(()),
        }
        if controller.draft().is_some_and(|d| d.kind() == RecordKind::Transaction) {
            pick_category(controller)?;
        }

        output::notice(&controller.save());
        if !controller.is_editing() {
            return Ok(());
        }
        let retry = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Keep editing this record?")
            .default(true)
            .interact()?;
        if !retry {
            controller.cancel_edit();
            return Ok(());
        }
    }
}

/// Type-ahead over the loaded categories: filter by substring, pick one,
/// write its name into the draft. Empty search text keeps the current value.
fn pick_category<S: RecordStore>(controller: &mut Controller<S>) -> Result<(), CliError> {
    loop {
        let text = forms::search_text()?;
        if text.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = controller
            .search_categories(&text)
            .iter()
            .map(|category| category.name.clone())
            .collect();
        if names.is_empty() {
            output::notice(&Notice::error("no category matches that search"));
            continue;
        }
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Matching categories")
            .items(&names)
            .default(0)
            .interact_opt()?;
        if let Some(index) = picked {
            controller.choose_category(&names[index]);
            return Ok(());
        }
    }
}

fn delete_flow<S: RecordStore>(controller: &mut Controller<S>) -> Result<(), CliError> {
    let Some(record) = pick_record(controller)? else {
        return Ok(());
    };
    let id = record.id().unwrap_or_default().to_string();
    if let Some(rejected) = controller.request_delete(&id) {
        output::notice(&rejected);
        return Ok(());
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete {}?", record.display_label()))
        .default(false)
        .interact()?;
    if confirmed {
        output::notice(&controller.confirm_delete());
    } else {
        controller.cancel_delete();
    }
    Ok(())
}

fn pick_record<S: RecordStore>(controller: &Controller<S>) -> Result<Option<Record>, CliError> {
    let records = controller.selected_records();
    if records.is_empty() {
        output::notice(&Notice::error(format!(
            "no {} loaded",
            controller.selected()
        )));
        return Ok(None);
    }
    let labels: Vec<String> = records.iter().map(Displayable::display_label).collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Which of the {}?", controller.selected()))
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(picked.map(|index| records[index].clone()))
}
