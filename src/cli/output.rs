//! Listing tables and the notice banner.

use colored::Colorize;

use crate::client::RecordStore;
use crate::controller::{Controller, Notice, NoticeLevel};
use crate::domain::common::{Displayable, Identifiable};

pub fn banner(base_url: &str) {
    println!("{}", "Carbon Admin".bold().cyan());
    println!("backend: {}", base_url.dimmed());
}

pub fn notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => println!("{}", notice.message.green()),
        NoticeLevel::Error => eprintln!("{}", notice.message.red().bold()),
    }
}

pub fn listing<S: RecordStore>(controller: &Controller<S>) {
    let records = controller.selected_records();
    println!("{}", controller.selected().title().bold());
    if records.is_empty() {
        println!("{}", "(no records loaded)".dimmed());
        return;
    }
    for (index, record) in records.iter().enumerate() {
        let id = record.id().unwrap_or("unsaved");
        println!(
            "{:>3}. {}  {}",
            index + 1,
            record.display_label(),
            format!("[{id}]").dimmed()
        );
    }
}
