use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::{SqliteGateway, StoreGateway};
use crate::db::log::AuditLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::DayDocument;
use crate::query::{Scope, aggregate};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        month,
        all,
        ids,
        audit,
    } = cmd
    {
        if *audit {
            let mut pool = DbPool::new(&cfg.database)?;
            return AuditLogic::print(&mut pool);
        }

        let d = date::resolve_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;
        let scope = if *month {
            Scope::MonthToDate(d)
        } else {
            Scope::Day(d)
        };

        let mut gateway = SqliteGateway::open(&cfg.database)?;
        let store = gateway.load()?.unwrap_or_default();
        let document = aggregate(&store, scope);

        info(format!("Equipment for {}", scope.label()));
        println!();
        print_document(&document, *all, *ids);
    }

    Ok(())
}

/// Render one document as per-category tables. Untouched blank rows are
/// hidden unless `show_all` is set.
fn print_document(document: &DayDocument, show_all: bool, show_ids: bool) {
    let mut printed = 0;

    for (category, items) in document.iter() {
        let visible: Vec<_> = items
            .iter()
            .filter(|item| show_all || item.is_active())
            .collect();
        if visible.is_empty() {
            continue;
        }
        printed += visible.len();

        println!("── {} ({})", category, visible.len());
        let mut table = if show_ids {
            Table::new(vec!["id", "contract", "serial", "photos"])
        } else {
            Table::new(vec!["contract", "serial", "photos"])
        };
        for item in visible {
            let mut row = Vec::new();
            if show_ids {
                row.push(item.id.clone());
            }
            row.push(dash_if_empty(&item.contract));
            row.push(dash_if_empty(&item.serial));
            row.push(item.photos.len().to_string());
            table.add_row(row);
        }
        print!("{}", table.render());
        println!();
    }

    if printed == 0 {
        println!("No equipment recorded.");
    }
}

fn dash_if_empty(field: &str) -> String {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        trimmed.to_string()
    }
}
