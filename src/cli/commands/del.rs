use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::SqliteGateway;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::state::Session;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::time::Instant;

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_arg,
        category,
        ids,
        yes,
    } = cmd
    {
        let d = date::resolve_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;
        let cat = Category::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

        if !*yes {
            let prompt = format!(
                "Delete {} item(s) from {} on {}? This action is irreversible.",
                ids.len(),
                cat,
                d
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let now = Instant::now();
        let gateway = SqliteGateway::open(&cfg.database)?;
        let mut session = Session::open(gateway, d, now)?;

        // refuse ids that do not exist on that date, instead of silently
        // deleting nothing
        let document = session.current_document();
        for id in ids {
            if !document.items(cat).iter().any(|item| &item.id == id) {
                return Err(AppError::UnknownItem(id.clone()));
            }
        }

        let id_set: BTreeSet<String> = ids.iter().cloned().collect();
        session.delete_items(cat, id_set, now)?;
        session.flush()?;

        let gateway = SqliteGateway::open(&cfg.database)?;
        let _ = log::audit(
            gateway.conn(),
            "del",
            cat.code(),
            &format!("Deleted {} item(s) on {}", ids.len(), d),
        );

        success(format!("Deleted {} item(s) from {} on {}", ids.len(), cat, d));
    }

    Ok(())
}
