use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::{SqliteGateway, StoreGateway};
use crate::db::log;
use crate::errors::AppResult;
use crate::models::Inventory;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

/// Wipe every recorded day. The confirmation deliberately spells out that
/// there is no way back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning("⚠️  DANGER ZONE ⚠️");
            warning("This will permanently delete ALL recorded equipment data.");
            print!("Type 'yes' to continue: ");
            let _ = io::stdout().flush();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if answer.trim().to_lowercase() != "yes" {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut gateway = SqliteGateway::open(&cfg.database)?;
        gateway.save(&Inventory::new())?;

        let _ = log::audit(gateway.conn(), "clear", "", "All data deleted");

        success("All recorded data has been deleted.");
    }

    Ok(())
}
