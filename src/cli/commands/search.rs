use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::{SqliteGateway, StoreGateway};
use crate::errors::AppResult;
use crate::query::{MAX_RESULTS, MIN_QUERY_LEN, search};
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query } = cmd {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            warning(format!(
                "Query too short: type at least {MIN_QUERY_LEN} characters."
            ));
            return Ok(());
        }

        let mut gateway = SqliteGateway::open(&cfg.database)?;
        let store = gateway.load()?.unwrap_or_default();
        let hits = search(&store, query);

        if hits.is_empty() {
            info("No results found.");
            return Ok(());
        }

        let mut table = Table::new(vec!["date", "category", "contract", "serial"]);
        for hit in &hits {
            table.add_row(vec![
                hit.date.format("%Y-%m-%d").to_string(),
                hit.category.label().to_string(),
                hit.item.contract.clone(),
                hit.item.serial.clone(),
            ]);
        }
        print!("{}", table.render());

        if hits.len() == MAX_RESULTS {
            warning(format!("Showing the first {MAX_RESULTS} matches only."));
        }
    }

    Ok(())
}
