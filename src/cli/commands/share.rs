use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::{SqliteGateway, StoreGateway};
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::export::share::{share_url, summary};
use crate::query::{Scope, aggregate};
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Share {
        via,
        date: date_arg,
        month,
    } = cmd
    {
        let d = date::resolve_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;
        let scope = if *month {
            Scope::MonthToDate(d)
        } else {
            Scope::Day(d)
        };

        let mut gateway = SqliteGateway::open(&cfg.database)?;
        let store = gateway.load()?.unwrap_or_default();
        let document = aggregate(&store, scope);

        let text = summary(&document, scope);
        let subject = format!("Equipment report - {}", scope.label());

        println!("{text}");
        info(format!(
            "Open this link to share via {}:",
            via.as_str()
        ));
        println!("{}", share_url(via, &subject, &text));

        let _ = log::audit(
            gateway.conn(),
            "share",
            via.as_str(),
            &format!("Shared summary for {}", scope.label()),
        );
    }

    Ok(())
}
