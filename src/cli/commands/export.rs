use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::{SqliteGateway, StoreGateway};
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::query::Scope;
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date: date_arg,
        month,
        force,
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

        let file = expand_tilde(file).to_string_lossy().to_string();
        ExportLogic::export(&store, scope, format.clone(), &file, *force)?;

        let _ = log::audit(
            gateway.conn(),
            "export",
            format.as_str(),
            &format!("Exported {} to {}", scope.label(), file),
        );
    }

    Ok(())
}
