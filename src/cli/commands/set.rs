use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::SqliteGateway;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::state::Session;
use crate::ui::messages::success;
use crate::utils::{date, photo};
use std::time::Instant;

/// Edit the fields of an already recorded item, located by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date: date_arg,
        id,
        contract,
        serial,
        photos,
        drop_photo,
    } = cmd
    {
        let d = date::resolve_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;

        let now = Instant::now();
        let gateway = SqliteGateway::open(&cfg.database)?;
        let mut session = Session::open(gateway, d, now)?;

        //
        // Locate the item within the day (linear scan over categories)
        //
        let document = session.current_document();
        let (category, found) = document
            .find_item(id)
            .ok_or_else(|| AppError::UnknownItem(id.clone()))?;
        let mut item = found.clone();

        if let Some(contract) = contract {
            item.contract = contract.clone();
        }
        if let Some(serial) = serial {
            item.serial = serial.clone();
        }
        for file in photos {
            item.photos.push(photo::encode_photo(file)?);
        }
        if let Some(index) = drop_photo {
            if *index >= item.photos.len() {
                return Err(AppError::InvalidPhotoIndex(*index));
            }
            item.photos.remove(*index);
        }

        session.update_item(category, item, now)?;
        session.flush()?;

        let gateway = SqliteGateway::open(&cfg.database)?;
        let _ = log::audit(
            gateway.conn(),
            "set",
            category.code(),
            &format!("Updated item {} on {}", id, d),
        );

        success(format!("Updated {} item {} on {}", category, id, d));
    }

    Ok(())
}
