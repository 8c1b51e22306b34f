use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::SqliteGateway;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::state::Session;
use crate::ui::messages::success;
use crate::utils::{date, photo};
use std::time::Instant;

/// Record one equipment item for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        category,
        contract,
        serial,
        photos,
    } = cmd
    {
        //
        // 1. Parse date (defaults to today) and category
        //
        let d = date::resolve_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;
        let cat = Category::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

        //
        // 2. Encode photo attachments before touching the store
        //
        let mut blobs = Vec::new();
        for file in photos {
            blobs.push(photo::encode_photo(file)?);
        }

        //
        // 3. Open the session on the target date and append the item
        //
        let now = Instant::now();
        let gateway = SqliteGateway::open(&cfg.database)?;
        let mut session = Session::open(gateway, d, now)?
            .with_autosave(cfg.auto_save, std::time::Duration::from_millis(cfg.save_debounce_ms));
        session.set_active_category(cat);

        let id = session.add_item(now)?;
        let mut item = session
            .current_document()
            .items(cat)
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| AppError::UnknownItem(id.clone()))?;
        item.contract = contract.clone().unwrap_or_default();
        item.serial = serial.clone().unwrap_or_default();
        item.photos = blobs;
        session.update_item(cat, item, now)?;

        session.flush()?;

        //
        // 4. Audit (best effort)
        //
        let gateway = SqliteGateway::open(&cfg.database)?;
        let _ = log::audit(
            gateway.conn(),
            "add",
            cat.code(),
            &format!("Recorded item {} on {}", id, d),
        );

        success(format!("Recorded {} item for {} (id {})", cat, d, id));
    }

    Ok(())
}
