//! Interactive editing session.
//!
//! Runs the orchestrator loop the mobile form drives with taps: append
//! and edit rows, toggle delete mode, undo, and play both sides of the
//! device-authorization simulation. Changes autosave after the debounce
//! pause; `quit` flushes whatever is still pending.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::SqliteGateway;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::state::Session;
use crate::ui::messages::{info, success, warning};
use crate::utils::{date, photo};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shell { date: date_arg } = cmd {
        let d = date::resolve_date(date_arg.as_ref()).map_err(AppError::InvalidDate)?;

        let gateway = SqliteGateway::open(&cfg.database)?;
        let mut session = Session::open(gateway, d, Instant::now())?
            .with_autosave(cfg.auto_save, Duration::from_millis(cfg.save_debounce_ms))
            .with_notifications(cfg.notifications)
            .with_device_name(cfg.device_name.clone());

        // greet by first name when an operator is configured
        let title = cfg
            .operator_name
            .split_whitespace()
            .next()
            .unwrap_or("Equipment")
            .to_string();
        info(format!("{title}: editing {d}, type 'help' for commands"));

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            session.tick(Instant::now());
            print!("equiptrack> ");
            io::stdout().flush().ok();

            let Some(line) = lines.next() else { break };
            let line = line?;
            session.tick(Instant::now());

            let mut parts = line.split_whitespace();
            let Some(command) = parts.next() else {
                continue;
            };
            let args: Vec<&str> = parts.collect();

            let outcome = run_command(&mut session, command, &args);
            match outcome {
                Ok(true) => break,
                Ok(false) => {}
                Err(AppError::LockedDevice) => {
                    warning("Editing is locked on this device.");
                    info("Type 'request' to ask the developer device for authorization.");
                }
                Err(e) => warning(format!("{e}")),
            }
        }

        session.flush()?;
        success("Session saved.");
    }

    Ok(())
}

/// Execute one shell command. `Ok(true)` ends the session.
fn run_command(
    session: &mut Session<SqliteGateway>,
    command: &str,
    args: &[&str],
) -> AppResult<bool> {
    let now = Instant::now();

    match command {
        "quit" | "exit" | "q" => return Ok(true),

        "help" | "?" => print_help(),

        "show" => print_day(session, args.first() == Some(&"all")),

        "date" => {
            let arg = args
                .first()
                .ok_or_else(|| AppError::InvalidDate("missing date argument".into()))?;
            let d = date::parse_date(arg)
                .ok_or_else(|| AppError::InvalidDate((*arg).to_string()))?;
            session.set_date(d, now);
            info(format!("Now editing {d}"));
        }

        "cat" => {
            let arg = args
                .first()
                .ok_or_else(|| AppError::InvalidCategory("missing category code".into()))?;
            let category = Category::from_code(arg)
                .ok_or_else(|| AppError::InvalidCategory((*arg).to_string()))?;
            session.set_active_category(category);
            info(format!("Active category: {category}"));
        }

        "add" => {
            let id = session.add_item(now)?;
            success(format!(
                "Added row {} to {}",
                id,
                session.active_category()
            ));
        }

        "set" => {
            let id = args
                .first()
                .ok_or_else(|| AppError::Other("usage: set <id> contract=.. serial=..".into()))?;
            let document = session.current_document();
            let (category, found) = document
                .find_item(id)
                .ok_or_else(|| AppError::UnknownItem((*id).to_string()))?;
            let mut item = found.clone();

            for assignment in &args[1..] {
                match assignment.split_once('=') {
                    Some(("contract", value)) => item.contract = value.to_string(),
                    Some(("serial", value)) => item.serial = value.to_string(),
                    _ => {
                        return Err(AppError::Other(format!(
                            "unknown assignment '{assignment}' (use contract=.. or serial=..)"
                        )));
                    }
                }
            }
            session.update_item(category, item, now)?;
            success(format!("Updated {id}"));
        }

        "photo" => {
            let (id, file) = match args {
                [id, file] => (*id, *file),
                _ => return Err(AppError::Other("usage: photo <id> <file>".into())),
            };
            let document = session.current_document();
            let (category, found) = document
                .find_item(id)
                .ok_or_else(|| AppError::UnknownItem(id.to_string()))?;
            let mut item = found.clone();
            item.photos.push(photo::encode_photo(file)?);
            session.update_item(category, item, now)?;
            success(format!("Photo attached to {id}"));
        }

        "delmode" => {
            session.toggle_delete_mode()?;
            if session.delete_mode() {
                info("Delete mode ON: 'select <id>' then 'delete' to confirm.");
            } else {
                info("Delete mode OFF.");
            }
        }

        "select" => {
            if !session.delete_mode() {
                return Err(AppError::Other("enable delete mode first (delmode)".into()));
            }
            let id = args
                .first()
                .ok_or_else(|| AppError::Other("usage: select <id>".into()))?;
            let document = session.current_document();
            let (category, _) = document
                .find_item(id)
                .ok_or_else(|| AppError::UnknownItem((*id).to_string()))?;
            session.toggle_selected(category, id);
            info(format!("{} item(s) selected", session.selected_count()));
        }

        "delete" => {
            let removed = session.delete_selected(now)?;
            if removed == 0 {
                info("Nothing selected.");
            } else {
                success(format!("Deleted {removed} item(s)."));
            }
        }

        "undo" => {
            if session.undo(now)? {
                success("Undone.");
            } else {
                info("Nothing to undo.");
            }
        }

        "lock" => {
            session.lock_device();
            warning("Device locked (receiver mode).");
        }

        "request" => {
            if session.request_unlock(now) {
                info(format!(
                    "Authorization request sent for device {}, waiting up to 10s",
                    session.device_name()
                ));
                info("Answer with 'allow' or 'deny' (simulated developer device).");
            } else {
                info("No request to send from the current state.");
            }
        }

        "allow" => {
            if session.allow_request() {
                success("Access allowed temporarily.");
            } else {
                info("No pending request.");
            }
        }

        "deny" => {
            if session.deny_request() {
                info("Request denied; device stays locked.");
            } else {
                info("No pending request.");
            }
        }

        "notif" => {
            if session.notifications().is_empty() {
                info("No notifications.");
            }
            for n in session.notifications() {
                println!(
                    "[{}] {}: {}",
                    n.timestamp.format("%H:%M:%S"),
                    n.title,
                    n.message
                );
            }
        }

        "save" => {
            session.flush()?;
            success("Saved.");
        }

        other => warning(format!("Unknown command '{other}', type 'help'.")),
    }

    Ok(false)
}

fn print_day(session: &Session<SqliteGateway>, show_all: bool) {
    let document = session.current_document();
    println!("Equipment for {}:", session.current_date());
    for (category, items) in document.iter() {
        let visible: Vec<_> = items
            .iter()
            .filter(|item| show_all || item.is_active())
            .collect();
        if visible.is_empty() {
            continue;
        }
        let marker = if category == session.active_category() {
            "*"
        } else {
            " "
        };
        println!("{marker} {category}:");
        for item in visible {
            println!(
                "    {}  contract={}  serial={}  photos={}",
                item.id,
                if item.contract.is_empty() { "-" } else { &item.contract },
                if item.serial.is_empty() { "-" } else { &item.serial },
                item.photos.len()
            );
        }
    }
}

fn print_help() {
    println!(
        "\
Commands:
  show [all]          list the day's items (all includes blank rows)
  date <YYYY-MM-DD>   switch the day under edit
  cat <code>          switch active category (box, sound, remote, camera, chip)
  add                 append a blank row to the active category
  set <id> k=v ...    edit contract=/serial= of a row
  photo <id> <file>   attach a photo file to a row
  delmode             toggle delete mode
  select <id>         toggle an item in the delete selection
  delete              delete the selected items
  undo                restore the previous state (up to 10 steps)
  lock                simulate receiver mode (editing locked)
  request             ask the developer device for authorization (10s)
  allow / deny        answer the pending request
  notif               show notifications
  save                write to disk now
  quit                save and exit"
    );
}
