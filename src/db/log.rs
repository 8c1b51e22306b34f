//! Internal audit log: one row per notable operation, plus the colored
//! printer behind `list --audit`.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use chrono::Utc;
use rusqlite::{Connection, Result, params};

/// Append an audit row. Failures are the caller's business; most call
/// sites log-and-continue.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO audit_log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![&now, operation, target, message])?;
    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "set" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "export" | "share" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        op if op.starts_with("auth_") => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct AuditLogic;

impl AuditLogic {
    /// Print the audit log, oldest first, with the operation colored by
    /// kind and columns aligned on the plain (ANSI-stripped) widths.
    pub fn print(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM audit_log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Audit log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap_or(8)
            .min(60);

        println!("📜 Audit log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);
            let mut op_col = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                op_col.push_str(&format!(" ({target})"));
            }
            let pad = " ".repeat(op_w.saturating_sub(strip_ansi(&op_col).len()));

            println!("{id:>id_w$}: {date} | {op_col}{pad} => {message}");
        }

        Ok(())
    }
}
