//! Persistence gateway: load/save the whole inventory store as a single
//! JSON payload row.

use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Inventory;
use crate::ui::messages::warning;

/// Row key of the primary payload in the `inventory` table.
const ROOT_KEY: &str = "root";
/// Key pre-SQLite app versions used in the flat key-value store.
const LEGACY_KEY: &str = "equipmentData";

/// Contract between the state core and durable storage.
pub trait StoreGateway {
    /// The persisted store, or `None` when nothing usable was saved.
    fn load(&mut self) -> AppResult<Option<Inventory>>;

    /// Idempotent overwrite of the single persisted root value.
    fn save(&mut self, store: &Inventory) -> AppResult<()>;
}

pub struct SqliteGateway {
    pool: DbPool,
}

impl SqliteGateway {
    /// Open (and initialize, if needed) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    /// Fall back to the legacy flat key-value snapshot. A readable legacy
    /// payload is migrated into the primary row on the spot.
    fn load_legacy(&mut self) -> AppResult<Option<Inventory>> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [LEGACY_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str::<Inventory>(&raw) {
            Ok(store) => {
                self.save(&store)?;
                Ok(Some(store))
            }
            Err(e) => {
                warning(format!("Ignoring unreadable legacy payload: {e}"));
                Ok(None)
            }
        }
    }
}

impl StoreGateway for SqliteGateway {
    fn load(&mut self) -> AppResult<Option<Inventory>> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT payload FROM inventory WHERE key = ?1",
                [ROOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(store) => Ok(Some(store)),
                // malformed data is "no data", not a fatal error
                Err(e) => {
                    warning(format!("Stored data is unreadable, starting empty: {e}"));
                    self.load_legacy()
                }
            },
            None => self.load_legacy(),
        }
    }

    fn save(&mut self, store: &Inventory) -> AppResult<()> {
        let payload = serde_json::to_string(store)?;
        self.pool.conn.execute(
            "INSERT INTO inventory (key, payload, saved_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, saved_at = excluded.saved_at",
            params![ROOT_KEY, payload, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DayDocument};
    use chrono::NaiveDate;

    fn open_memory() -> SqliteGateway {
        SqliteGateway::open(":memory:").unwrap()
    }

    fn sample_store() -> Inventory {
        let mut store = Inventory::new();
        let date: NaiveDate = "2024-01-05".parse().unwrap();
        store.insert(date, DayDocument::seeded());
        store
    }

    #[test]
    fn load_on_a_fresh_db_is_none() {
        let mut gw = open_memory();
        assert!(gw.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut gw = open_memory();
        let store = sample_store();
        gw.save(&store).unwrap();
        assert_eq!(gw.load().unwrap(), Some(store));
    }

    #[test]
    fn save_overwrites_the_previous_payload() {
        let mut gw = open_memory();
        gw.save(&sample_store()).unwrap();
        let empty = Inventory::new();
        gw.save(&empty).unwrap();
        assert_eq!(gw.load().unwrap(), Some(empty));
    }

    #[test]
    fn malformed_payload_reads_as_no_data() {
        let mut gw = open_memory();
        gw.conn()
            .execute(
                "INSERT INTO inventory (key, payload, saved_at) VALUES (?1, 'not json', '')",
                [ROOT_KEY],
            )
            .unwrap();
        assert!(gw.load().unwrap().is_none());
    }

    #[test]
    fn legacy_snapshot_is_migrated_once() {
        let mut gw = open_memory();
        // legacy payload, in the shape the old app wrote: qt fields and
        // the Portuguese remote-control label
        let legacy = r#"{
            "2023-12-01": {
                "BOX": [{"id":"a1","qt":"1","contract":"C-7","serial":"S-7","photos":[]}],
                "CONTROLE REMOTO": [{"id":"a2","qt":"","contract":"","serial":"","photos":[]}]
            }
        }"#;
        gw.conn()
            .execute(
                "INSERT INTO kv_store (key, value) VALUES (?1, ?2)",
                params![LEGACY_KEY, legacy],
            )
            .unwrap();

        let store = gw.load().unwrap().expect("legacy snapshot accepted");
        let date: NaiveDate = "2023-12-01".parse().unwrap();
        let doc = store.day(date).unwrap();
        assert_eq!(doc.items(Category::Box)[0].contract, "C-7");
        // missing categories were restored
        assert!(doc.items(Category::Camera).is_empty());

        // migrated into the primary row: present even after wiping legacy
        gw.conn().execute("DELETE FROM kv_store", []).unwrap();
        assert_eq!(gw.load().unwrap(), Some(store));
    }
}
