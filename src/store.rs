use crate::membership::Membership;
use itertools::Itertools;
use rusqlite::{params, Connection, NO_PARAMS};
use std::path::Path;
use thiserror::Error;

const COLUMNS: [&str; 8] = [
    "id",
    "name",
    "position_id",
    "position",
    "label",
    "start_date",
    "end_date",
    "ordinal",
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown key column {0}")]
    UnknownKey(String),
    #[error("no key columns given")]
    NoKeys,
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Sqlite sink for memberships. The `data` table is dropped and recreated on
/// every save, so each run replaces the previous contents in full.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Recreate the `data` table and upsert every record, keyed by the given
    /// columns. With duplicate keys the last record wins.
    pub fn save(&mut self, memberships: &[Membership], keys: &[&str]) -> Result<(), StoreError> {
        if keys.is_empty() {
            return Err(StoreError::NoKeys);
        }
        for key in keys {
            if !COLUMNS.contains(key) {
                return Err(StoreError::UnknownKey((*key).to_string()));
            }
        }

        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS data;
             CREATE TABLE data (
                 id TEXT NOT NULL,
                 name TEXT NOT NULL,
                 position_id TEXT NOT NULL,
                 position TEXT NOT NULL,
                 label TEXT NOT NULL,
                 start_date TEXT NOT NULL,
                 end_date TEXT NOT NULL,
                 ordinal INTEGER NOT NULL,
                 UNIQUE ({keys})
             );",
            keys = keys.iter().format(", ")
        ))?;
        {
            let mut insert = tx.prepare(&format!(
                "INSERT OR REPLACE INTO data ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                COLUMNS.iter().format(", ")
            ))?;
            for membership in memberships {
                insert.execute(params![
                    membership.id,
                    membership.name,
                    membership.position_id,
                    membership.position,
                    membership.label,
                    membership.start_date,
                    membership.end_date,
                    membership.ordinal,
                ])?;
            }
        }
        tx.commit()?;
        log::debug!("saved {} rows", memberships.len());
        Ok(())
    }

    /// Read the whole table back, in insertion order
    pub fn memberships(&self) -> Result<Vec<Membership>, StoreError> {
        let mut statement = self.conn.prepare(&format!(
            "SELECT {} FROM data ORDER BY rowid",
            COLUMNS.iter().format(", ")
        ))?;
        let rows = statement.query_map(NO_PARAMS, |row| {
            Ok(Membership {
                id: row.get(0)?,
                name: row.get(1)?,
                position_id: row.get(2)?,
                position: row.get(3)?,
                label: row.get(4)?,
                start_date: row.get(5)?,
                end_date: row.get(6)?,
                ordinal: row.get(7)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }
}
