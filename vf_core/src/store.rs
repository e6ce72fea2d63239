//! # Measurement Store
//!
//! Append-only SQLite persistence for measurement records. One table,
//! one write per session; reading the history back is left to external
//! tools.
//!
//! The database location resolves in precedence order: an explicit path
//! (the `--db` flag), the `VF_DATABASE_PATH` environment variable, then
//! `vf_data.db` in the working directory.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::errors::{CalcError, CalcResult};
use crate::record::MeasurementRecord;

/// Default database file name, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "vf_data.db";

/// Environment variable overriding the default database location
pub const DB_PATH_ENV: &str = "VF_DATABASE_PATH";

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    timestamp_utc DATETIME DEFAULT CURRENT_TIMESTAMP,
    gender        TEXT NOT NULL,
    age           INTEGER NOT NULL,
    weight_lbs    REAL NOT NULL,
    height_ft     INTEGER NOT NULL,
    height_in     INTEGER NOT NULL,
    waist_in      REAL NOT NULL,
    thigh_in      REAL NOT NULL,
    bmi           REAL NOT NULL,
    visceral_fat  REAL NOT NULL
)
"#;

/// Resolve the database path: explicit override, then environment, then
/// the default file.
pub fn database_path(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(|| std::env::var(DB_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

/// Append-only store for measurement records.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `path`, creating the file and the `users` table
    /// if they do not exist yet.
    pub fn open(path: &Path) -> CalcResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| CalcError::storage_error("open", e.to_string()))?;
        conn.execute(CREATE_USERS_TABLE, [])
            .map_err(|e| CalcError::storage_error("create table", e.to_string()))?;
        Ok(Store { conn })
    }

    /// Append one record, returning its row id.
    ///
    /// The insert runs in a transaction; on failure the transaction rolls
    /// back and the error reports which step failed. The timestamp is
    /// written explicitly in the same UTC format the column default uses,
    /// so rows inserted by other tools stay uniform.
    pub fn append(&mut self, record: &MeasurementRecord) -> CalcResult<i64> {
        let (height_ft, height_in) = record.height.components();
        let timestamp_utc = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let tx = self
            .conn
            .transaction()
            .map_err(|e| CalcError::storage_error("begin", e.to_string()))?;

        tx.execute(
            r#"
            INSERT INTO users (
                name, timestamp_utc, gender, age, weight_lbs,
                height_ft, height_in, waist_in, thigh_in, bmi, visceral_fat
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                record.name,
                timestamp_utc,
                record.sex.as_str(),
                record.age,
                record.weight_lbs,
                height_ft,
                height_in,
                record.waist_in,
                record.thigh_in,
                record.bmi,
                record.visceral_fat_cm2,
            ],
        )
        .map_err(|e| CalcError::storage_error("insert", e.to_string()))?;

        let id = tx.last_insert_rowid();
        tx.commit()
            .map_err(|e| CalcError::storage_error("commit", e.to_string()))?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sex;
    use crate::units::Height;
    use pretty_assertions::assert_eq;

    fn test_record() -> MeasurementRecord {
        MeasurementRecord::new(
            "Tony",
            Sex::Male,
            42,
            190.0,
            Height::from_feet_inches(6, 1),
            36.0,
            24.5,
            24.931,
            110.5357,
        )
    }

    fn temp_db(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_append_and_read_back() {
        let path = temp_db("vf_store_append_test.db");
        let mut store = Store::open(&path).unwrap();

        let id = store.append(&test_record()).unwrap();
        assert_eq!(id, 1);

        let (name, gender, age, height_ft, height_in, bmi, visceral_fat): (
            String,
            String,
            u32,
            u32,
            u32,
            f64,
            f64,
        ) = store
            .conn
            .query_row(
                "SELECT name, gender, age, height_ft, height_in, bmi, visceral_fat
                 FROM users WHERE id = ?1",
                [id],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                        row.get(6)?,
                    ))
                },
            )
            .unwrap();

        assert_eq!(name, "Tony");
        assert_eq!(gender, "male");
        assert_eq!(age, 42);
        assert_eq!((height_ft, height_in), (6, 1));
        assert_eq!(bmi, 24.93);
        assert_eq!(visceral_fat, 110.54);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_timestamp_written_in_utc_format() {
        let path = temp_db("vf_store_timestamp_test.db");
        let mut store = Store::open(&path).unwrap();
        let id = store.append(&test_record()).unwrap();

        let timestamp: String = store
            .conn
            .query_row(
                "SELECT timestamp_utc FROM users WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .unwrap();

        // "YYYY-MM-DD HH:MM:SS", same shape as CURRENT_TIMESTAMP
        assert_eq!(timestamp.len(), 19);
        assert_eq!(&timestamp[4..5], "-");
        assert_eq!(&timestamp[10..11], " ");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_reopen_appends_to_existing_table() {
        let path = temp_db("vf_store_reopen_test.db");

        {
            let mut store = Store::open(&path).unwrap();
            store.append(&test_record()).unwrap();
        }

        let mut store = Store::open(&path).unwrap();
        let id = store.append(&test_record()).unwrap();
        assert_eq!(id, 2);

        let count: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_append_reports_storage_error() {
        // A connection without the users table makes the insert fail
        let conn = Connection::open_in_memory().unwrap();
        let mut store = Store { conn };

        let err = store.append(&test_record()).unwrap_err();
        match err {
            CalcError::StorageError { operation, .. } => assert_eq!(operation, "insert"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_database_path_resolution() {
        std::env::remove_var(DB_PATH_ENV);
        assert_eq!(database_path(None), PathBuf::from(DEFAULT_DB_FILE));

        std::env::set_var(DB_PATH_ENV, "/tmp/vf_env_test.db");
        assert_eq!(database_path(None), PathBuf::from("/tmp/vf_env_test.db"));

        // An explicit path wins over the environment
        assert_eq!(
            database_path(Some(PathBuf::from("override.db"))),
            PathBuf::from("override.db")
        );
        std::env::remove_var(DB_PATH_ENV);
    }
}
