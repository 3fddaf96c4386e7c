//! SQLite-backed solved-problem store implementation.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{ProblemStatus, SolvedProblemRecord, SolvedProblemStore, StoreError, MAX_BATCH_WRITE};

/// SQLite-backed solved-problem store.
pub struct SqliteSolvedStore {
    conn: Mutex<Connection>,
}

impl SqliteSolvedStore {
    /// Open (or create) the store at `path`, creating tables if needed.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS solved_problems (
                problem_id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                tier TEXT NOT NULL,
                owner TEXT NOT NULL,
                status TEXT NOT NULL,
                synced_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_solved_problems_owner ON solved_problems(owner);
            "#,
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Database("connection mutex poisoned".to_string()))
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<SolvedProblemRecord> {
        let status_str: String = row.get(4)?;
        let synced_at_str: String = row.get(5)?;

        let status = ProblemStatus::parse(&status_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                format!("unknown status '{}'", status_str).into(),
            )
        })?;
        let synced_at = DateTime::parse_from_rfc3339(&synced_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
            })?;

        Ok(SolvedProblemRecord {
            problem_id: row.get(0)?,
            title: row.get(1)?,
            tier: row.get(2)?,
            owner: row.get(3)?,
            status,
            synced_at,
        })
    }
}

impl SolvedProblemStore for SqliteSolvedStore {
    fn get(&self, problem_id: &str) -> Result<Option<SolvedProblemRecord>, StoreError> {
        let conn = self.lock()?;

        let result = conn.query_row(
            "SELECT problem_id, title, tier, owner, status, synced_at FROM solved_problems WHERE problem_id = ?",
            params![problem_id],
            Self::row_to_record,
        );

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e.to_string())),
        }
    }

    fn contains(&self, problem_id: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;

        let result = conn.query_row(
            "SELECT 1 FROM solved_problems WHERE problem_id = ?",
            params![problem_id],
            |_| Ok(()),
        );

        match result {
            Ok(()) => Ok(true),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(StoreError::Database(e.to_string())),
        }
    }

    fn put_batch(&self, records: &[SolvedProblemRecord]) -> Result<(), StoreError> {
        if records.len() > MAX_BATCH_WRITE {
            return Err(StoreError::BatchTooLarge {
                size: records.len(),
                limit: MAX_BATCH_WRITE,
            });
        }

        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        {
            let mut stmt = tx
                .prepare_cached(
                    "INSERT INTO solved_problems (problem_id, title, tier, owner, status, synced_at)
                     VALUES (?, ?, ?, ?, ?, ?)
                     ON CONFLICT(problem_id) DO UPDATE SET
                        title = excluded.title,
                        tier = excluded.tier,
                        owner = excluded.owner,
                        status = excluded.status,
                        synced_at = excluded.synced_at",
                )
                .map_err(|e| StoreError::Database(e.to_string()))?;

            for record in records {
                stmt.execute(params![
                    record.problem_id,
                    record.title,
                    record.tier,
                    record.owner,
                    record.status.as_str(),
                    record.synced_at.to_rfc3339(),
                ])
                .map_err(|e| StoreError::Database(e.to_string()))?;
            }
        }

        tx.commit()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn count(&self) -> Result<u64, StoreError> {
        let conn = self.lock()?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM solved_problems", [], |row| row.get(0))
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(count as u64)
    }
}
