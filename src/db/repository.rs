//! Database repository for CRUD operations.
//!
//! One set of find/save/delete operations serves every [`Record`] type; each
//! call issues exactly one statement.

use sqlx::SqlitePool;

use super::{Record, RecordKey};
use crate::errors::AppError;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every record of type `R` in storage order.
    pub async fn find_all<R: Record>(&self) -> Result<Vec<R>, AppError> {
        let sql = select_sql::<R>();
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| R::from_row(row).map_err(AppError::from))
            .collect()
    }

    /// Get a record by key.
    pub async fn find_by_id<R: Record>(&self, key: &R::Key) -> Result<Option<R>, AppError> {
        let sql = format!("{} WHERE {} = ?", select_sql::<R>(), R::KEY_COLUMN);
        let row = key
            .bind_to(sqlx::query(&sql))
            .fetch_optional(&self.pool)
            .await?;

        Ok(match row {
            Some(row) => Some(R::from_row(&row)?),
            None => None,
        })
    }

    /// Persist a record and return it as stored.
    ///
    /// New records with a generated key are inserted and receive their key from
    /// the store; every other record is upserted under its own key.
    pub async fn save<R: Record>(&self, record: &R) -> Result<R, AppError> {
        let mut saved = record.clone();

        if record.is_new() {
            let sql = insert_sql::<R>();
            let row = record
                .bind_fields(sqlx::query(&sql))
                .fetch_one(&self.pool)
                .await?;
            let key = R::Key::read_from(&row, R::KEY_COLUMN)?;
            saved.set_key(key);
        } else {
            let sql = upsert_sql::<R>();
            record
                .bind_fields(record.key().bind_to(sqlx::query(&sql)))
                .execute(&self.pool)
                .await?;
        }

        Ok(saved)
    }

    /// Delete a record by its key.
    pub async fn delete<R: Record>(&self, record: &R) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", R::TABLE, R::KEY_COLUMN);
        record
            .key()
            .bind_to(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// SQL builders

fn select_sql<R: Record>() -> String {
    format!(
        "SELECT {}, {} FROM {}",
        R::KEY_COLUMN,
        R::COLUMNS.join(", "),
        R::TABLE
    )
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn insert_sql<R: Record>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders(R::COLUMNS.len()),
        R::KEY_COLUMN
    )
}

fn upsert_sql<R: Record>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .map(|col| format!("{col} = excluded.{col}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}, {}) VALUES ({}) ON CONFLICT({}) DO UPDATE SET {}",
        R::TABLE,
        R::KEY_COLUMN,
        R::COLUMNS.join(", "),
        placeholders(R::COLUMNS.len() + 1),
        R::KEY_COLUMN,
        assignments
    )
}
