//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data.

mod record;
mod repository;

pub use record::*;
pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Create one table per resource if missing.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            explanation TEXT NOT NULL,
            email TEXT NOT NULL,
            date_added TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ucsb_dining_commons_menu_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            dining_commons_code TEXT NOT NULL,
            name TEXT NOT NULL,
            station TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ucsb_orgs (
            org_code TEXT PRIMARY KEY,
            org_translation_short TEXT NOT NULL,
            org_translation TEXT NOT NULL,
            inactive INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menu_item_reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id INTEGER NOT NULL,
            reviewer_email TEXT NOT NULL,
            stars INTEGER NOT NULL,
            date_reviewed TEXT NOT NULL,
            comments TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recommendation_requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            requester_email TEXT NOT NULL,
            professor_email TEXT NOT NULL,
            explanation TEXT NOT NULL,
            date_requested TEXT NOT NULL,
            date_needed TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS help_requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            requester_email TEXT NOT NULL,
            team_id TEXT NOT NULL,
            table_or_breakout_room TEXT NOT NULL,
            request_time TEXT NOT NULL,
            explanation TEXT NOT NULL,
            solved INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
