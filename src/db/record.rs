//! Table mapping for persisted records.

use std::fmt::Display;
use std::str::FromStr;

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

/// A query under construction, ready for positional binds.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Primary key types a table can use.
pub trait RecordKey:
    Clone + Default + PartialEq + Display + FromStr + Send + Sync + Unpin + 'static
{
    fn bind_to<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn read_from(row: &SqliteRow, column: &str) -> Result<Self, sqlx::Error>;
}

impl RecordKey for i64 {
    fn bind_to<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(*self)
    }

    fn read_from(row: &SqliteRow, column: &str) -> Result<Self, sqlx::Error> {
        row.try_get(column)
    }
}

impl RecordKey for String {
    fn bind_to<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.clone())
    }

    fn read_from(row: &SqliteRow, column: &str) -> Result<Self, sqlx::Error> {
        row.try_get(column)
    }
}

/// How a record type maps onto its table.
pub trait Record: Clone + Send + Sync + Unpin + 'static {
    type Key: RecordKey;

    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    /// Non-key columns, in the order `bind_fields` binds them.
    const COLUMNS: &'static [&'static str];
    /// Whether the store assigns the key on first insert.
    const GENERATED_KEY: bool;

    fn key(&self) -> &Self::Key;

    fn set_key(&mut self, key: Self::Key);

    /// Bind every non-key field, in `COLUMNS` order.
    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;

    /// A record with a generated key that has not been stored yet still holds the default key.
    fn is_new(&self) -> bool {
        Self::GENERATED_KEY && *self.key() == Self::Key::default()
    }
}
