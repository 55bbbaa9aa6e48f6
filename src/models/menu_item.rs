//! Dining commons menu item model.

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use super::Resource;
use crate::db::{Record, SqliteQuery};

/// A dish served at one station of a dining commons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

/// Query parameters for creating a menu item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemRequest {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Record for MenuItem {
    type Key = i64;

    const TABLE: &'static str = "ucsb_dining_commons_menu_items";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["dining_commons_code", "name", "station"];
    const GENERATED_KEY: bool = true;

    fn key(&self) -> &i64 {
        &self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.dining_commons_code.clone())
            .bind(self.name.clone())
            .bind(self.station.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(MenuItem {
            id: row.try_get("id")?,
            dining_commons_code: row.try_get("dining_commons_code")?,
            name: row.try_get("name")?,
            station: row.try_get("station")?,
        })
    }
}

impl Resource for MenuItem {
    type CreateRequest = CreateMenuItemRequest;

    const PATH: &'static str = "ucsbdiningcommonsmenuitem";
    const TYPE_NAME: &'static str = "UCSBDiningCommonsMenuItem";

    fn from_request(request: CreateMenuItemRequest) -> Self {
        MenuItem {
            id: 0,
            dining_commons_code: request.dining_commons_code,
            name: request.name,
            station: request.station,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.dining_commons_code = incoming.dining_commons_code;
        self.name = incoming.name;
        self.station = incoming.station;
    }
}
