//! Student organization model, keyed by its short organization code.

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use super::Resource;
use crate::db::{Record, SqliteQuery};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Natural key, e.g. `SKI`.
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// Query parameters for creating an organization. The caller picks the code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Record for Organization {
    type Key = String;

    const TABLE: &'static str = "ucsb_orgs";
    const KEY_COLUMN: &'static str = "org_code";
    const COLUMNS: &'static [&'static str] =
        &["org_translation_short", "org_translation", "inactive"];
    const GENERATED_KEY: bool = false;

    fn key(&self) -> &String {
        &self.org_code
    }

    fn set_key(&mut self, key: String) {
        self.org_code = key;
    }

    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.org_translation_short.clone())
            .bind(self.org_translation.clone())
            .bind(self.inactive)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Organization {
            org_code: row.try_get("org_code")?,
            org_translation_short: row.try_get("org_translation_short")?,
            org_translation: row.try_get("org_translation")?,
            inactive: row.try_get("inactive")?,
        })
    }
}

impl Resource for Organization {
    type CreateRequest = CreateOrganizationRequest;

    const PATH: &'static str = "ucsborganization";
    const TYPE_NAME: &'static str = "UCSBOrgs";
    const KEY_PARAM: &'static str = "orgCode";

    fn from_request(request: CreateOrganizationRequest) -> Self {
        Organization {
            org_code: request.org_code,
            org_translation_short: request.org_translation_short,
            org_translation: request.org_translation,
            inactive: request.inactive,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.org_translation_short = incoming.org_translation_short;
        self.org_translation = incoming.org_translation;
        self.inactive = incoming.inactive;
    }
}
