//! Article model: a link to something worth reading, with who added it and when.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use super::{timestamp, Resource};
use crate::db::{Record, SqliteQuery};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

/// Query parameters for creating an article.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

impl Record for Article {
    type Key = i64;

    const TABLE: &'static str = "articles";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["title", "url", "explanation", "email", "date_added"];
    const GENERATED_KEY: bool = true;

    fn key(&self) -> &i64 {
        &self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.title.clone())
            .bind(self.url.clone())
            .bind(self.explanation.clone())
            .bind(self.email.clone())
            .bind(self.date_added)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Article {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            explanation: row.try_get("explanation")?,
            email: row.try_get("email")?,
            date_added: row.try_get("date_added")?,
        })
    }
}

impl Resource for Article {
    type CreateRequest = CreateArticleRequest;

    const PATH: &'static str = "articles";
    const TYPE_NAME: &'static str = "Articles";
    const DELETE_LABEL: &'static str = "Article";

    fn from_request(request: CreateArticleRequest) -> Self {
        tracing::debug!(date_added = %request.date_added, "new article");
        Article {
            id: 0,
            title: request.title,
            url: request.url,
            explanation: request.explanation,
            email: request.email,
            date_added: request.date_added,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.title = incoming.title;
        self.url = incoming.url;
        self.explanation = incoming.explanation;
        self.email = incoming.email;
        self.date_added = incoming.date_added;
    }
}
