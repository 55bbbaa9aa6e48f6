//! Recommendation letter request model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use super::{timestamp, Resource};
use crate::db::{Record, SqliteQuery};

/// A student's request for a letter from a professor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

/// Query parameters for creating a recommendation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendationRequest {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Record for RecommendationRequest {
    type Key = i64;

    const TABLE: &'static str = "recommendation_requests";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];
    const GENERATED_KEY: bool = true;

    fn key(&self) -> &i64 {
        &self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.requester_email.clone())
            .bind(self.professor_email.clone())
            .bind(self.explanation.clone())
            .bind(self.date_requested)
            .bind(self.date_needed)
            .bind(self.done)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(RecommendationRequest {
            id: row.try_get("id")?,
            requester_email: row.try_get("requester_email")?,
            professor_email: row.try_get("professor_email")?,
            explanation: row.try_get("explanation")?,
            date_requested: row.try_get("date_requested")?,
            date_needed: row.try_get("date_needed")?,
            done: row.try_get("done")?,
        })
    }
}

impl Resource for RecommendationRequest {
    type CreateRequest = CreateRecommendationRequest;

    const PATH: &'static str = "recommendationrequest";
    const TYPE_NAME: &'static str = "RecommendationRequest";

    fn from_request(request: CreateRecommendationRequest) -> Self {
        RecommendationRequest {
            id: 0,
            requester_email: request.requester_email,
            professor_email: request.professor_email,
            explanation: request.explanation,
            date_requested: request.date_requested,
            date_needed: request.date_needed,
            done: request.done,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.professor_email = incoming.professor_email;
        self.explanation = incoming.explanation;
        self.date_requested = incoming.date_requested;
        self.date_needed = incoming.date_needed;
        self.done = incoming.done;
    }
}
