//! Help request model: a team asking staff for help during a lab section.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use super::{timestamp, Resource};
use crate::db::{Record, SqliteQuery};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub team_id: String,
    /// `table` or `breakout`
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

/// Query parameters for creating a help request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequest {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Record for HelpRequest {
    type Key = i64;

    const TABLE: &'static str = "help_requests";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "request_time",
        "explanation",
        "solved",
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
            .bind(self.team_id.clone())
            .bind(self.table_or_breakout_room.clone())
            .bind(self.request_time)
            .bind(self.explanation.clone())
            .bind(self.solved)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(HelpRequest {
            id: row.try_get("id")?,
            requester_email: row.try_get("requester_email")?,
            team_id: row.try_get("team_id")?,
            table_or_breakout_room: row.try_get("table_or_breakout_room")?,
            request_time: row.try_get("request_time")?,
            explanation: row.try_get("explanation")?,
            solved: row.try_get("solved")?,
        })
    }
}

impl Resource for HelpRequest {
    type CreateRequest = CreateHelpRequest;

    const PATH: &'static str = "helprequests";
    const TYPE_NAME: &'static str = "HelpRequest";

    fn from_request(request: CreateHelpRequest) -> Self {
        HelpRequest {
            id: 0,
            requester_email: request.requester_email,
            team_id: request.team_id,
            table_or_breakout_room: request.table_or_breakout_room,
            request_time: request.request_time,
            explanation: request.explanation,
            solved: request.solved,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.team_id = incoming.team_id;
        self.table_or_breakout_room = incoming.table_or_breakout_room;
        self.request_time = incoming.request_time;
        self.explanation = incoming.explanation;
        self.solved = incoming.solved;
    }
}
