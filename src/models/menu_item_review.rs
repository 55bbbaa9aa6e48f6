//! Menu item review model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use super::{timestamp, Resource};
use crate::db::{Record, SqliteQuery};

/// A star rating left for a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

/// Query parameters for creating a review.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemReviewRequest {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Record for MenuItemReview {
    type Key = i64;

    const TABLE: &'static str = "menu_item_reviews";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] =
        &["item_id", "reviewer_email", "stars", "date_reviewed", "comments"];
    const GENERATED_KEY: bool = true;

    fn key(&self) -> &i64 {
        &self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn bind_fields<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.item_id)
            .bind(self.reviewer_email.clone())
            .bind(self.stars)
            .bind(self.date_reviewed)
            .bind(self.comments.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(MenuItemReview {
            id: row.try_get("id")?,
            item_id: row.try_get("item_id")?,
            reviewer_email: row.try_get("reviewer_email")?,
            stars: row.try_get("stars")?,
            date_reviewed: row.try_get("date_reviewed")?,
            comments: row.try_get("comments")?,
        })
    }
}

impl Resource for MenuItemReview {
    type CreateRequest = CreateMenuItemReviewRequest;

    const PATH: &'static str = "menuitemreview";
    const TYPE_NAME: &'static str = "MenuItemReview";

    fn from_request(request: CreateMenuItemReviewRequest) -> Self {
        MenuItemReview {
            id: 0,
            item_id: request.item_id,
            reviewer_email: request.reviewer_email,
            stars: request.stars,
            date_reviewed: request.date_reviewed,
            comments: request.comments,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.item_id = incoming.item_id;
        self.reviewer_email = incoming.reviewer_email;
        self.stars = incoming.stars;
        self.date_reviewed = incoming.date_reviewed;
        self.comments = incoming.comments;
    }
}
