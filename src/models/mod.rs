//! Data models for the campus API.
//!
//! Every entity is exposed through the same five operations; [`Resource`] carries
//! the per-type names and the two input contracts (flat create parameters, full
//! update body).

mod article;
mod help_request;
mod menu_item;
mod menu_item_review;
mod organization;
mod recommendation_request;
pub mod timestamp;

pub use article::*;
pub use help_request::*;
pub use menu_item::*;
pub use menu_item_review::*;
pub use organization::*;
pub use recommendation_request::*;

use serde::{de::DeserializeOwned, Serialize};

use crate::db::Record;

/// An entity type served under `/api/<PATH>`.
pub trait Resource: Record + Serialize + DeserializeOwned {
    /// Discrete query parameters accepted by create.
    type CreateRequest: DeserializeOwned + Send + 'static;

    const PATH: &'static str;
    /// Name used in not-found messages.
    const TYPE_NAME: &'static str;
    /// Name used in delete confirmations.
    const DELETE_LABEL: &'static str = Self::TYPE_NAME;
    /// Query parameter carrying the key.
    const KEY_PARAM: &'static str = "id";

    /// Build an unsaved entity from create parameters.
    fn from_request(request: Self::CreateRequest) -> Self;

    /// Replace every non-key field with the incoming values.
    fn overwrite_from(&mut self, incoming: Self);
}

/// Confirmation body for deletes.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct GenericMessage {
    pub message: String,
}

impl GenericMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
