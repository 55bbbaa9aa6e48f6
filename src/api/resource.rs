//! Generic resource endpoints, instantiated once per [`Resource`] type.
//!
//! Every handler checks the caller's role before touching its inputs.

use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use crate::auth::{Caller, Role};
use crate::db::Record;
use crate::errors::AppError;
use crate::models::{GenericMessage, Resource};
use crate::AppState;

/// GET /api/<resource>/all - List all entities.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<R>>, AppError> {
    caller.require(Role::User)?;

    let entities = state.repo.find_all::<R>().await?;
    Ok(Json(entities))
}

/// GET /api/<resource>?id=<key> - Get a single entity.
pub async fn get_by_key<R: Resource>(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<R>, AppError> {
    caller.require(Role::User)?;

    let key = key_param::<R>(&params)?;
    let entity = find_or_not_found::<R>(&state, &key).await?;
    Ok(Json(entity))
}

/// POST /api/<resource>/post?<field>=... - Create an entity from query parameters.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    caller: Caller,
    params: Result<Query<R::CreateRequest>, QueryRejection>,
) -> Result<Json<R>, AppError> {
    caller.require(Role::Admin)?;

    let Query(request) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let saved = state.repo.save(&R::from_request(request)).await?;

    tracing::debug!(resource = R::TYPE_NAME, key = %saved.key(), "created");
    Ok(Json(saved))
}

/// PUT /api/<resource>?id=<key> - Overwrite an entity with the JSON body.
///
/// The key in the query string selects the entity; a key inside the body is ignored.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<HashMap<String, String>>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, AppError> {
    caller.require(Role::Admin)?;

    let key = key_param::<R>(&params)?;
    let Json(incoming) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut entity = find_or_not_found::<R>(&state, &key).await?;
    entity.overwrite_from(incoming);
    state.repo.save(&entity).await?;

    tracing::debug!(resource = R::TYPE_NAME, key = %key, "updated");
    Ok(Json(entity))
}

/// DELETE /api/<resource>?id=<key> - Delete an entity.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<GenericMessage>, AppError> {
    caller.require(Role::Admin)?;

    let key = key_param::<R>(&params)?;
    let entity = find_or_not_found::<R>(&state, &key).await?;
    state.repo.delete(&entity).await?;

    tracing::debug!(resource = R::TYPE_NAME, key = %key, "deleted");
    Ok(Json(GenericMessage::new(format!(
        "{} with id {} deleted",
        R::DELETE_LABEL,
        key
    ))))
}

async fn find_or_not_found<R: Resource>(state: &AppState, key: &R::Key) -> Result<R, AppError> {
    state
        .repo
        .find_by_id::<R>(key)
        .await?
        .ok_or_else(|| AppError::not_found(R::TYPE_NAME, key))
}

/// Pull the resource key out of the query string.
fn key_param<R: Resource>(params: &HashMap<String, String>) -> Result<R::Key, AppError> {
    let raw = params.get(R::KEY_PARAM).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Required parameter '{}' is not present",
            R::KEY_PARAM
        ))
    })?;

    raw.parse().map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid value '{}' for parameter '{}'",
            raw,
            R::KEY_PARAM
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Organization};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_key_param_numeric() {
        assert_eq!(key_param::<Article>(&params(&[("id", "7")])).unwrap(), 7);
    }

    #[test]
    fn test_key_param_natural_key_name() {
        let key = key_param::<Organization>(&params(&[("orgCode", "SKI")])).unwrap();
        assert_eq!(key, "SKI");
        assert!(key_param::<Organization>(&params(&[("id", "SKI")])).is_err());
    }

    #[test]
    fn test_key_param_missing_or_malformed() {
        let missing = key_param::<Article>(&params(&[])).unwrap_err();
        assert_eq!(missing.to_string(), "Required parameter 'id' is not present");

        let malformed = key_param::<Article>(&params(&[("id", "seven")])).unwrap_err();
        assert!(matches!(malformed, AppError::BadRequest(_)));
    }
}
