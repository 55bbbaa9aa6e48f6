//! REST API module.
//!
//! Every resource gets the same five endpoints under `/api/<path>`.

mod resource;

pub use resource::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::models::{
    Article, HelpRequest, MenuItem, MenuItemReview, Organization, RecommendationRequest, Resource,
};
use crate::AppState;

/// Routes for every resource type.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Article>())
        .merge(resource_routes::<MenuItem>())
        .merge(resource_routes::<Organization>())
        .merge(resource_routes::<MenuItemReview>())
        .merge(resource_routes::<RecommendationRequest>())
        .merge(resource_routes::<HelpRequest>())
}

/// List, get, create, update and delete routes for one resource type.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let base = format!("/api/{}", R::PATH);

    Router::new()
        .route(&format!("{base}/all"), get(list::<R>))
        .route(&format!("{base}/post"), post(create::<R>))
        .route(
            &base,
            get(get_by_key::<R>)
                .put(update::<R>)
                .delete(delete::<R>),
        )
}
