use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityStore;
use crate::services::activities_service::SignupPolicy;

pub mod routes;

use routes::activities;

/// Where `GET /` sends the browser.
pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: ActivityStore,
    pub policy: SignupPolicy,
}

impl AppState {
    pub fn new(store: ActivityStore, policy: SignupPolicy) -> Self {
        Self { store, policy }
    }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(INDEX_PATH) }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
