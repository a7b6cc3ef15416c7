use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ActivityError;
use crate::models::ActivityMap;
use crate::services::activities_service;
use crate::web::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn error_response(e: ActivityError) -> (StatusCode, Json<Value>) {
    (e.status(), Json(serde_json::json!({ "detail": e.to_string() })))
}

fn rejection_response(rejection: QueryRejection) -> (StatusCode, Json<Value>) {
    (
        rejection.status(),
        Json(serde_json::json!({ "detail": rejection.body_text() })),
    )
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&state.store).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> ApiResult {
    let Query(query) = query.map_err(rejection_response)?;
    let email = query.email.unwrap_or_default();
    activities_service::sign_up(&state.store, &activity_name, &email, state.policy)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(error_response)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> ApiResult {
    let Query(query) = query.map_err(rejection_response)?;
    let email = query.email.unwrap_or_default();
    activities_service::unregister(&state.store, &activity_name, &email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(error_response)
}
