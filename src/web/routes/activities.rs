use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{ActivityView, ConfirmationBody};
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    fn require_email(self) -> Result<String, ApiError> {
        self.email.ok_or(ApiError::MissingQueryParam("email"))
    }
}

// Extractor rejections are folded into ApiError so they render as JSON too.
fn roster_target(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<(String, String), ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    Ok((activity_name, query.require_email()?))
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, ActivityView>> {
    let directory = state.directory.read().await;
    Json(directory.list_activities())
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<ConfirmationBody>, ApiError> {
    let (activity_name, email) = roster_target(path, query)?;

    // Check and insert under one write guard so concurrent signups cannot
    // both pass the membership test.
    let result = state.directory.write().await.signup(&activity_name, &email);
    match result {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(Json(ConfirmationBody { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e.into())
        }
    }
}

pub async fn unsubscribe_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<ConfirmationBody>, ApiError> {
    let (activity_name, email) = roster_target(path, query)?;

    let result = state
        .directory
        .write()
        .await
        .unsubscribe(&activity_name, &email);
    match result {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "unsubscribe accepted");
            Ok(Json(ConfirmationBody { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unsubscribe rejected");
            Err(e.into())
        }
    }
}
