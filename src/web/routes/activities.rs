use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::database::activities_repo::{ActivityDirectory, ActivityMap, DirectoryError};
use crate::models::SignupResult;
use crate::services::activities_service;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

// A segment that does not decode to UTF-8 cannot name any activity.
fn decode_activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(name)| name).map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "undecodable activity name");
        ApiError::from(DirectoryError::ActivityNotFound)
    })
}

fn participant_email(
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    query
        .map(|Query(q)| q.email)
        .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))
}

pub async fn activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&directory).await)
}

// `Path` percent-decodes the segment, so "Chess%20Club" arrives as "Chess Club".
pub async fn signup_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<SignupResult>, ApiError> {
    let activity_name = decode_activity_name(path)?;
    let email = participant_email(query)?;
    let result =
        activities_service::signup_for_activity(&directory, &activity_name, &email).await?;
    Ok(Json(result))
}

pub async fn remove_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<SignupResult>, ApiError> {
    let activity_name = decode_activity_name(path)?;
    let email = participant_email(query)?;
    let result =
        activities_service::remove_participant(&directory, &activity_name, &email).await?;
    Ok(Json(result))
}
