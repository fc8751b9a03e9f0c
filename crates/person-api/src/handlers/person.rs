use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use person_core::{Error, Person};
use serde::{Deserialize, Serialize};

use crate::state::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: Error) -> ApiError {
    let status = match err {
        Error::PersonNotFound(_) => StatusCode::NOT_FOUND,
        _ => {
            tracing::error!("Person request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// List all persons
pub async fn list_persons(State(state): State<ApiState>) -> Result<Json<Vec<Person>>, ApiError> {
    let persons = state.service.all().await.map_err(error_response)?;
    Ok(Json(persons))
}

/// Get a single person by id
pub async fn get_person(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Person>, ApiError> {
    let person = state.service.find_by_id(id).await.map_err(error_response)?;
    Ok(Json(person))
}

/// List persons with the given color label
pub async fn list_persons_by_color(
    State(state): State<ApiState>,
    Path(color): Path<String>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let persons = state
        .service
        .find_by_color(&color)
        .await
        .map_err(error_response)?;
    Ok(Json(persons))
}

/// Create a person
pub async fn create_person(
    State(state): State<ApiState>,
    Json(payload): Json<Person>,
) -> Result<Json<Person>, ApiError> {
    let person = state.service.save(payload).await.map_err(error_response)?;

    tracing::info!("Created person {:?}", person.id);

    Ok(Json(person))
}
