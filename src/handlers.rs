use axum::extract::{Path, Query, State};
use axum::Json;

use crate::dtos::{CalculateParams, CalculateResult, CreatePersonParams, Greeting, PersonDto};
use crate::error::ApiError;
use crate::utils::{self, Calculator};
use crate::AppState;

/// Greet a person by name
///
/// Always succeeds and returns a deterministic greeting for the given name.
#[utoipa::path(
    get,
    path = "/greet/{name}",
    params(("name" = String, Path, description = "Name to greet")),
    responses(
        (status = 200, description = "Greeting message", body = Greeting)
    )
)]
pub async fn greet(Path(name): Path<String>) -> Json<Greeting> {
    Json(Greeting {
        message: utils::greet(&name),
    })
}

/// Add two numbers
#[utoipa::path(
    post,
    path = "/calculate",
    params(CalculateParams),
    responses(
        (status = 200, description = "Sum of a and b", body = CalculateResult)
    )
)]
pub async fn calculate(Query(params): Query<CalculateParams>) -> Json<CalculateResult> {
    Json(CalculateResult {
        result: Calculator::add(params.a, params.b),
    })
}

/// Create a person
///
/// Inserts one row and returns the persisted record with its assigned id.
#[utoipa::path(
    post,
    path = "/person/",
    params(CreatePersonParams),
    responses(
        (status = 200, description = "The created person", body = PersonDto)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    Query(params): Query<CreatePersonParams>,
) -> Result<Json<PersonDto>, ApiError> {
    let person = state.repo.insert(&params.name, params.age).await?;
    Ok(Json(person.into()))
}

/// Get a person by id
#[utoipa::path(
    get,
    path = "/person/{person_id}",
    params(("person_id" = i32, Path, description = "Primary key of the person")),
    responses(
        (status = 200, description = "The requested person", body = PersonDto),
        (status = 404, description = "No person with that id")
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<Json<PersonDto>, ApiError> {
    let person = state
        .repo
        .find_by_id(person_id)
        .await?
        .ok_or(ApiError::NotFound("Person not found"))?;
    Ok(Json(person.into()))
}
