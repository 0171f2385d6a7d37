use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, faculty::FacultyDto, student::StudentDto},
    server::{
        error::AppError,
        model::faculty::{CreateFacultyParams, Faculty, UpdateFacultyParams},
        service::faculty::FacultyService,
        state::AppState,
    },
};

/// Tag for grouping faculty endpoints in OpenAPI documentation
pub static FACULTY_TAG: &str = "faculty";

/// Optional filters for listing faculties; `color` wins when both are given.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct FacultyFilterParams {
    /// Exact color
    pub color: Option<String>,
    /// Case-insensitive substring of name or color
    pub filter_string: Option<String>,
}

fn into_dtos(faculties: Vec<Faculty>) -> Vec<FacultyDto> {
    faculties.into_iter().map(Faculty::into_dto).collect()
}

/// Create a new faculty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Faculty name and color; `id` is ignored
///
/// # Returns
/// - `201 Created` - The created faculty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/faculties",
    tag = FACULTY_TAG,
    request_body = FacultyDto,
    responses(
        (status = 201, description = "Successfully created faculty", body = FacultyDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_faculty(
    State(state): State<AppState>,
    Json(payload): Json<FacultyDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    let faculty = service.create(CreateFacultyParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(faculty.into_dto())))
}

/// Get a faculty by id.
///
/// # Returns
/// - `200 OK` - The faculty
/// - `404 Not Found` - No faculty with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/faculties/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty id")),
    responses(
        (status = 200, description = "Successfully retrieved faculty", body = FacultyDto),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let faculty = FacultyService::new(&state.db).get_by_id(id).await?;

    Ok(Json(faculty.into_dto()))
}

/// Update a faculty's name and color.
///
/// # Returns
/// - `200 OK` - The updated faculty
/// - `404 Not Found` - No faculty with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/faculties/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty id")),
    request_body = FacultyDto,
    responses(
        (status = 200, description = "Successfully updated faculty", body = FacultyDto),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FacultyDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    let faculty = service
        .update(UpdateFacultyParams::from_dto(id, payload))
        .await?;

    Ok(Json(faculty.into_dto()))
}

/// Delete a faculty.
///
/// Students of the faculty are kept with their faculty cleared.
///
/// # Returns
/// - `200 OK` - The faculty as it was before deletion
/// - `404 Not Found` - No faculty with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/faculties/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty id")),
    responses(
        (status = 200, description = "Successfully deleted faculty", body = FacultyDto),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let faculty = FacultyService::new(&state.db).delete(id).await?;

    Ok(Json(faculty.into_dto()))
}

/// List faculties, optionally filtered by color or by a search string.
///
/// # Returns
/// - `200 OK` - Matching faculties, all of them without filters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/faculties",
    tag = FACULTY_TAG,
    params(FacultyFilterParams),
    responses(
        (status = 200, description = "Matching faculties", body = Vec<FacultyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculties(
    State(state): State<AppState>,
    Query(params): Query<FacultyFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    let faculties = match (params.color, params.filter_string) {
        (Some(color), _) => service.find_by_color(&color).await?,
        (None, Some(filter)) => service.find_by_filter_string(&filter).await?,
        (None, None) => service.get_all().await?,
    };

    Ok(Json(into_dtos(faculties)))
}

/// List the students of a faculty.
///
/// # Returns
/// - `200 OK` - Students of the faculty
/// - `404 Not Found` - No faculty with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/faculties/{id}/students",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty id")),
    responses(
        (status = 200, description = "Students of the faculty", body = Vec<StudentDto>),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculty_students(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let students = FacultyService::new(&state.db).get_students(id).await?;

    let students: Vec<StudentDto> = students
        .into_iter()
        .map(|s| s.into_dto(&state.app_url))
        .collect();

    Ok(Json(students))
}

/// Get the longest faculty name, an empty string when there are no faculties.
#[utoipa::path(
    get,
    path = "/faculties/longest-name",
    tag = FACULTY_TAG,
    responses(
        (status = 200, description = "Longest faculty name", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_longest_faculty_name(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let name = FacultyService::new(&state.db).get_longest_name().await?;

    Ok(Json(name))
}
