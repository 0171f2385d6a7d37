use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        faculty::FacultyDto,
        student::{StudentAverageAgeDto, StudentDto, StudentListDto, StudentQuantityDto},
    },
    server::{
        error::AppError,
        model::student::{CreateStudentParams, Student, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Optional filters for listing students.
///
/// At most one filter family is applied, checked in field order. `minAge` and
/// `maxAge` only work together.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct StudentFilterParams {
    /// Exact age
    pub age: Option<i32>,
    /// Lower bound of the age range, inclusive
    pub min_age: Option<i32>,
    /// Upper bound of the age range, inclusive
    pub max_age: Option<i32>,
    /// Number of most recently added students to return
    pub last_added_size: Option<u64>,
    /// Name prefix; switches the response to a list of uppercased names
    pub first_char: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct FacultyIdParams {
    pub faculty_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct AvatarIdParams {
    pub avatar_id: i32,
}

fn into_dtos(students: Vec<Student>, app_url: &str) -> Vec<StudentDto> {
    students.into_iter().map(|s| s.into_dto(app_url)).collect()
}

/// Create a new student.
///
/// The student is created without faculty or avatar; `id`, `faculty` and
/// `avatar` in the payload are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student name and age
///
/// # Returns
/// - `201 Created` - The created student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.create(CreateStudentParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto(&state.app_url))))
}

/// Get a student by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student id
///
/// # Returns
/// - `200 OK` - The student with faculty and avatar embedded
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok(Json(student.into_dto(&state.app_url)))
}

/// Update a student's name and age.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student id
/// - `payload` - New name and age
///
/// # Returns
/// - `200 OK` - The updated student
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id")),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .update(UpdateStudentParams::from_dto(id, payload))
        .await?;

    Ok(Json(student.into_dto(&state.app_url)))
}

/// Delete a student.
///
/// # Returns
/// - `200 OK` - The student as it was before deletion
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Successfully deleted student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).delete(id).await?;

    Ok(Json(student.into_dto(&state.app_url)))
}

/// List students, optionally filtered.
///
/// Without filters every student is returned. `firstChar` returns a sorted list
/// of distinct uppercased names instead of student objects.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - One filter family: `age`, `minAge`+`maxAge`, `lastAddedSize` or `firstChar`
///
/// # Returns
/// - `200 OK` - Matching students, or names for `firstChar`
/// - `400 Bad Request` - Only one bound of the age range was given, or
///   `lastAddedSize` is out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    params(StudentFilterParams),
    responses(
        (status = 200, description = "Matching students, or uppercased names for `firstChar`", body = StudentListDto),
        (status = 400, description = "Incomplete age range or oversized `lastAddedSize`", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(params): Query<StudentFilterParams>,
) -> Result<Json<StudentListDto>, AppError> {
    let service = StudentService::new(&state.db);

    let students = match params {
        StudentFilterParams { age: Some(age), .. } => service.find_by_age(age).await?,
        StudentFilterParams {
            min_age: Some(min_age),
            max_age: Some(max_age),
            ..
        } => service.find_by_age_between(min_age, max_age).await?,
        StudentFilterParams {
            min_age: Some(_), ..
        }
        | StudentFilterParams {
            max_age: Some(_), ..
        } => {
            return Err(AppError::BadRequest(
                "minAge and maxAge must be given together".to_string(),
            ))
        }
        StudentFilterParams {
            last_added_size: Some(size),
            ..
        } => service.get_last_added(size).await?,
        StudentFilterParams {
            first_char: Some(prefix),
            ..
        } => {
            let names = service.get_names_starting_with(&prefix).await?;
            return Ok(Json(StudentListDto::Names(names)));
        }
        _ => service.get_all().await?,
    };

    Ok(Json(StudentListDto::Students(into_dtos(
        students,
        &state.app_url,
    ))))
}

/// Get the faculty of a student.
///
/// # Returns
/// - `200 OK` - The student's faculty
/// - `404 Not Found` - No student with that id, or the student has no faculty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}/faculty",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student's faculty", body = FacultyDto),
        (status = 404, description = "Student not found or without faculty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let faculty = StudentService::new(&state.db)
        .find_student_faculty(id)
        .await?;

    Ok(Json(faculty.into_dto()))
}

/// Assign a student to a faculty.
///
/// # Returns
/// - `200 OK` - The student with the new faculty
/// - `404 Not Found` - Student or faculty not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/students/{id}/faculty",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id"), FacultyIdParams),
    responses(
        (status = 200, description = "Successfully assigned faculty", body = StudentDto),
        (status = 404, description = "Student or faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<FacultyIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .update_faculty(id, params.faculty_id)
        .await?;

    Ok(Json(student.into_dto(&state.app_url)))
}

/// Assign an avatar to a student.
///
/// # Returns
/// - `200 OK` - The student with the new avatar
/// - `404 Not Found` - Student or avatar not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/students/{id}/avatar",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id"), AvatarIdParams),
    responses(
        (status = 200, description = "Successfully assigned avatar", body = StudentDto),
        (status = 404, description = "Student or avatar not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student_avatar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AvatarIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .update_avatar(id, params.avatar_id)
        .await?;

    Ok(Json(student.into_dto(&state.app_url)))
}

/// Count all students.
#[utoipa::path(
    get,
    path = "/students/quantity",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Number of students", body = StudentQuantityDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_quantity(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let quantity = StudentService::new(&state.db).get_quantity().await?;

    Ok(Json(quantity.into_dto()))
}

/// Average age of all students, computed by the database.
#[utoipa::path(
    get,
    path = "/students/age-average",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Average age, null without students", body = StudentAverageAgeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_average_age(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let average = StudentService::new(&state.db).get_average_age().await?;

    Ok(Json(average.into_dto()))
}

/// Average age of all students, computed in process.
#[utoipa::path(
    get,
    path = "/students/age-average-stream",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Average age, 0 without students", body = f64),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_average_age_in_process(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let average = StudentService::new(&state.db)
        .get_average_age_in_process()
        .await?;

    Ok(Json(average))
}

/// Print six student names to stdout from three threads without locking.
#[utoipa::path(
    get,
    path = "/students/print-parallel",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Names printed"),
        (status = 400, description = "Fewer than six students", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn print_parallel(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.printer.print_parallel(&state.db).await?;

    Ok(StatusCode::OK)
}

/// Print six student names to stdout from three threads through a shared lock.
#[utoipa::path(
    get,
    path = "/students/print-synchronized",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Names printed"),
        (status = 400, description = "Fewer than six students", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn print_synchronized(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.printer.print_synchronized(&state.db).await?;

    Ok(StatusCode::OK)
}
