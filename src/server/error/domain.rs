use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookups that found no matching row.
///
/// Every variant carries the id that was looked up. The `Display` text is the
/// English message written to the log; clients receive the localized message
/// from [`DomainError::localized_message`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Student with id = {0} not found!")]
    StudentNotFound(i32),

    #[error("Faculty with id = {0} not found!")]
    FacultyNotFound(i32),

    #[error("Avatar with id = {0} not found!")]
    AvatarNotFound(i32),

    /// The student exists but has no faculty assigned.
    #[error("Student with id = {0} don't have faculty!")]
    StudentHasNoFaculty(i32),
}

impl DomainError {
    /// Client-facing message naming the offending id.
    pub fn localized_message(&self) -> String {
        match self {
            Self::StudentNotFound(id) => format!("Студент с id = {} не найден!", id),
            Self::FacultyNotFound(id) => format!("Факультет с id = {} не найден!", id),
            Self::AvatarNotFound(id) => format!("Аватар с id = {} не найден!", id),
            Self::StudentHasNoFaculty(id) => {
                format!("У студента с id = {} не найден факультет!", id)
            }
        }
    }
}

/// Converts domain errors into HTTP responses.
///
/// All variants map to 404 Not Found with the localized message in the body.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.localized_message(),
            }),
        )
            .into_response()
    }
}
