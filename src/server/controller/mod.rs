//! HTTP request handlers.
//!
//! Controllers extract request data, construct the matching service from the
//! shared [`AppState`](crate::server::state::AppState), and convert domain models
//! to DTOs. Errors are returned as [`AppError`](crate::server::error::AppError)
//! and rendered by its `IntoResponse` implementation.

pub mod avatar;
pub mod faculty;
pub mod info;
pub mod student;

#[cfg(test)]
mod test;
