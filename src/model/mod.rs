//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models convert into
//! them at the controller boundary via `into_dto()`.

pub mod api;
pub mod avatar;
pub mod faculty;
pub mod student;
