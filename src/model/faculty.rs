use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Faculty as exchanged with clients.
///
/// The `id` is ignored when the DTO is used as a request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacultyDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub color: String,
}
