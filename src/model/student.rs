use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{avatar::AvatarDto, faculty::FacultyDto};

/// Student as exchanged with clients.
///
/// On requests only `name` and `age` are read; `id`, `faculty` and `avatar` are
/// assigned by the server and ignored if sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub faculty: Option<FacultyDto>,
    #[serde(default)]
    pub avatar: Option<AvatarDto>,
}

/// Response of the student list endpoint.
///
/// Serialized as a bare JSON array: student objects for most filters, uppercased
/// names for the name prefix filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum StudentListDto {
    Students(Vec<StudentDto>),
    Names(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentQuantityDto {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentAverageAgeDto {
    /// `null` when there are no students.
    pub average: Option<f64>,
}
