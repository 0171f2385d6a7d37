use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarDto {
    pub id: i32,
    pub media_type: String,
    /// Absolute URL serving the avatar content from the database.
    pub url: String,
}
