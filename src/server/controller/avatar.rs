use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, avatar::AvatarDto},
    server::{
        error::AppError,
        model::avatar::{AvatarContent, UploadAvatarParams},
        service::avatar::AvatarService,
        state::AppState,
    },
};

/// Tag for grouping avatar endpoints in OpenAPI documentation
pub static AVATAR_TAG: &str = "avatar";

/// Multipart part carrying the uploaded file
const AVATAR_PART: &str = "avatarFile";

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

pub fn avatar_upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(10 * 1024 * 1024) // 10 MB
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number starting at 1
    pub page: u64,
    /// Avatars per page, at least 1
    pub size: u64,
}

/// Picks the media type from the part header, then the file name.
fn resolve_media_type(content_type: Option<&str>, file_name: Option<&str>) -> String {
    if let Some(content_type) = content_type.filter(|c| !c.is_empty()) {
        return content_type.to_string();
    }

    file_name
        .and_then(|name| mime_guess::from_path(name).first())
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string())
}

fn content_response(content: AvatarContent) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, content.media_type),
            (header::CONTENT_LENGTH, content.data.len().to_string()),
        ],
        content.data,
    )
}

/// Upload a new avatar.
///
/// The file is stored both in the database and in the configured avatars
/// folder. Any multipart parts other than `avatarFile` are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection and avatars folder
/// - `multipart` - Multipart body with the `avatarFile` part
///
/// # Returns
/// - `201 Created` - The stored avatar with its retrieval URL
/// - `400 Bad Request` - Malformed body or missing `avatarFile` part
/// - `500 Internal Server Error` - Database or file system error
#[utoipa::path(
    post,
    path = "/avatars",
    tag = AVATAR_TAG,
    request_body(content_type = "multipart/form-data", description = "Avatar file in the `avatarFile` part"),
    responses(
        (status = 201, description = "Successfully uploaded avatar", body = AvatarDto),
        (status = 400, description = "Missing or malformed avatar file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload: Option<UploadAvatarParams> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        if field.name() != Some(AVATAR_PART) {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let media_type = resolve_media_type(field.content_type(), file_name.as_deref());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read avatar file: {e}")))?;

        upload = Some(UploadAvatarParams {
            file_name,
            media_type,
            data: Vec::from(data),
        });
    }

    let params = upload
        .ok_or_else(|| AppError::BadRequest(format!("Missing '{}' part", AVATAR_PART)))?;

    let avatar = AvatarService::new(&state.db, &state.avatars_folder)
        .upload(params)
        .await?;

    Ok((StatusCode::CREATED, Json(avatar.into_dto(&state.app_url))))
}

/// Download avatar content stored in the database.
///
/// # Returns
/// - `200 OK` - Raw bytes with the stored media type
/// - `404 Not Found` - No avatar with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/avatars/{id}/from-db",
    tag = AVATAR_TAG,
    params(("id" = i32, Path, description = "Avatar id")),
    responses(
        (status = 200, description = "Avatar content", content_type = "application/octet-stream"),
        (status = 404, description = "Avatar not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_avatar_from_db(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let content = AvatarService::new(&state.db, &state.avatars_folder)
        .read_from_db(id)
        .await?;

    Ok(content_response(content))
}

/// Download avatar content from the file written on upload.
///
/// # Returns
/// - `200 OK` - Raw bytes with the stored media type
/// - `404 Not Found` - No avatar with that id
/// - `500 Internal Server Error` - File missing or unreadable, or database error
#[utoipa::path(
    get,
    path = "/avatars/{id}/from-fs",
    tag = AVATAR_TAG,
    params(("id" = i32, Path, description = "Avatar id")),
    responses(
        (status = 200, description = "Avatar content", content_type = "application/octet-stream"),
        (status = 404, description = "Avatar not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_avatar_from_fs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let content = AvatarService::new(&state.db, &state.avatars_folder)
        .read_from_fs(id)
        .await?;

    Ok(content_response(content))
}

/// List one page of avatars ordered by id.
///
/// # Returns
/// - `200 OK` - Avatars on the page, empty past the last page
/// - `400 Bad Request` - `page` or `size` below 1
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/avatars",
    tag = AVATAR_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Avatars on the page", body = Vec<AvatarDto>),
        (status = 400, description = "Invalid page or size", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_avatars(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let avatars = AvatarService::new(&state.db, &state.avatars_folder)
        .list_paged(params.page, params.size)
        .await?;

    let avatars: Vec<AvatarDto> = avatars
        .into_iter()
        .map(|a| a.into_dto(&state.app_url))
        .collect();

    Ok(Json(avatars))
}
