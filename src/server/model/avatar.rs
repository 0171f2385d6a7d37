//! Avatar domain models and parameters.
//!
//! Avatars are stored twice: the raw bytes live in the database row and a copy is
//! written to the configured avatars folder. The domain model below carries only
//! the metadata; content is returned separately as `AvatarContent` so that list
//! queries never move image bytes around.

use sea_orm::FromQueryResult;

use crate::model::avatar::AvatarDto;

/// Avatar metadata, selected straight from the metadata columns of its row.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct Avatar {
    pub id: i32,
    /// MIME type reported when the avatar was uploaded.
    pub media_type: String,
    /// Size of the content in bytes.
    pub file_size: i64,
    /// Location of the on-disk copy; `None` until the upload has written the file.
    pub file_path: Option<String>,
}

impl Avatar {
    /// Converts the avatar domain model to a DTO for API responses.
    ///
    /// Synthesizes the retrieval URL `<app_url>/avatars/<id>/from-db`.
    ///
    /// # Arguments
    /// - `app_url` - Public base URL of the application
    ///
    /// # Returns
    /// - `AvatarDto` - The converted avatar DTO
    pub fn into_dto(self, app_url: &str) -> AvatarDto {
        AvatarDto {
            url: avatar_url(app_url, self.id),
            id: self.id,
            media_type: self.media_type,
        }
    }
}

/// Builds the URL that serves an avatar's content from the database.
pub fn avatar_url(app_url: &str, id: i32) -> String {
    format!("{}/avatars/{}/from-db", app_url.trim_end_matches('/'), id)
}

/// Raw avatar content together with its media type.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarContent {
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Parameters for storing a newly uploaded avatar.
#[derive(Debug, Clone)]
pub struct UploadAvatarParams {
    /// Original file name sent by the client, used only for its extension.
    pub file_name: Option<String>,
    pub media_type: String,
    pub data: Vec<u8>,
}

impl UploadAvatarParams {
    /// Extension of the original file name including the leading dot.
    ///
    /// Returns an empty string when no file name was sent or it has no extension.
    pub fn extension(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| std::path::Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }
}
