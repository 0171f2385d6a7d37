//! Avatar storage.
//!
//! Every uploaded avatar is stored twice: as a blob in its database row and as a
//! file `<avatars_folder>/<id><ext>`. The row is inserted first with the metadata
//! to obtain the id, then the file is written, then the content and path are
//! stored on the row. If either of the last two steps fails the row is deleted
//! again, along with any written file.

use sea_orm::DatabaseConnection;
use std::path::Path;

use crate::server::{
    data::avatar::AvatarRepository,
    error::{domain::DomainError, AppError},
    model::avatar::{Avatar, AvatarContent, UploadAvatarParams},
};

/// Largest value SQLite binds as an integer.
const MAX_SQL_INTEGER: u64 = i64::MAX as u64;

pub struct AvatarService<'a> {
    db: &'a DatabaseConnection,
    avatars_folder: &'a Path,
}

impl<'a> AvatarService<'a> {
    pub fn new(db: &'a DatabaseConnection, avatars_folder: &'a Path) -> Self {
        Self { db, avatars_folder }
    }

    /// Stores an uploaded avatar in the database and on disk
    ///
    /// # Arguments
    /// - `params`: Original file name, media type and content of the upload
    ///
    /// # Returns
    /// - `Ok(Avatar)`: The stored avatar with its file path set
    /// - `Err(AppError::IoErr)`: The file could not be written; nothing is kept
    /// - `Err(AppError::DbErr)`: A database write failed; nothing is kept
    pub async fn upload(&self, params: UploadAvatarParams) -> Result<Avatar, AppError> {
        tracing::info!(
            "Uploading avatar {:?} ({}, {} bytes)",
            params.file_name,
            params.media_type,
            params.data.len()
        );

        let repo = AvatarRepository::new(self.db);
        let extension = params.extension();

        let avatar = repo
            .create(params.media_type, params.data.len() as i64)
            .await?;
        let file_path = self
            .avatars_folder
            .join(format!("{}{}", avatar.id, extension));

        tracing::debug!("Writing avatar {} to {}", avatar.id, file_path.display());

        if let Err(err) = self.write_file(&file_path, &params.data).await {
            tracing::error!("Failed to write avatar {}: {}", avatar.id, err);
            repo.delete(avatar.id).await?;
            return Err(err.into());
        }

        match repo
            .attach_content(
                avatar.id,
                params.data,
                file_path.to_string_lossy().into_owned(),
            )
            .await
        {
            Ok(avatar) => Ok(avatar),
            Err(err) => {
                tracing::error!("Failed to store content of avatar {}: {}", avatar.id, err);
                if let Err(remove_err) = tokio::fs::remove_file(&file_path).await {
                    tracing::warn!(
                        "Failed to remove {} after aborted upload: {}",
                        file_path.display(),
                        remove_err
                    );
                }
                repo.delete(avatar.id).await?;
                Err(err.into())
            }
        }
    }

    /// Gets avatar content from its database row
    pub async fn read_from_db(&self, id: i32) -> Result<AvatarContent, AppError> {
        tracing::info!("Reading avatar {} from database", id);

        AvatarRepository::new(self.db)
            .find_content_by_id(id)
            .await?
            .ok_or_else(|| DomainError::AvatarNotFound(id).into())
    }

    /// Gets avatar content from the file written on upload
    ///
    /// # Returns
    /// - `Ok(AvatarContent)`: Media type from the row, bytes from the file
    /// - `Err(DomainError::AvatarNotFound)`: No avatar with that id
    /// - `Err(AppError::IoErr)`: The path is unset or the file cannot be read
    pub async fn read_from_fs(&self, id: i32) -> Result<AvatarContent, AppError> {
        tracing::info!("Reading avatar {} from file system", id);

        let avatar = AvatarRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AvatarNotFound(id))?;

        let file_path = avatar.file_path.ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Avatar {} has no stored file", id),
            )
        })?;

        let data = tokio::fs::read(&file_path).await?;

        Ok(AvatarContent {
            media_type: avatar.media_type,
            data,
        })
    }

    /// Gets one page of avatars ordered by id
    ///
    /// # Arguments
    /// - `page`: 1-indexed page number
    /// - `size`: Number of avatars per page
    ///
    /// # Returns
    /// - `Ok(Vec<Avatar>)`: Avatars on the page, empty past the last page
    /// - `Err(AppError::BadRequest)`: `page` or `size` is below 1, or the page
    ///   starts beyond the largest offset SQLite accepts
    pub async fn list_paged(&self, page: u64, size: u64) -> Result<Vec<Avatar>, AppError> {
        tracing::info!("Listing avatars page {} of size {}", page, size);

        if page < 1 {
            return Err(AppError::BadRequest(
                "page must be at least 1".to_string(),
            ));
        }
        if size < 1 {
            return Err(AppError::BadRequest(
                "size must be at least 1".to_string(),
            ));
        }

        let in_range = match (page - 1).checked_mul(size) {
            Some(offset) => size <= MAX_SQL_INTEGER && offset <= MAX_SQL_INTEGER,
            None => false,
        };
        if !in_range {
            return Err(AppError::BadRequest(format!(
                "page {} of size {} is out of range",
                page, size
            )));
        }

        Ok(AvatarRepository::new(self.db)
            .get_paginated(page - 1, size)
            .await?)
    }

    async fn write_file(&self, file_path: &Path, data: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.avatars_folder).await?;
        tokio::fs::write(file_path, data).await
    }
}
