//! Avatar factory for creating test avatar entities.
//!
//! Avatars created here only live in the database; `file_path` stays unset unless
//! given explicitly.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test avatars with customizable fields.
pub struct AvatarFactory<'a> {
    db: &'a DatabaseConnection,
    media_type: String,
    data: Vec<u8>,
    file_path: Option<String>,
}

impl<'a> AvatarFactory<'a> {
    /// Creates a new AvatarFactory with default values.
    ///
    /// Defaults:
    /// - media_type: `"image/png"`
    /// - data: 4 bytes of PNG signature
    /// - file_path: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            media_type: "image/png".to_string(),
            data: vec![0x89, b'P', b'N', b'G'],
            file_path: None,
        }
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Sets the content; `file_size` follows its length.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Builds and inserts the avatar entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::avatar::Model)` - Created avatar entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::avatar::Model, DbErr> {
        entity::avatar::ActiveModel {
            media_type: ActiveValue::Set(self.media_type),
            file_size: ActiveValue::Set(self.data.len() as i64),
            data: ActiveValue::Set(self.data),
            file_path: ActiveValue::Set(self.file_path),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an avatar with default values.
pub async fn create_avatar(db: &DatabaseConnection) -> Result<entity::avatar::Model, DbErr> {
    AvatarFactory::new(db).build().await
}
