//! Avatar fixtures for creating in-memory test data.

use entity::avatar;

/// Default test avatar media type.
pub const DEFAULT_MEDIA_TYPE: &str = "image/png";

/// Creates an avatar entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - media_type: `"image/png"`
/// - data: `[1, 2, 3]`, file_size `3`
/// - file_path: `None`
pub fn entity() -> avatar::Model {
    entity_builder().build()
}

/// Creates an avatar entity builder for customization.
pub fn entity_builder() -> AvatarEntityBuilder {
    AvatarEntityBuilder::default()
}

/// Builder for creating customized avatar entity models.
///
/// `file_size` always follows the length of `data`.
pub struct AvatarEntityBuilder {
    id: i32,
    media_type: String,
    data: Vec<u8>,
    file_path: Option<String>,
}

impl Default for AvatarEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            data: vec![1, 2, 3],
            file_path: None,
        }
    }
}

impl AvatarEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn file_path(mut self, file_path: Option<String>) -> Self {
        self.file_path = file_path;
        self
    }

    /// Builds and returns the avatar entity model.
    pub fn build(self) -> avatar::Model {
        avatar::Model {
            id: self.id,
            media_type: self.media_type,
            file_size: self.data.len() as i64,
            data: self.data,
            file_path: self.file_path,
        }
    }
}
