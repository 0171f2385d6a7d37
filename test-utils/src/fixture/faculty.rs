//! Faculty fixtures for creating in-memory test data.

use entity::faculty;

/// Default test faculty name.
pub const DEFAULT_NAME: &str = "Гриффиндор";

/// Default test faculty color.
pub const DEFAULT_COLOR: &str = "красный";

/// Creates a faculty entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Гриффиндор"`
/// - color: `"красный"`
pub fn entity() -> faculty::Model {
    entity_builder().build()
}

/// Creates a faculty entity builder for customization.
pub fn entity_builder() -> FacultyEntityBuilder {
    FacultyEntityBuilder::default()
}

/// Builder for creating customized faculty entity models.
pub struct FacultyEntityBuilder {
    id: i32,
    name: String,
    color: String,
}

impl Default for FacultyEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl FacultyEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builds and returns the faculty entity model.
    pub fn build(self) -> faculty::Model {
        faculty::Model {
            id: self.id,
            name: self.name,
            color: self.color,
        }
    }
}
