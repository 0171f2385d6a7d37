//! Student fixtures for creating in-memory test data.

use entity::student;

/// Default test student name.
pub const DEFAULT_NAME: &str = "Гарри Поттер";

/// Default test student age.
pub const DEFAULT_AGE: i32 = 17;

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Гарри Поттер"`
/// - age: `17`
/// - faculty_id: `None`
/// - avatar_id: `None`
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct StudentEntityBuilder {
    id: i32,
    name: String,
    age: i32,
    faculty_id: Option<i32>,
    avatar_id: Option<i32>,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            age: DEFAULT_AGE,
            faculty_id: None,
            avatar_id: None,
        }
    }
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn faculty_id(mut self, faculty_id: Option<i32>) -> Self {
        self.faculty_id = faculty_id;
        self
    }

    pub fn avatar_id(mut self, avatar_id: Option<i32>) -> Self {
        self.avatar_id = avatar_id;
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            id: self.id,
            name: self.name,
            age: self.age,
            faculty_id: self.faculty_id,
            avatar_id: self.avatar_id,
        }
    }
}
