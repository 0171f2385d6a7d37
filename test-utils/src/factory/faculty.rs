//! Faculty factory for creating test faculty entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test faculties with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::faculty::FacultyFactory;
///
/// let faculty = FacultyFactory::new(&db)
///     .name("Гриффиндор")
///     .color("красный")
///     .build()
///     .await?;
/// ```
pub struct FacultyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: String,
}

impl<'a> FacultyFactory<'a> {
    /// Creates a new FacultyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Faculty {id}"` where id is auto-incremented
    /// - color: `"red"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `FacultyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Faculty {}", next_id()),
            color: "red".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builds and inserts the faculty entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::faculty::Model)` - Created faculty entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::faculty::Model, DbErr> {
        entity::faculty::ActiveModel {
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a faculty with default values.
///
/// Shorthand for `FacultyFactory::new(db).build().await`.
pub async fn create_faculty(db: &DatabaseConnection) -> Result<entity::faculty::Model, DbErr> {
    FacultyFactory::new(db).build().await
}
