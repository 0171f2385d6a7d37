//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Faculty and avatar references must point to existing rows; use the faculty and
/// avatar factories first.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
    faculty_id: Option<i32>,
    avatar_id: Option<i32>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - age: `18`
    /// - faculty_id: `None`
    /// - avatar_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Student {}", next_id()),
            age: 18,
            faculty_id: None,
            avatar_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn faculty_id(mut self, faculty_id: i32) -> Self {
        self.faculty_id = Some(faculty_id);
        self
    }

    pub fn avatar_id(mut self, avatar_id: i32) -> Self {
        self.avatar_id = Some(avatar_id);
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            faculty_id: ActiveValue::Set(self.faculty_id),
            avatar_id: ActiveValue::Set(self.avatar_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values and no references.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
