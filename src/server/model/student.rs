//! Student domain models and parameters.
//!
//! A student optionally references one faculty and one avatar. Repositories always
//! return students with those references already resolved, so callers never issue
//! follow-up lookups.

use crate::{
    model::student::{StudentAverageAgeDto, StudentDto, StudentQuantityDto},
    server::model::{avatar::Avatar, faculty::Faculty},
};

/// Student with resolved faculty and avatar references.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    /// Faculty the student is assigned to, if any.
    pub faculty: Option<Faculty>,
    /// Avatar attached to the student, if any.
    pub avatar: Option<Avatar>,
}

impl Student {
    /// Converts the student domain model to a DTO for API responses.
    ///
    /// Nested faculty and avatar are converted as well; the avatar needs the
    /// application URL to build its retrieval link.
    ///
    /// # Arguments
    /// - `app_url` - Public base URL of the application
    ///
    /// # Returns
    /// - `StudentDto` - The converted student DTO
    pub fn into_dto(self, app_url: &str) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            age: self.age,
            faculty: self.faculty.map(Faculty::into_dto),
            avatar: self.avatar.map(|a| a.into_dto(app_url)),
        }
    }

    /// Converts entity models to a student domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The student entity model
    /// - `faculty` - The referenced faculty entity, if the student has one
    /// - `avatar` - The referenced avatar metadata, if the student has one
    ///
    /// # Returns
    /// - `Student` - The converted student domain model
    pub fn from_entity(
        entity: entity::student::Model,
        faculty: Option<entity::faculty::Model>,
        avatar: Option<Avatar>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            faculty: faculty.map(Faculty::from_entity),
            avatar,
        }
    }
}

/// Parameters for creating a new student.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: String,
    pub age: i32,
}

impl CreateStudentParams {
    /// Builds creation parameters from a request DTO.
    ///
    /// Neither the id nor the nested faculty/avatar are taken from the DTO; those
    /// are assigned through the dedicated relationship endpoints.
    pub fn from_dto(dto: StudentDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
        }
    }
}

/// Parameters for updating a student's name and age.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    /// ID of the student to update.
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl UpdateStudentParams {
    /// Builds update parameters from the path id and a request DTO.
    pub fn from_dto(id: i32, dto: StudentDto) -> Self {
        Self {
            id,
            name: dto.name,
            age: dto.age,
        }
    }
}

/// Total number of students.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentQuantity {
    pub count: i64,
}

impl StudentQuantity {
    pub fn into_dto(self) -> StudentQuantityDto {
        StudentQuantityDto { count: self.count }
    }
}

/// Average age across all students, absent when there are none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentAverageAge {
    pub average: Option<f64>,
}

impl StudentAverageAge {
    pub fn into_dto(self) -> StudentAverageAgeDto {
        StudentAverageAgeDto {
            average: self.average,
        }
    }
}
