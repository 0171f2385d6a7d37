//! Faculty domain models and parameters.
//!
//! Provides the faculty domain model along with parameter types for create and
//! update operations. Conversion from entity models happens at the repository
//! boundary and conversion to DTOs at the controller boundary.

use crate::model::faculty::FacultyDto;

/// Faculty with its display name and house color.
#[derive(Debug, Clone, PartialEq)]
pub struct Faculty {
    pub id: i32,
    pub name: String,
    pub color: String,
}

impl Faculty {
    /// Converts the faculty domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `FacultyDto` - The converted faculty DTO
    pub fn into_dto(self) -> FacultyDto {
        FacultyDto {
            id: self.id,
            name: self.name,
            color: self.color,
        }
    }

    /// Converts an entity model to a faculty domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Faculty` - The converted faculty domain model
    pub fn from_entity(entity: entity::faculty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
        }
    }
}

/// Parameters for creating a new faculty.
#[derive(Debug, Clone)]
pub struct CreateFacultyParams {
    pub name: String,
    pub color: String,
}

impl CreateFacultyParams {
    /// Builds creation parameters from a request DTO.
    ///
    /// The DTO's `id` is never copied, ids are assigned by the database.
    pub fn from_dto(dto: FacultyDto) -> Self {
        Self {
            name: dto.name,
            color: dto.color,
        }
    }
}

/// Parameters for updating an existing faculty's name and color.
#[derive(Debug, Clone)]
pub struct UpdateFacultyParams {
    /// ID of the faculty to update.
    pub id: i32,
    pub name: String,
    pub color: String,
}

impl UpdateFacultyParams {
    /// Builds update parameters from the path id and a request DTO.
    pub fn from_dto(id: i32, dto: FacultyDto) -> Self {
        Self {
            id,
            name: dto.name,
            color: dto.color,
        }
    }
}
