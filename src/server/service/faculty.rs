//! Faculty business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{faculty::FacultyRepository, student::StudentRepository},
    error::{domain::DomainError, AppError},
    model::{
        faculty::{CreateFacultyParams, Faculty, UpdateFacultyParams},
        student::Student,
    },
};

pub struct FacultyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacultyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new faculty
    pub async fn create(&self, params: CreateFacultyParams) -> Result<Faculty, AppError> {
        tracing::info!("Creating faculty {}", params.name);

        Ok(FacultyRepository::new(self.db).create(params).await?)
    }

    /// Gets a faculty by id
    pub async fn get_by_id(&self, id: i32) -> Result<Faculty, AppError> {
        tracing::info!("Reading faculty {}", id);

        FacultyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::FacultyNotFound(id).into())
    }

    /// Overwrites name and color of an existing faculty
    pub async fn update(&self, params: UpdateFacultyParams) -> Result<Faculty, AppError> {
        tracing::info!("Updating faculty {}", params.id);

        let repo = FacultyRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(DomainError::FacultyNotFound(params.id).into());
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes a faculty and returns the snapshot taken before removal
    ///
    /// Students of the faculty keep existing with their faculty cleared.
    pub async fn delete(&self, id: i32) -> Result<Faculty, AppError> {
        tracing::info!("Deleting faculty {}", id);

        let repo = FacultyRepository::new(self.db);

        let faculty = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FacultyNotFound(id))?;

        repo.delete(id).await?;

        Ok(faculty)
    }

    pub async fn get_all(&self) -> Result<Vec<Faculty>, AppError> {
        tracing::info!("Listing all faculties");

        Ok(FacultyRepository::new(self.db).get_all().await?)
    }

    /// Gets faculties whose color equals `color` exactly
    pub async fn find_by_color(&self, color: &str) -> Result<Vec<Faculty>, AppError> {
        tracing::info!("Finding faculties with color {}", color);

        Ok(FacultyRepository::new(self.db).find_by_color(color).await?)
    }

    /// Gets faculties whose name or color contains `filter`, ignoring case
    pub async fn find_by_filter_string(&self, filter: &str) -> Result<Vec<Faculty>, AppError> {
        tracing::info!("Finding faculties matching {}", filter);

        Ok(FacultyRepository::new(self.db)
            .find_by_name_or_color_containing(filter)
            .await?)
    }

    /// Gets the students assigned to a faculty
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)`: Students of the faculty, possibly empty
    /// - `Err(DomainError::FacultyNotFound)`: No faculty with that id
    pub async fn get_students(&self, id: i32) -> Result<Vec<Student>, AppError> {
        tracing::info!("Listing students of faculty {}", id);

        if FacultyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .is_none()
        {
            return Err(DomainError::FacultyNotFound(id).into());
        }

        Ok(StudentRepository::new(self.db)
            .find_by_faculty_id(id)
            .await?)
    }

    /// Gets the longest faculty name, or an empty string when there are no faculties
    pub async fn get_longest_name(&self) -> Result<String, AppError> {
        tracing::info!("Finding longest faculty name");

        let faculties = FacultyRepository::new(self.db).get_all().await?;
        let longest = longest_name(faculties.into_iter().map(|f| f.name));

        tracing::debug!("Longest faculty name: {}", longest);

        Ok(longest)
    }
}

/// Longest name by character count; the first of equally long names wins.
pub fn longest_name<I>(names: I) -> String
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .reduce(|longest, name| {
            if name.chars().count() > longest.chars().count() {
                name
            } else {
                longest
            }
        })
        .unwrap_or_default()
}
