//! Student business logic.
//!
//! Lookups that find nothing are reported as [`DomainError`] variants naming the
//! missing id. Relationship mutators check that both sides exist before writing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{avatar::AvatarRepository, faculty::FacultyRepository, student::StudentRepository},
    error::{domain::DomainError, AppError},
    model::{
        faculty::Faculty,
        student::{
            CreateStudentParams, Student, StudentAverageAge, StudentQuantity, UpdateStudentParams,
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student without faculty or avatar
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        tracing::info!("Creating student {}", params.name);

        let repo = StudentRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets a student by id with faculty and avatar resolved
    pub async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        tracing::info!("Reading student {}", id);

        let repo = StudentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::StudentNotFound(id).into())
    }

    /// Overwrites name and age of an existing student
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, AppError> {
        tracing::info!("Updating student {}", params.id);

        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(DomainError::StudentNotFound(params.id).into());
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes a student and returns the snapshot taken before removal
    pub async fn delete(&self, id: i32) -> Result<Student, AppError> {
        tracing::info!("Deleting student {}", id);

        let repo = StudentRepository::new(self.db);

        let student = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::StudentNotFound(id))?;

        repo.delete(id).await?;

        Ok(student)
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        tracing::info!("Listing all students");

        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    pub async fn find_by_age(&self, age: i32) -> Result<Vec<Student>, AppError> {
        tracing::info!("Finding students aged {}", age);

        Ok(StudentRepository::new(self.db).find_by_age(age).await?)
    }

    /// Gets students with `min_age <= age <= max_age`
    pub async fn find_by_age_between(
        &self,
        min_age: i32,
        max_age: i32,
    ) -> Result<Vec<Student>, AppError> {
        tracing::info!("Finding students aged {} to {}", min_age, max_age);

        Ok(StudentRepository::new(self.db)
            .find_by_age_between(min_age, max_age)
            .await?)
    }

    /// Gets the faculty a student belongs to
    ///
    /// # Returns
    /// - `Ok(Faculty)`: The student's faculty
    /// - `Err(DomainError::StudentNotFound)`: No student with that id
    /// - `Err(DomainError::StudentHasNoFaculty)`: The student has no faculty assigned
    pub async fn find_student_faculty(&self, id: i32) -> Result<Faculty, AppError> {
        tracing::info!("Finding faculty of student {}", id);

        let student = self.get_by_id(id).await?;

        student
            .faculty
            .ok_or_else(|| DomainError::StudentHasNoFaculty(id).into())
    }

    /// Assigns a student to a faculty
    ///
    /// The student is looked up first, so when both ids are unknown the error
    /// names the student.
    pub async fn update_faculty(&self, id: i32, faculty_id: i32) -> Result<Student, AppError> {
        tracing::info!("Assigning faculty {} to student {}", faculty_id, id);

        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::StudentNotFound(id).into());
        }
        if FacultyRepository::new(self.db)
            .find_by_id(faculty_id)
            .await?
            .is_none()
        {
            return Err(DomainError::FacultyNotFound(faculty_id).into());
        }

        Ok(repo.update_faculty(id, faculty_id).await?)
    }

    /// Assigns an avatar to a student
    pub async fn update_avatar(&self, id: i32, avatar_id: i32) -> Result<Student, AppError> {
        tracing::info!("Assigning avatar {} to student {}", avatar_id, id);

        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::StudentNotFound(id).into());
        }
        if AvatarRepository::new(self.db)
            .find_by_id(avatar_id)
            .await?
            .is_none()
        {
            return Err(DomainError::AvatarNotFound(avatar_id).into());
        }

        Ok(repo.update_avatar(id, avatar_id).await?)
    }

    pub async fn get_quantity(&self) -> Result<StudentQuantity, AppError> {
        tracing::info!("Counting students");

        Ok(StudentRepository::new(self.db).get_quantity().await?)
    }

    pub async fn get_average_age(&self) -> Result<StudentAverageAge, AppError> {
        tracing::info!("Averaging student ages");

        Ok(StudentRepository::new(self.db).get_average_age().await?)
    }

    /// Gets the most recently added students, newest first
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)`: At most `size` students
    /// - `Err(AppError::BadRequest)`: `size` is larger than SQLite can bind
    pub async fn get_last_added(&self, size: u64) -> Result<Vec<Student>, AppError> {
        tracing::info!("Reading last {} added students", size);

        if i64::try_from(size).is_err() {
            return Err(AppError::BadRequest(format!(
                "lastAddedSize {} is out of range",
                size
            )));
        }

        Ok(StudentRepository::new(self.db).get_last_added(size).await?)
    }

    /// Gets uppercased names of students whose name starts with `prefix`
    ///
    /// The match is case-sensitive. Results are sorted and deduplicated.
    pub async fn get_names_starting_with(&self, prefix: &str) -> Result<Vec<String>, AppError> {
        tracing::info!("Finding student names starting with {}", prefix);

        let students = StudentRepository::new(self.db).get_all().await?;
        let names = students.into_iter().map(|s| s.name);

        Ok(names_starting_with(names, prefix))
    }

    /// Averages ages over all students loaded into memory
    ///
    /// Returns 0.0 when there are no students.
    pub async fn get_average_age_in_process(&self) -> Result<f64, AppError> {
        tracing::info!("Averaging student ages in process");

        let students = StudentRepository::new(self.db).get_all().await?;
        let average = average_age(students.iter().map(|s| s.age));

        tracing::debug!("In-process average age: {}", average);

        Ok(average)
    }
}

/// Uppercases the names starting with `prefix`, sorted ascending without duplicates.
pub fn names_starting_with<I>(names: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut matched: Vec<String> = names
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .map(|name| name.to_uppercase())
        .collect();

    matched.sort();
    matched.dedup();
    matched
}

/// Arithmetic mean of the ages, 0.0 for an empty input.
pub fn average_age<I>(ages: I) -> f64
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = ages
        .into_iter()
        .fold((0i64, 0u64), |(sum, count), age| (sum + age as i64, count + 1));

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
