//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student records. Every
//! query returns students with their faculty and avatar references resolved; list
//! queries resolve references with one batched lookup per referenced table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::collections::HashMap;

use crate::server::{
    data::avatar::select_metadata,
    model::{
        avatar::Avatar,
        student::{
            CreateStudentParams, Student, StudentAverageAge, StudentQuantity,
            UpdateStudentParams,
        },
    },
};

#[derive(Debug, FromQueryResult)]
struct StudentCountRow {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct StudentAverageAgeRow {
    average: Option<f64>,
}

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student without faculty or avatar.
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            faculty_id: ActiveValue::Set(None),
            avatar_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity, None, None))
    }

    /// Finds a student by id with faculty and avatar resolved.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        match entity {
            Some(student) => Ok(Some(self.resolve(student).await?)),
            None => Ok(None),
        }
    }

    /// Gets all students ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        self.resolve_many(entities).await
    }

    /// Overwrites a student's name and age, leaving references untouched.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotFound)` - No student with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let mut active_model = self.find_active_model(params.id).await?;
        active_model.name = ActiveValue::Set(params.name);
        active_model.age = ActiveValue::Set(params.age);

        let entity = active_model.update(self.db).await?;

        self.resolve(entity).await
    }

    /// Points a student at a faculty.
    ///
    /// The caller is responsible for checking that the faculty exists.
    pub async fn update_faculty(&self, id: i32, faculty_id: i32) -> Result<Student, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.faculty_id = ActiveValue::Set(Some(faculty_id));

        let entity = active_model.update(self.db).await?;

        self.resolve(entity).await
    }

    /// Points a student at an avatar.
    ///
    /// The caller is responsible for checking that the avatar exists.
    pub async fn update_avatar(&self, id: i32, avatar_id: i32) -> Result<Student, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.avatar_id = ActiveValue::Set(Some(avatar_id));

        let entity = active_model.update(self.db).await?;

        self.resolve(entity).await
    }

    /// Deletes a student.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets students with exactly the given age.
    pub async fn find_by_age(&self, age: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Age.eq(age))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        self.resolve_many(entities).await
    }

    /// Gets students with `min <= age <= max`.
    pub async fn find_by_age_between(&self, min: i32, max: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Age.between(min, max))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        self.resolve_many(entities).await
    }

    /// Gets students assigned to a faculty.
    pub async fn find_by_faculty_id(&self, faculty_id: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::FacultyId.eq(faculty_id))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        self.resolve_many(entities).await
    }

    /// Gets the `limit` most recently added students, newest first.
    pub async fn get_last_added(&self, limit: u64) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_desc(entity::student::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.resolve_many(entities).await
    }

    /// Counts all students with a native `COUNT(*)` query.
    pub async fn get_quantity(&self) -> Result<StudentQuantity, DbErr> {
        let row = StudentCountRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT COUNT(*) AS count FROM student",
        ))
        .one(self.db)
        .await?;

        Ok(StudentQuantity {
            count: row.map(|r| r.count).unwrap_or(0),
        })
    }

    /// Averages student ages with a native `AVG(age)` query.
    pub async fn get_average_age(&self) -> Result<StudentAverageAge, DbErr> {
        let row = StudentAverageAgeRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT AVG(age) AS average FROM student",
        ))
        .one(self.db)
        .await?;

        Ok(StudentAverageAge {
            average: row.and_then(|r| r.average),
        })
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::student::ActiveModel, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                id
            )))?;

        Ok(student.into())
    }

    /// Loads the faculty and avatar referenced by a single student.
    async fn resolve(&self, student: entity::student::Model) -> Result<Student, DbErr> {
        let faculty = match student.faculty_id {
            Some(faculty_id) => {
                entity::prelude::Faculty::find_by_id(faculty_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        let avatar = match student.avatar_id {
            Some(avatar_id) => {
                select_metadata()
                    .filter(entity::avatar::Column::Id.eq(avatar_id))
                    .into_model::<Avatar>()
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Student::from_entity(student, faculty, avatar))
    }

    /// Loads the faculties and avatars referenced by a list of students in one
    /// query per table, preserving the input order.
    async fn resolve_many(
        &self,
        students: Vec<entity::student::Model>,
    ) -> Result<Vec<Student>, DbErr> {
        let faculty_ids: Vec<i32> = students.iter().filter_map(|s| s.faculty_id).collect();
        let faculties: HashMap<i32, entity::faculty::Model> = if !faculty_ids.is_empty() {
            entity::prelude::Faculty::find()
                .filter(entity::faculty::Column::Id.is_in(faculty_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|f| (f.id, f))
                .collect()
        } else {
            HashMap::new()
        };

        let avatar_ids: Vec<i32> = students.iter().filter_map(|s| s.avatar_id).collect();
        let avatars: HashMap<i32, Avatar> = if !avatar_ids.is_empty() {
            select_metadata()
                .filter(entity::avatar::Column::Id.is_in(avatar_ids))
                .into_model::<Avatar>()
                .all(self.db)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(students
            .into_iter()
            .map(|s| {
                let faculty = s.faculty_id.and_then(|id| faculties.get(&id).cloned());
                let avatar = s.avatar_id.and_then(|id| avatars.get(&id).cloned());
                Student::from_entity(s, faculty, avatar)
            })
            .collect())
    }
}
