//! Faculty data repository for database operations.
//!
//! This module provides the `FacultyRepository` for managing faculty records. It
//! converts entity models to faculty domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::faculty::{CreateFacultyParams, Faculty, UpdateFacultyParams};

/// Repository providing database operations for faculties.
pub struct FacultyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacultyRepository<'a> {
    /// Creates a new FacultyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FacultyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new faculty and returns it with its generated id.
    pub async fn create(&self, params: CreateFacultyParams) -> Result<Faculty, DbErr> {
        let entity = entity::faculty::ActiveModel {
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Faculty::from_entity(entity))
    }

    /// Finds a faculty by id.
    ///
    /// # Returns
    /// - `Ok(Some(Faculty))` - Faculty found
    /// - `Ok(None)` - No faculty with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Faculty>, DbErr> {
        let entity = entity::prelude::Faculty::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Faculty::from_entity))
    }

    /// Gets all faculties ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Faculty>, DbErr> {
        let entities = entity::prelude::Faculty::find()
            .order_by_asc(entity::faculty::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Faculty::from_entity).collect())
    }

    /// Overwrites a faculty's name and color.
    ///
    /// # Returns
    /// - `Ok(Faculty)` - The updated faculty
    /// - `Err(DbErr::RecordNotFound)` - No faculty with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateFacultyParams) -> Result<Faculty, DbErr> {
        let faculty = entity::prelude::Faculty::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Faculty with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::faculty::ActiveModel = faculty.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.color = ActiveValue::Set(params.color);

        let entity = active_model.update(self.db).await?;

        Ok(Faculty::from_entity(entity))
    }

    /// Deletes a faculty. Students referencing it lose their faculty reference.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Faculty::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets faculties whose color matches exactly.
    pub async fn find_by_color(&self, color: &str) -> Result<Vec<Faculty>, DbErr> {
        let entities = entity::prelude::Faculty::find()
            .filter(entity::faculty::Column::Color.eq(color))
            .order_by_asc(entity::faculty::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Faculty::from_entity).collect())
    }

    /// Gets faculties whose name or color contains the filter string, ignoring case.
    ///
    /// SQLite's `LIKE` and `LOWER` only fold ASCII letters, so the comparison is done
    /// on the loaded rows with full Unicode lowercasing.
    pub async fn find_by_name_or_color_containing(
        &self,
        filter: &str,
    ) -> Result<Vec<Faculty>, DbErr> {
        let needle = filter.to_lowercase();

        let entities = entity::prelude::Faculty::find()
            .order_by_asc(entity::faculty::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&needle) || f.color.to_lowercase().contains(&needle)
            })
            .map(Faculty::from_entity)
            .collect())
    }
}
