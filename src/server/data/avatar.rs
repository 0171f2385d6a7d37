//! Avatar data repository for database operations.
//!
//! Only `find_content_by_id` reads the content blob. Every other query selects the
//! metadata columns into [`Avatar`] directly.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::avatar::{Avatar, AvatarContent};

/// Selects the avatar columns mapped by [`Avatar`], leaving out the content blob.
///
/// Callers add filters and ordering, then finish with `into_model::<Avatar>()`.
pub(super) fn select_metadata() -> Select<entity::avatar::Entity> {
    entity::prelude::Avatar::find().select_only().columns([
        entity::avatar::Column::Id,
        entity::avatar::Column::MediaType,
        entity::avatar::Column::FileSize,
        entity::avatar::Column::FilePath,
    ])
}

/// Repository providing database operations for avatars.
pub struct AvatarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvatarRepository<'a> {
    /// Creates a new AvatarRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new avatar row with its metadata and empty content.
    ///
    /// The content and file path are stored afterwards with [`Self::attach_content`].
    ///
    /// # Arguments
    /// - `media_type` - MIME type of the content
    /// - `file_size` - Size of the content in bytes
    ///
    /// # Returns
    /// - `Ok(Avatar)` - The stored avatar with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, media_type: String, file_size: i64) -> Result<Avatar, DbErr> {
        let result = entity::prelude::Avatar::insert(entity::avatar::ActiveModel {
            media_type: ActiveValue::Set(media_type.clone()),
            file_size: ActiveValue::Set(file_size),
            data: ActiveValue::Set(Vec::new()),
            file_path: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(Avatar {
            id: result.last_insert_id,
            media_type,
            file_size,
            file_path: None,
        })
    }

    /// Stores the content of an avatar together with the path of its on-disk copy.
    ///
    /// # Returns
    /// - `Ok(Avatar)` - The updated avatar metadata
    /// - `Err(DbErr::RecordNotFound)` - No avatar with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn attach_content(
        &self,
        id: i32,
        data: Vec<u8>,
        file_path: String,
    ) -> Result<Avatar, DbErr> {
        let result = entity::prelude::Avatar::update_many()
            .col_expr(entity::avatar::Column::Data, Expr::value(data))
            .col_expr(entity::avatar::Column::FilePath, Expr::value(file_path))
            .filter(entity::avatar::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Avatar with id {} not found",
                id
            )));
        }

        self.find_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Avatar with id {} not found",
            id
        )))
    }

    /// Finds avatar metadata by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Avatar>, DbErr> {
        select_metadata()
            .filter(entity::avatar::Column::Id.eq(id))
            .into_model::<Avatar>()
            .one(self.db)
            .await
    }

    /// Finds the content stored in the database row of an avatar.
    pub async fn find_content_by_id(&self, id: i32) -> Result<Option<AvatarContent>, DbErr> {
        let entity = entity::prelude::Avatar::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|a| AvatarContent {
            media_type: a.media_type,
            data: a.data,
        }))
    }

    /// Gets one page of avatar metadata ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of avatars per page
    ///
    /// # Returns
    /// - `Ok(Vec<Avatar>)` - Avatars on the requested page, empty past the last page
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Vec<Avatar>, DbErr> {
        let paginator = select_metadata()
            .order_by_asc(entity::avatar::Column::Id)
            .into_model::<Avatar>()
            .paginate(self.db, per_page);

        paginator.fetch_page(page).await
    }

    /// Deletes an avatar row.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Avatar::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
