use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251210_000001_create_faculty_table::Faculty, m20251210_000002_create_avatar_table::Avatar,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::Name))
                    .col(integer(Student::Age))
                    .col(integer_null(Student::FacultyId))
                    .col(integer_null(Student::AvatarId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_faculty_id")
                            .from(Student::Table, Student::FacultyId)
                            .to(Faculty::Table, Faculty::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_avatar_id")
                            .from(Student::Table, Student::AvatarId)
                            .to(Avatar::Table, Avatar::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    Name,
    Age,
    FacultyId,
    AvatarId,
}
