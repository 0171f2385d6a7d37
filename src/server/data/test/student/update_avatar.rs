use super::*;

/// Tests assigning an avatar to a student.
///
/// Expected: Ok with the avatar resolved on the returned student
#[tokio::test]
async fn assigns_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let avatar = factory::avatar::AvatarFactory::new(db)
        .media_type("image/jpeg")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let updated = repo.update_avatar(student.id, avatar.id).await?;

    let updated_avatar = updated.avatar.unwrap();
    assert_eq!(updated_avatar.id, avatar.id);
    assert_eq!(updated_avatar.media_type, "image/jpeg");

    Ok(())
}

/// Tests assigning an avatar to a student that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let avatar = factory::create_avatar(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.update_avatar(999, avatar.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
