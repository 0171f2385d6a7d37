use super::*;

/// Tests storing content and file path on an avatar row.
///
/// Verifies the metadata written on create is left untouched.
///
/// Expected: Ok with the path set and the content readable from the row
#[tokio::test]
async fn stores_content_and_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvatarRepository::new(db);
    let created = repo.create("image/png".to_string(), 5).await?;

    let updated = repo
        .attach_content(created.id, vec![1, 1, 2, 3, 5], "avatars/1.png".to_string())
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.file_path.as_deref(), Some("avatars/1.png"));
    assert_eq!(updated.file_size, 5);
    assert_eq!(updated.media_type, "image/png");

    let content = repo.find_content_by_id(created.id).await?.unwrap();
    assert_eq!(content.data, vec![1, 1, 2, 3, 5]);

    Ok(())
}

/// Tests storing content for an avatar that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvatarRepository::new(db);
    let result = repo
        .attach_content(999, vec![1], "avatars/999.png".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
