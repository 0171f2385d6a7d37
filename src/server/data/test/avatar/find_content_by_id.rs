use super::*;

/// Tests reading stored avatar content.
///
/// Expected: Ok(Some) with media type and bytes as inserted
#[tokio::test]
async fn returns_stored_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let avatar = factory::avatar::AvatarFactory::new(db)
        .media_type("image/webp")
        .data(vec![0, 255, 0, 255])
        .build()
        .await?;

    let repo = AvatarRepository::new(db);
    let content = repo.find_content_by_id(avatar.id).await?.unwrap();

    assert_eq!(content.media_type, "image/webp");
    assert_eq!(content.data, vec![0, 255, 0, 255]);

    Ok(())
}

/// Tests reading content of an avatar that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvatarRepository::new(db);

    assert!(repo.find_content_by_id(999).await?.is_none());

    Ok(())
}
