use super::*;

/// Tests storing the metadata of a new avatar.
///
/// Expected: Ok with generated id and the given size, no file path and empty content
#[tokio::test]
async fn stores_avatar_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AvatarRepository::new(db);
    let avatar = repo.create("image/gif".to_string(), 4).await?;

    assert!(avatar.id > 0);
    assert_eq!(avatar.media_type, "image/gif");
    assert_eq!(avatar.file_size, 4);
    assert!(avatar.file_path.is_none());

    assert_eq!(repo.find_by_id(avatar.id).await?, Some(avatar.clone()));
    let content = repo.find_content_by_id(avatar.id).await?.unwrap();
    assert!(content.data.is_empty());

    Ok(())
}
