use super::*;

/// Tests deleting an avatar.
///
/// Expected: Ok and the avatar is gone
#[tokio::test]
async fn deletes_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let avatar = factory::create_avatar(db).await?;

    let repo = AvatarRepository::new(db);
    repo.delete(avatar.id).await?;

    assert!(repo.find_by_id(avatar.id).await?.is_none());

    Ok(())
}
