use super::*;

/// Tests splitting avatars into pages.
///
/// Expected: Ok with full pages, a partial last page and an empty page past the end
#[tokio::test]
async fn splits_avatars_into_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_avatar(db).await?.id);
    }

    let repo = AvatarRepository::new(db);
    let page = |avatars: Vec<crate::server::model::avatar::Avatar>| {
        avatars.into_iter().map(|a| a.id).collect::<Vec<i32>>()
    };

    assert_eq!(page(repo.get_paginated(0, 2).await?), ids[0..2].to_vec());
    assert_eq!(page(repo.get_paginated(1, 2).await?), ids[2..4].to_vec());
    assert_eq!(page(repo.get_paginated(2, 2).await?), ids[4..5].to_vec());
    assert!(repo.get_paginated(3, 2).await?.is_empty());

    Ok(())
}

/// Tests that paged avatars carry their metadata without the content.
///
/// Expected: Ok with media type, size and file path of the stored row
#[tokio::test]
async fn maps_metadata_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avatar)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::avatar::AvatarFactory::new(db)
        .media_type("image/jpeg")
        .data(vec![1, 2, 3, 4, 5, 6])
        .file_path("avatars/1.jpg")
        .build()
        .await?;

    let avatars = AvatarRepository::new(db).get_paginated(0, 10).await?;

    assert_eq!(avatars.len(), 1);
    assert_eq!(avatars[0].id, stored.id);
    assert_eq!(avatars[0].media_type, "image/jpeg");
    assert_eq!(avatars[0].file_size, 6);
    assert_eq!(avatars[0].file_path.as_deref(), Some("avatars/1.jpg"));

    Ok(())
}
