use super::*;

/// Tests listing every faculty in id order.
///
/// Expected: Ok with all faculties
#[tokio::test]
async fn returns_all_faculties_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_faculty(db).await?;
    let second = factory::create_faculty(db).await?;
    let third = factory::create_faculty(db).await?;

    let repo = FacultyRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|f| f.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing faculties on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FacultyRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
