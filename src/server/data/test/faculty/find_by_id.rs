use super::*;

/// Tests finding an existing faculty.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::faculty::FacultyFactory::new(db)
        .name("Слизерин")
        .color("зелёный")
        .build()
        .await?;

    let repo = FacultyRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Слизерин");
    assert_eq!(found.color, "зелёный");

    Ok(())
}

/// Tests finding a faculty that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FacultyRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
