use super::*;

/// Tests matching the filter against the name, ignoring case.
///
/// Expected: Ok with faculties whose name contains the filter
#[tokio::test]
async fn matches_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gryffindor = factory::faculty::FacultyFactory::new(db)
        .name("Гриффиндор")
        .color("красный")
        .build()
        .await?;
    factory::faculty::FacultyFactory::new(db)
        .name("Слизерин")
        .color("зелёный")
        .build()
        .await?;

    let repo = FacultyRepository::new(db);
    let faculties = repo.find_by_name_or_color_containing("ГРИФ").await?;

    assert_eq!(faculties.len(), 1);
    assert_eq!(faculties[0].id, gryffindor.id);

    Ok(())
}

/// Tests matching the filter against the color.
///
/// Expected: Ok with faculties whose color contains the filter
#[tokio::test]
async fn matches_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::faculty::FacultyFactory::new(db)
        .name("Gryffindor")
        .color("Scarlet")
        .build()
        .await?;
    let ravenclaw = factory::faculty::FacultyFactory::new(db)
        .name("Ravenclaw")
        .color("Blue")
        .build()
        .await?;

    let repo = FacultyRepository::new(db);
    let faculties = repo.find_by_name_or_color_containing("lu").await?;

    assert_eq!(faculties.len(), 1);
    assert_eq!(faculties[0].id, ravenclaw.id);

    Ok(())
}

/// Tests a filter matching nothing.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_faculty(db).await?;

    let repo = FacultyRepository::new(db);

    assert!(repo
        .find_by_name_or_color_containing("zzz")
        .await?
        .is_empty());

    Ok(())
}
