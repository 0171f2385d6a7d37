use super::*;

/// Tests filtering faculties by exact color.
///
/// Expected: Ok with only faculties of that color, in id order
#[tokio::test]
async fn returns_faculties_with_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::faculty::FacultyFactory::new(db)
        .color("green")
        .build()
        .await?;
    factory::faculty::FacultyFactory::new(db)
        .color("red")
        .build()
        .await?;
    let second = factory::faculty::FacultyFactory::new(db)
        .color("green")
        .build()
        .await?;

    let repo = FacultyRepository::new(db);
    let faculties = repo.find_by_color("green").await?;

    let ids: Vec<i32> = faculties.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that the color match is exact.
///
/// Expected: Ok with empty list for a differently cased color
#[tokio::test]
async fn color_match_is_exact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::faculty::FacultyFactory::new(db)
        .color("green")
        .build()
        .await?;

    let repo = FacultyRepository::new(db);

    assert!(repo.find_by_color("Green").await?.is_empty());
    assert!(repo.find_by_color("gree").await?.is_empty());

    Ok(())
}
