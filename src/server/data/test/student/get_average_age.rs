use super::*;

/// Tests averaging ages in the database.
///
/// Expected: Ok with the arithmetic mean
#[tokio::test]
async fn averages_ages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for age in [16, 17, 21] {
        factory::student::StudentFactory::new(db).age(age).build().await?;
    }

    let repo = StudentRepository::new(db);
    let average = repo.get_average_age().await?.average.unwrap();

    assert!((average - 18.0).abs() < 1e-9);

    Ok(())
}

/// Tests averaging ages without students.
///
/// Expected: Ok with no average
#[tokio::test]
async fn returns_none_without_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.get_average_age().await?.average.is_none());

    Ok(())
}
