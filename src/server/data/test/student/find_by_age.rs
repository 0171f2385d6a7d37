use super::*;

/// Tests filtering students by exact age.
///
/// Expected: Ok with only students of that age
#[tokio::test]
async fn returns_students_with_age() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::student::StudentFactory::new(db).age(17).build().await?;
    factory::student::StudentFactory::new(db).age(18).build().await?;
    let c = factory::student::StudentFactory::new(db).age(17).build().await?;

    let repo = StudentRepository::new(db);
    let ids: Vec<i32> = repo.find_by_age(17).await?.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![a.id, c.id]);
    assert!(repo.find_by_age(30).await?.is_empty());

    Ok(())
}
