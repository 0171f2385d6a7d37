use super::*;

/// Tests reading the most recently added students.
///
/// Expected: Ok with the newest students first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let students =
        factory::helpers::create_students_named(db, &["A", "B", "C", "D", "E"]).await?;

    let repo = StudentRepository::new(db);
    let ids: Vec<i32> = repo.get_last_added(3).await?.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![students[4].id, students[3].id, students[2].id]);

    Ok(())
}

/// Tests asking for more students than exist.
///
/// Expected: Ok with every student
#[tokio::test]
async fn returns_all_when_limit_exceeds_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_students_named(db, &["A", "B"]).await?;

    let repo = StudentRepository::new(db);

    assert_eq!(repo.get_last_added(10).await?.len(), 2);

    Ok(())
}
