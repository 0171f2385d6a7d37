use super::*;

/// Tests counting students.
///
/// Expected: Ok with 0 on an empty table, then the number inserted
#[tokio::test]
async fn counts_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    assert_eq!(repo.get_quantity().await?.count, 0);

    factory::helpers::create_students_named(db, &["A", "B", "C"]).await?;

    assert_eq!(repo.get_quantity().await?.count, 3);

    Ok(())
}
