use super::*;

/// Tests updating a student's name and age.
///
/// Verifies that the faculty reference survives the update.
///
/// Expected: Ok with new name and age and the same faculty
#[tokio::test]
async fn updates_name_and_age_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, student) = factory::helpers::create_student_with_faculty(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParams {
            id: student.id,
            name: "Невилл Долгопупс".to_string(),
            age: 16,
        })
        .await?;

    assert_eq!(updated.id, student.id);
    assert_eq!(updated.name, "Невилл Долгопупс");
    assert_eq!(updated.age, 16);
    assert_eq!(updated.faculty.map(|f| f.id), Some(faculty.id));

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(UpdateStudentParams {
            id: 999,
            name: "Nobody".to_string(),
            age: 1,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
