use super::*;

/// Tests creating a student.
///
/// Verifies that the student is stored without faculty or avatar and can be
/// read back unchanged.
///
/// Expected: Ok with the created student equal to the one read back
#[tokio::test]
async fn creates_student_without_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            name: "Рон Уизли".to_string(),
            age: 17,
        })
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.name, "Рон Уизли");
    assert_eq!(student.age, 17);
    assert!(student.faculty.is_none());
    assert!(student.avatar.is_none());

    let found = repo.find_by_id(student.id).await?;
    assert_eq!(found, Some(student));

    Ok(())
}
