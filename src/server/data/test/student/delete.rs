use super::*;

/// Tests deleting a student.
///
/// Verifies that the referenced faculty is left in place.
///
/// Expected: Ok, the student is gone and the faculty remains
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, student) = factory::helpers::create_student_with_faculty(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(student.id).await?;

    assert!(repo.find_by_id(student.id).await?.is_none());
    assert!(crate::server::data::faculty::FacultyRepository::new(db)
        .find_by_id(faculty.id)
        .await?
        .is_some());

    Ok(())
}
