use super::*;

/// Tests deleting a faculty.
///
/// Expected: Ok and the faculty is gone
#[tokio::test]
async fn deletes_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faculty)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faculty = factory::create_faculty(db).await?;

    let repo = FacultyRepository::new(db);
    repo.delete(faculty.id).await?;

    assert!(repo.find_by_id(faculty.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a faculty clears the reference of its students.
///
/// Verifies the `ON DELETE SET NULL` foreign key on the student table.
///
/// Expected: Ok and the student remains with no faculty
#[tokio::test]
async fn clears_faculty_of_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, student) = factory::helpers::create_student_with_faculty(db).await?;

    let repo = FacultyRepository::new(db);
    repo.delete(faculty.id).await?;

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.faculty_id.is_none());

    Ok(())
}
