use super::*;

/// Tests listing the students of one faculty.
///
/// Expected: Ok with only students assigned to that faculty
#[tokio::test]
async fn returns_students_of_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, student) = factory::helpers::create_student_with_faculty(db).await?;
    factory::helpers::create_student_with_faculty(db).await?;
    factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_faculty_id(faculty.id).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student.id);
    assert_eq!(students[0].faculty.as_ref().map(|f| f.id), Some(faculty.id));

    Ok(())
}
