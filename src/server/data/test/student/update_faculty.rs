use super::*;

/// Tests assigning a faculty to a student.
///
/// Expected: Ok with the faculty resolved on the returned student
#[tokio::test]
async fn assigns_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let faculty = factory::create_faculty(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo.update_faculty(student.id, faculty.id).await?;

    assert_eq!(updated.faculty.map(|f| f.id), Some(faculty.id));

    let stored = repo.find_by_id(student.id).await?.unwrap();
    assert_eq!(stored.faculty.map(|f| f.id), Some(faculty.id));

    Ok(())
}

/// Tests reassigning a student to another faculty.
///
/// Expected: Ok with the second faculty
#[tokio::test]
async fn replaces_existing_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_faculty(db).await?;
    let other = factory::create_faculty(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo.update_faculty(student.id, other.id).await?;

    assert_eq!(updated.faculty.map(|f| f.id), Some(other.id));

    Ok(())
}
