use super::*;

/// Tests listing students with mixed references.
///
/// Verifies the batched lookup attaches the right faculty to each student and
/// leaves students without a faculty untouched.
///
/// Expected: Ok with all students in id order and correct faculties
#[tokio::test]
async fn returns_all_students_with_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_faculty = factory::create_faculty(db).await?;
    let second_faculty = factory::create_faculty(db).await?;
    let a = factory::student::StudentFactory::new(db)
        .faculty_id(second_faculty.id)
        .build()
        .await?;
    let b = factory::create_student(db).await?;
    let c = factory::student::StudentFactory::new(db)
        .faculty_id(first_faculty.id)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);

    let faculty_ids: Vec<Option<i32>> = students
        .iter()
        .map(|s| s.faculty.as_ref().map(|f| f.id))
        .collect();
    assert_eq!(
        faculty_ids,
        vec![Some(second_faculty.id), None, Some(first_faculty.id)]
    );

    Ok(())
}
