use super::*;

/// Tests finding a student with faculty and avatar assigned.
///
/// Expected: Ok(Some) with both references resolved
#[tokio::test]
async fn resolves_faculty_and_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faculty = factory::create_faculty(db).await?;
    let avatar = factory::create_avatar(db).await?;
    let student = factory::student::StudentFactory::new(db)
        .faculty_id(faculty.id)
        .avatar_id(avatar.id)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let found = repo.find_by_id(student.id).await?.unwrap();

    let found_faculty = found.faculty.unwrap();
    assert_eq!(found_faculty.id, faculty.id);
    assert_eq!(found_faculty.name, faculty.name);
    let found_avatar = found.avatar.unwrap();
    assert_eq!(found_avatar.id, avatar.id);
    assert_eq!(found_avatar.media_type, avatar.media_type);

    Ok(())
}

/// Tests finding a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
