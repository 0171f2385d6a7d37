//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// default name to make assertions unambiguous.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a faculty and a student assigned to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((faculty, student))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_faculty(
    db: &DatabaseConnection,
) -> Result<(entity::faculty::Model, entity::student::Model), DbErr> {
    let faculty = crate::factory::faculty::create_faculty(db).await?;
    let student = crate::factory::student::StudentFactory::new(db)
        .faculty_id(faculty.id)
        .build()
        .await?;

    Ok((faculty, student))
}

/// Creates one student per name, in order, so ids ascend with the input.
///
/// # Arguments
/// - `db` - Database connection
/// - `names` - Student names
///
/// # Returns
/// - `Ok(Vec<entity::student::Model>)` - Created students
/// - `Err(DbErr)` - Database error during creation
pub async fn create_students_named(
    db: &DatabaseConnection,
    names: &[&str],
) -> Result<Vec<entity::student::Model>, DbErr> {
    let mut students = Vec::with_capacity(names.len());

    for name in names {
        let student = crate::factory::student::StudentFactory::new(db)
            .name(*name)
            .build()
            .await?;
        students.push(student);
    }

    Ok(students)
}
