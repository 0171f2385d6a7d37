//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database, so the matching
//! tables must exist (see `TestBuilder::with_school_tables`).
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let faculty = factory::faculty::create_faculty(&db).await?;
//!
//!     // Create a student already assigned to a faculty
//!     let (faculty, student) = factory::helpers::create_student_with_faculty(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Гарри Поттер")
//!     .age(17)
//!     .faculty_id(faculty.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `faculty` - Create faculty entities
//! - `avatar` - Create avatar entities
//! - `student` - Create student entities
//! - `helpers` - Unique id generation and entities with dependencies

pub mod avatar;
pub mod faculty;
pub mod helpers;
pub mod student;

// Re-export commonly used factory functions for concise usage
pub use avatar::create_avatar;
pub use faculty::create_faculty;
pub use student::create_student;
