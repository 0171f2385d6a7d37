//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let faculty = fixture::faculty::entity();
//!
//! // Create with custom fields
//! let student = fixture::student::entity_builder()
//!     .faculty_id(Some(faculty.id))
//!     .build();
//! ```

pub mod avatar;
pub mod faculty;
pub mod student;

pub use avatar::{entity as avatar_entity, entity_builder as avatar_entity_builder};
pub use faculty::{entity as faculty_entity, entity_builder as faculty_entity_builder};
pub use student::{entity as student_entity, entity_builder as student_entity_builder};
