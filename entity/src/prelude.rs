pub use super::avatar::Entity as Avatar;
pub use super::faculty::Entity as Faculty;
pub use super::student::Entity as Student;
