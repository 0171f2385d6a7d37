mod faculty;
mod student;
