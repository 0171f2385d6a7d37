use crate::server::{
    error::{domain::DomainError, AppError},
    model::{
        avatar::UploadAvatarParams,
        faculty::{CreateFacultyParams, UpdateFacultyParams},
        student::{CreateStudentParams, UpdateStudentParams},
    },
    service::{
        avatar::AvatarService, faculty::FacultyService, printer::StudentNamePrinter,
        student::StudentService,
    },
};
use sea_orm::{ConnectionTrait, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
