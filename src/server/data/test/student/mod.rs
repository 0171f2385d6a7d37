use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParams, UpdateStudentParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_age;
mod find_by_faculty_id;
mod find_by_id;
mod get_all;
mod get_average_age;
mod get_last_added;
mod get_quantity;
mod update;
mod update_avatar;
mod update_faculty;
