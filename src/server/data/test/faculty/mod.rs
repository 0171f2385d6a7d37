use crate::server::{
    data::faculty::FacultyRepository,
    model::faculty::{CreateFacultyParams, UpdateFacultyParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_color;
mod find_by_id;
mod find_by_name_or_color_containing;
mod get_all;
