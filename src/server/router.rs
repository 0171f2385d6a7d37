use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{avatar, faculty, info, student},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School API",
        version = "0.1.0",
        description = "Students, faculties and their avatars"
    ),
    tags(
        (name = "student", description = "Student CRUD, filters and statistics"),
        (name = "faculty", description = "Faculty CRUD and queries"),
        (name = "avatar", description = "Avatar upload and download"),
        (name = "info", description = "Server information"),
    ),
)]
struct ApiDoc;

fn student_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(student::create_student, student::get_students))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(
            student::get_student_faculty,
            student::update_student_faculty
        ))
        .routes(routes!(student::update_student_avatar))
        .routes(routes!(student::get_student_quantity))
        .routes(routes!(student::get_student_average_age))
        .routes(routes!(student::get_student_average_age_in_process))
        .routes(routes!(student::print_parallel))
        .routes(routes!(student::print_synchronized))
}

fn faculty_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(faculty::create_faculty, faculty::get_faculties))
        .routes(routes!(
            faculty::get_faculty,
            faculty::update_faculty,
            faculty::delete_faculty
        ))
        .routes(routes!(faculty::get_faculty_students))
        .routes(routes!(faculty::get_longest_faculty_name))
}

fn avatar_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(avatar::upload_avatar, avatar::get_avatars))
        .routes(routes!(avatar::get_avatar_from_db))
        .routes(routes!(avatar::get_avatar_from_fs))
        .layer(avatar::avatar_upload_body_limit())
}

fn info_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(info::get_port))
}

/// Builds the application router with API documentation.
///
/// Registers every controller, serves Swagger UI at `/swagger-ui` backed by the
/// generated document at `/api-docs/openapi.json`, and adds request tracing and
/// permissive CORS.
///
/// # Arguments
/// - `state` - Shared application state handed to every handler
///
/// # Returns
/// - `Router` - Router ready to be served
pub fn build_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(student_routes())
        .merge(faculty_routes())
        .merge(avatar_routes())
        .merge(info_routes())
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
