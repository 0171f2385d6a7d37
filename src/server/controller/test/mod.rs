use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use std::path::Path;
use tower::ServiceExt;

use crate::{
    model::{api::ErrorDto, avatar::AvatarDto, faculty::FacultyDto, student::StudentDto},
    server::{router::build_router, service::printer::StudentNamePrinter, state::AppState},
};
use test_utils::{builder::TestBuilder, factory};


const APP_URL: &str = "http://localhost:8080";

fn router(db: &DatabaseConnection, avatars_folder: &Path) -> Router {
    build_router(AppState {
        db: db.clone(),
        avatars_folder: avatars_folder.to_path_buf(),
        app_url: APP_URL.to_string(),
        server_port: 8080,
        printer: StudentNamePrinter::new(),
    })
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends one request through a fresh router and collects the response body.
async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}
