//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Avatars folder for the on-disk copy of uploads
//! - Application URL and port from configuration
//! - The console printer used by the student name demo endpoints

use sea_orm::DatabaseConnection;
use std::path::PathBuf;

use super::{config::Config, service::printer::StudentNamePrinter};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `StudentNamePrinter` uses `Arc` for its lock
/// - `PathBuf` and `String` are cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Directory that receives the on-disk copy of uploaded avatars.
    pub avatars_folder: PathBuf,

    /// Application base URL for generating avatar links.
    pub app_url: String,

    /// Port the HTTP server listens on.
    pub server_port: u16,

    /// Console printer shared by all requests so that its lock is shared too.
    pub printer: StudentNamePrinter,
}

impl AppState {
    /// Creates a new application state from the database and configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Loaded application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            avatars_folder: config.avatars_folder.clone(),
            app_url: config.app_url.clone(),
            server_port: config.server_port,
            printer: StudentNamePrinter::new(),
        }
    }
}
