use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    /// Directory that receives the on-disk copy of uploaded avatars.
    pub avatars_folder: PathBuf,

    pub server_port: u16,
    /// Public base URL used when building avatar links.
    pub app_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "SERVER_PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            avatars_folder: std::env::var("AVATARS_FOLDER")
                .map(PathBuf::from)
                .map_err(|_| ConfigError::MissingEnvVar("AVATARS_FOLDER".to_string()))?,
            server_port,
            app_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", server_port)),
        })
    }
}
