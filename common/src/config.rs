use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub max_session_bookings: u64,
    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub email_from_name: String,
    pub email_from_address: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "room19-api".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/api.log".into());
            let database_path =
                env::var("DATABASE_PATH").unwrap_or_else(|_| "data/room19.db".into());
            let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000);
            let max_session_bookings = env::var("MAX_SESSION_BOOKINGS")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(2);

            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                fs::create_dir_all(parent).expect("Failed to create log directory");
            }

            let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".into());
            let smtp_username = env::var("SMTP_USERNAME").unwrap_or_default();
            let smtp_password = env::var("SMTP_PASSWORD").unwrap_or_default();
            let email_from_name =
                env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| "The Room 19".into());
            let email_from_address =
                env::var("EMAIL_FROM_ADDRESS").unwrap_or_else(|_| smtp_username.clone());

            Config {
                project_name,
                log_level,
                log_file,
                database_path,
                host,
                port,
                max_session_bookings,
                smtp_host,
                smtp_username,
                smtp_password,
                email_from_name,
                email_from_address,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}
