use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub alerts_file: PathBuf,
    pub host: String,
    pub port: u16,

    pub cors_origins: Vec<String>,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let alerts_file = env::var("ALERTS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/alerts.json"));

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let cors_origins = env::var("CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:3001".to_string())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Settings {
        alerts_file,
        host,
        port,
        cors_origins,
    }
}
