use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Mongo,
    Memory,
}

impl StorageKind {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => StorageKind::Memory,
            _ => StorageKind::Mongo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub host: String,
    pub port: u16,

    pub storage: StorageKind,
    pub log_level: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mongodb_db = env::var("MONGODB_DB")
        .unwrap_or_else(|_| "orderbook".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let storage = env::var("STORAGE")
        .map(|s| StorageKind::parse(&s))
        .unwrap_or(StorageKind::Mongo);

    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    Settings {
        mongodb_uri,
        mongodb_db,
        host,
        port,
        storage,
        log_level,
    }
}
