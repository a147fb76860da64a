use std::env;

/// Runtime settings, read once at startup (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    /// `MONGO_URL`. Missing is not fatal: the server starts without a database.
    pub mongo_url: Option<String>,
    /// `MONGO_DATABASE`, overrides the database named in the URL
    pub mongo_database: Option<String>,
    pub host: String,
    pub port: u16,
    /// `CORS_ALLOWED_ORIGINS` (comma separated); empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

pub const DEFAULT_PORT: u16 = 3000;

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("⚠️ Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            mongo_url: non_empty("MONGO_URL"),
            mongo_database: non_empty("MONGO_DATABASE"),
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
