use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "pinfluencer.db")
    pub sqlite_path: String,
    /// Bucket receiving uploaded images (default: "pinfluencer-product-images")
    pub image_bucket: String,
    /// Keep the database and the images in memory (default: false)
    pub in_memory: bool,
    /// Emit JSON log lines instead of the human-readable format (default: false)
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "pinfluencer.db")
    /// - `IMAGE_BUCKET` - image bucket name (default: "pinfluencer-product-images")
    /// - `IN_MEMORY` - any value other than "", "0" or "false" enables in-memory mode
    /// - `LOG_FORMAT` - "json" for JSON logs
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "pinfluencer.db".to_string()),
            image_bucket: lookup("IMAGE_BUCKET")
                .unwrap_or_else(|| "pinfluencer-product-images".to_string()),
            in_memory: lookup("IN_MEMORY").is_some_and(|v| is_truthy(&v)),
            log_json: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false")
}
