//! Server configuration read from the environment.
//!
//! HOST (default 0.0.0.0), PORT (default 8080), DATA_FILE (JSON roster path; in-memory
//! when unset) and STATIC_DIR (default "static", served under /static).

use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: Option<PathBuf>,
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: None,
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read using `lookup` for each variable. Blank values count as unset; an
    /// unparsable PORT falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            host: get("HOST").unwrap_or_else(default_host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            data_file: get("DATA_FILE").map(PathBuf::from),
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or_else(default_static_dir),
        }
    }
}
