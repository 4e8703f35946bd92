use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/tracker.json";
const DEFAULT_TABLE: &str = "chores";
const DEFAULT_RECORD_ID: i64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("TRACKER_STORE_KEY must be set when TRACKER_STORE_URL is set")]
    MissingKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Rest {
        url: String,
        api_key: String,
        table: String,
    },
    File {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub record_id: i64,
    pub backend: StoreBackend,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let record_id = match var("TRACKER_RECORD_ID") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid {
                    name: "TRACKER_RECORD_ID",
                    value,
                })?,
            None => DEFAULT_RECORD_ID,
        };

        let backend = match var("TRACKER_STORE_URL") {
            Some(url) => StoreBackend::Rest {
                url,
                api_key: var("TRACKER_STORE_KEY").ok_or(ConfigError::MissingKey)?,
                table: var("TRACKER_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            },
            None => StoreBackend::File {
                path: var("APP_DATA_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            },
        };

        Ok(Self {
            port,
            record_id,
            backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_use_local_file() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.record_id, 1);
        assert_eq!(
            config.backend,
            StoreBackend::File {
                path: PathBuf::from("data/tracker.json")
            }
        );
    }

    #[test]
    fn store_url_selects_rest_backend() {
        let config = config_with(&[
            ("TRACKER_STORE_URL", "https://example.supabase.co"),
            ("TRACKER_STORE_KEY", "anon"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.backend,
            StoreBackend::Rest {
                url: "https://example.supabase.co".to_string(),
                api_key: "anon".to_string(),
                table: "chores".to_string(),
            }
        );
    }

    #[test]
    fn store_url_without_key_is_rejected() {
        let err = config_with(&[("TRACKER_STORE_URL", "https://example.supabase.co")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = config_with(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
