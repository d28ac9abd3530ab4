use shared::Endpoint;
use shared::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_dir: String,
    pub endpoint: Endpoint,
}

impl ServerConfig {
    /// Reads `PORT`, `FRONTEND_DIR`, `GEMINI_API_BASE` and `GEMINI_MODEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => 8081,
        };

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(|| match lookup("CARGO_MANIFEST_DIR") {
            Some(manifest_dir) => format!("{}/../frontend/dist", manifest_dir),
            None => "/usr/src/app/frontend/dist".to_string(),
        });

        let endpoint = Endpoint::new(
            lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        );

        Ok(Self {
            port,
            frontend_dir,
            endpoint,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.frontend_dir, "/usr/src/app/frontend/dist");
        assert_eq!(config.endpoint, Endpoint::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("CARGO_MANIFEST_DIR", "/src/backend"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_API_BASE", "http://localhost:4000"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.frontend_dir, "/src/backend/../frontend/dist");
        assert_eq!(config.endpoint.model, "gemini-1.5-pro");
        assert_eq!(config.endpoint.api_base, "http://localhost:4000");
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }
}
