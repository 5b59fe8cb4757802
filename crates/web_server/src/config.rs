use camp_db::database::database_url_from_env;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5555;

/// Bind address used when `BIND_ADDRESS` is not set
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

/// Errors raised while reading the server configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `BIND_ADDRESS` and `PORT`, falling back to defaults for unset values
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            database_url_from_env(),
            std::env::var("BIND_ADDRESS").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_values(
        database_url: String,
        bind_address: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            bind_address: bind_address.unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = ServerConfig::from_values("postgres://db".to_string(), None, None).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, "postgres://db");
    }

    #[test]
    fn test_explicit_values_win() {
        let config = ServerConfig::from_values(
            "postgres://db".to_string(),
            Some("127.0.0.1".to_string()),
            Some("8080".to_string()),
        )
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = ServerConfig::from_values(
            "postgres://db".to_string(),
            None,
            Some("not-a-port".to_string()),
        );

        assert!(matches!(result, Err(ConfigError::InvalidPort(value)) if value == "not-a-port"));
    }
}
