use core_config::{AppInfo, FromEnv, app_info, env_required, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::{ConfigError, Environment};

/// Operator credentials for the login endpoint
///
/// A single credential pair from the environment; the user collection is
/// not consulted for authentication.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: env_required("AUTH_USERNAME")?,
            password: env_required("AUTH_PASSWORD")?,
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let auth = AuthConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            auth,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loads_with_minimal_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("wiki")),
                ("AUTH_USERNAME", Some("operator")),
                ("AUTH_PASSWORD", Some("hunter2")),
                ("APP_ENV", None),
                ("HOST", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "wiki-server");
                assert_eq!(config.mongodb.database(), "wiki");
                assert_eq!(config.auth.username, "operator");
                assert_eq!(config.server.port, 8080);
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_config_requires_auth_credentials() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("wiki")),
                ("AUTH_USERNAME", None),
                ("AUTH_PASSWORD", None),
            ],
            || {
                let error = Config::from_env().unwrap_err();
                assert!(error.to_string().contains("AUTH_USERNAME"));
            },
        );
    }
}
