//! Configuration data structures for the Dream Diary API client.
//!
//! The client itself never reads the environment: callers load a
//! [`Configuration`] here and inject the resolved base URL into the client.
//!
//! Configuration can be provided through a TOML file:
//!
//! ```toml
//! base_url = "https://api.dream-diary.example"
//! ```
//!
//! or through environment variables prefixed with `DREAM_DIARY_`, which take
//! priority over the file:
//!
//! ```text
//! DREAM_DIARY_BASE_URL=https://api.dream-diary.example
//! ```
//!
//! When neither is present the base URL falls back to the local development
//! backend, `http://127.0.0.1:8888`.
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Prefix for all configuration environment variables.
pub const ENV_VAR_PREFIX: &str = "DREAM_DIARY_";

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_TOML_PATH: &str = "dream-diary.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8888";

/// Configuration for the Dream Diary API client.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Configuration {
    /// Base URL of the backend. All endpoint paths are relative to it.
    #[serde(default = "Configuration::default_base_url")]
    pub base_url: Url,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

impl Configuration {
    fn default_base_url() -> Url {
        Url::parse(DEFAULT_BASE_URL).expect("default base URL should be valid")
    }

    /// Loads the configuration from the default file location (if the file
    /// exists) and the environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file or the environment variables contain a
    /// bad configuration.
    pub fn load() -> Result<Configuration, Error> {
        Self::load_from_file(DEFAULT_CONFIG_TOML_PATH)
    }

    /// Loads the configuration from the given file path and the environment.
    /// Environment variables have priority over the file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_VAR_PREFIX));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML, e.g. to write a starter
    /// configuration file.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        #[from]
        source: figment::Error,
    },
}

#[cfg(test)]
mod tests {
    use crate::Configuration;

    #[test]
    fn configuration_should_fall_back_to_the_local_backend() {
        let configuration = Configuration::default();

        assert_eq!(configuration.base_url.as_str(), "http://127.0.0.1:8888/");
    }

    #[test]
    fn configuration_should_be_loaded_from_a_toml_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "dream-diary.toml",
                r#"base_url = "https://api.dream-diary.example""#,
            )?;

            let configuration = Configuration::load().expect("a valid configuration");

            assert_eq!(
                configuration.base_url.as_str(),
                "https://api.dream-diary.example/"
            );

            Ok(())
        });
    }

    #[test]
    fn environment_variables_should_override_the_configuration_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("dream-diary.toml", r#"base_url = "https://file.example""#)?;
            jail.set_env("DREAM_DIARY_BASE_URL", "https://env.example");

            let configuration = Configuration::load().expect("a valid configuration");

            assert_eq!(configuration.base_url.as_str(), "https://env.example/");

            Ok(())
        });
    }

    #[test]
    fn a_configuration_should_encode_to_toml_it_can_be_loaded_from() {
        figment::Jail::expect_with(|jail| {
            let configuration = Configuration::default();

            assert_eq!(
                configuration.to_toml(),
                "base_url = \"http://127.0.0.1:8888/\"\n"
            );

            jail.create_file("dream-diary.toml", &configuration.to_toml())?;

            assert_eq!(
                Configuration::load().expect("a valid configuration"),
                configuration
            );

            Ok(())
        });
    }

    #[test]
    fn loading_should_fail_when_the_base_url_is_not_a_url() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DREAM_DIARY_BASE_URL", "not a url");

            assert!(Configuration::load().is_err());

            Ok(())
        });
    }
}
