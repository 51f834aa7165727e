//! Connection parameters for the API client.
use dream_diary_configuration::Configuration;
use url::Url;

/// Where the backend lives and which credential, if any, to present.
///
/// The bearer token is an opaque string supplied by the backend at login.
/// This crate never stores or refreshes it.
#[derive(Clone, Debug)]
pub struct ConnectionInfo {
    pub base_url: Url,
    pub token: Option<String>,
}

impl ConnectionInfo {
    #[must_use]
    pub fn authenticated(base_url: Url, token: &str) -> Self {
        Self {
            base_url,
            token: Some(token.to_string()),
        }
    }

    #[must_use]
    pub fn anonymous(base_url: Url) -> Self {
        Self {
            base_url,
            token: None,
        }
    }
}

/// A loaded configuration yields an anonymous connection; the token only
/// exists after login.
impl From<&Configuration> for ConnectionInfo {
    fn from(configuration: &Configuration) -> Self {
        Self::anonymous(configuration.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use dream_diary_configuration::Configuration;

    use super::ConnectionInfo;

    #[test]
    fn a_configuration_should_yield_an_anonymous_connection() {
        let connection_info = ConnectionInfo::from(&Configuration::default());

        assert_eq!(connection_info.base_url.as_str(), "http://127.0.0.1:8888/");
        assert_eq!(connection_info.token, None);
    }
}
