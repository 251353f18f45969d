use serde::{Deserialize, Serialize};

use crate::error::WofError;
use crate::uri::DEFAULT_URI_ROOT;
use crate::whosonfirst::{DEFAULT_COUNTRY, DEFAULT_NAME, DEFAULT_PLACETYPE, DEFAULT_REPO};

/// Settings used when assembling a [`StandardPlacesResult`](crate::StandardPlacesResult).
///
/// Missing fields take their default values when the config is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprConfig {
    uri_root: String,
    default_name: String,
    default_placetype: String,
    default_country: String,
    default_repo: String,
}

impl Default for SprConfig {
    fn default() -> Self {
        Self {
            uri_root: DEFAULT_URI_ROOT.to_string(),
            default_name: DEFAULT_NAME.to_string(),
            default_placetype: DEFAULT_PLACETYPE.to_string(),
            default_country: DEFAULT_COUNTRY.to_string(),
            default_repo: DEFAULT_REPO.to_string(),
        }
    }
}

impl SprConfig {
    /// Parses config from JSON.
    pub fn from_json(json: &str) -> Result<Self, WofError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Root the `mz:uri` of results is built against.
    pub fn uri_root(&self) -> &str {
        &self.uri_root
    }

    /// Name of features that have none.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Placetype of features that have none.
    pub fn default_placetype(&self) -> &str {
        &self.default_placetype
    }

    /// Country of features that have none.
    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Repository of features that have none.
    pub fn default_repo(&self) -> &str {
        &self.default_repo
    }

    /// Sets the URI root.
    pub fn with_uri_root(mut self, uri_root: impl Into<String>) -> Self {
        self.uri_root = uri_root.into();
        self
    }

    /// Sets the default name.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Sets the default placetype.
    pub fn with_default_placetype(mut self, placetype: impl Into<String>) -> Self {
        self.default_placetype = placetype.into();
        self
    }

    /// Sets the default country.
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = country.into();
        self
    }

    /// Sets the default repository.
    pub fn with_default_repo(mut self, repo: impl Into<String>) -> Self {
        self.default_repo = repo.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SprConfig::default();
        assert_eq!(config.uri_root(), "https://data.whosonfirst.org/");
        assert_eq!(config.default_name(), "a place with no name");
        assert_eq!(config.default_placetype(), "here be dragons");
        assert_eq!(config.default_country(), "XX");
        assert_eq!(config.default_repo(), "whosonfirst-data-xx");
    }

    #[test]
    fn partial_json() {
        let config =
            SprConfig::from_json(r#"{"uri_root": "http://localhost/", "default_country": "ZZ"}"#)
                .unwrap();
        assert_eq!(config.uri_root(), "http://localhost/");
        assert_eq!(config.default_country(), "ZZ");
        assert_eq!(config.default_name(), "a place with no name");
    }

    #[test]
    fn builder() {
        let config = SprConfig::default()
            .with_default_name("unnamed")
            .with_default_repo("whosonfirst-data-admin-ca");
        assert_eq!(config.default_name(), "unnamed");
        assert_eq!(config.default_repo(), "whosonfirst-data-admin-ca");
        assert_eq!(config.default_placetype(), "here be dragons");
    }
}
