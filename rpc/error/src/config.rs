//! [`Catalog`](crate::Catalog) configuration.
//!
//! The config can be built in code or read from [`toml`]:
//!
//! ```rust
//! use rpc_error::config::{CatalogConfig, UnknownCodePolicy};
//!
//! let config = CatalogConfig::from_toml_str(r#"
//!     unknown_codes = "Strict"
//!     warn_on_unknown = false
//! "#).unwrap();
//!
//! assert_eq!(config.unknown_codes, UnknownCodePolicy::Strict);
//! assert!(!config.warn_on_unknown);
//!
//! // Missing fields are set to their default.
//! assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
//! ```

//---------------------------------------------------------------------------------------------------- Import
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

//---------------------------------------------------------------------------------------------------- UnknownCodePolicy
/// What to do with codes that have no entry in [`CATALOG`](crate::constants::CATALOG).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnknownCodePolicy {
    /// Build the error anyway, with an empty message.
    #[default]
    Permissive,

    /// Refuse to build the error.
    Strict,
}

//---------------------------------------------------------------------------------------------------- CatalogConfig
/// [`Catalog`](crate::Catalog) configuration.
///
/// For construction, either use a struct literal or [`CatalogConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CatalogConfig {
    /// How to handle error codes that are not catalogued.
    ///
    /// Type         | String
    /// Valid values | "Permissive", "Strict"
    pub unknown_codes: UnknownCodePolicy,

    /// Log a warning when a permissive catalog builds an
    /// error for an unknown code.
    ///
    /// Type         | boolean
    /// Valid values | true, false
    pub warn_on_unknown: bool,
}

impl CatalogConfig {
    /// Create a new [`CatalogConfig`] with the default settings.
    ///
    /// Same as [`CatalogConfig::default`].
    ///
    /// ```rust
    /// use rpc_error::config::*;
    ///
    /// let config = CatalogConfig::new();
    ///
    /// assert_eq!(config.unknown_codes, UnknownCodePolicy::Permissive);
    /// assert!(config.warn_on_unknown);
    /// ```
    pub const fn new() -> Self {
        Self {
            unknown_codes: UnknownCodePolicy::Permissive,
            warn_on_unknown: true,
        }
    }

    /// Parse a config in [`toml`] format.
    ///
    /// # Errors
    /// Returns [`CatalogError::Config`] if `s` is not valid [`toml`],
    /// has unknown fields or has invalid values.
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    /// Write the config in [`toml`] format.
    ///
    /// # Errors
    /// Returns [`CatalogError::ConfigEncode`] if [`toml`] cannot
    /// represent the config, which does not happen for the current fields.
    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for CatalogConfig {
    /// Same as [`CatalogConfig::new`].
    ///
    /// ```rust
    /// # use rpc_error::config::*;
    /// assert_eq!(CatalogConfig::default(), CatalogConfig::new());
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toml_round_trip() {
        for config in [
            CatalogConfig::default(),
            CatalogConfig {
                unknown_codes: UnknownCodePolicy::Strict,
                warn_on_unknown: false,
            },
        ] {
            let s = config.to_toml_string().unwrap();
            assert_eq!(CatalogConfig::from_toml_str(&s).unwrap(), config);
        }
    }

    /// Reading and writing share [`CatalogError`].
    #[test]
    fn toml_errors_are_catalog_errors() -> Result<(), CatalogError> {
        let config = CatalogConfig::from_toml_str(&CatalogConfig::new().to_toml_string()?)?;
        assert_eq!(config, CatalogConfig::new());

        let e = CatalogError::from(<toml::ser::Error as serde::ser::Error>::custom("no"));
        assert!(matches!(e, CatalogError::ConfigEncode(_)));
        assert!(e.to_string().starts_with("catalog config is not TOML encodable: "));

        Ok(())
    }

    #[test]
    fn default_toml() {
        let s = CatalogConfig::default().to_toml_string().unwrap();
        assert_eq!(s, "unknown_codes = \"Permissive\"\nwarn_on_unknown = true\n");
    }

    #[test]
    fn unknown_field() {
        let e = CatalogConfig::from_toml_str("strict = true").unwrap_err();
        assert!(matches!(e, CatalogError::Config(_)));
    }

    #[test]
    fn invalid_policy() {
        let e = CatalogConfig::from_toml_str(r#"unknown_codes = "Loud""#).unwrap_err();
        assert!(matches!(e, CatalogError::Config(_)));
    }
}
