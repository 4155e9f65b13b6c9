//! Errors returned by this crate.

/// Recoverable failures of the catalog.
///
/// Note that [`ErrorObject`](crate::ErrorObject) is the error _value_
/// handed to JSON-RPC clients, this is the error of _building_ one.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The code has no entry in [`CATALOG`](crate::constants::CATALOG)
    /// and the unknown-code policy is strict.
    #[error("unknown JSON-RPC error code: {0}")]
    UnknownCode(i32),

    /// The attached data could not be encoded into JSON.
    #[error("error data is not JSON encodable: {0}")]
    Data(#[from] serde_json::Error),

    /// The catalog config was not valid TOML or had invalid fields.
    #[error("invalid catalog config: {0}")]
    Config(Box<toml::de::Error>),

    /// The catalog config could not be written as TOML.
    #[error("catalog config is not TOML encodable: {0}")]
    ConfigEncode(Box<toml::ser::Error>),
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(e: toml::ser::Error) -> Self {
        Self::ConfigEncode(Box::new(e))
    }
}
