//! Policy-driven access to the error table.

//---------------------------------------------------------------------------------------------------- Use
use serde_json::Value;

use crate::{
    code::ErrorCode,
    config::{CatalogConfig, UnknownCodePolicy},
    constants::{lookup, CATALOG},
    error::CatalogError,
    object::ErrorObject,
};

//---------------------------------------------------------------------------------------------------- Catalog
/// Builds [`ErrorObject`]s according to a [`CatalogConfig`].
///
/// [`ErrorObject::new`] always accepts unknown codes,
/// this type lets the caller decide with [`UnknownCodePolicy`].
///
/// ```rust
/// use rpc_error::{Catalog, CatalogError, ErrorCode, config::{CatalogConfig, UnknownCodePolicy}};
/// use serde_json::json;
///
/// let permissive = Catalog::default();
/// let e = permissive.error(-1, None).unwrap();
/// assert_eq!(e.message(), "");
///
/// let strict = Catalog::new(CatalogConfig {
///     unknown_codes: UnknownCodePolicy::Strict,
///     ..Default::default()
/// });
/// assert!(matches!(strict.error(-1, None), Err(CatalogError::UnknownCode(-1))));
///
/// let e = strict.error(-32004, Some(json!("expired"))).unwrap();
/// assert_eq!(e.to_string(), "-32004: Bad credentials (expired)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    /// Create a [`Catalog`] using `config`.
    pub const fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// The config this catalog was created with.
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Build an error for `code` with `data` attached.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownCode`] if `code` is not
    /// catalogued and the policy is [`UnknownCodePolicy::Strict`].
    pub fn error(
        &self,
        code: impl Into<ErrorCode>,
        data: Option<Value>,
    ) -> Result<ErrorObject, CatalogError> {
        let code = code.into();

        if let ErrorCode::Unknown(raw) = code {
            match self.config.unknown_codes {
                UnknownCodePolicy::Permissive => {
                    if self.config.warn_on_unknown {
                        tracing::warn!(code = raw, "building error with uncatalogued code");
                    }
                }
                UnknownCodePolicy::Strict => {
                    tracing::debug!(code = raw, "rejecting uncatalogued error code");
                    return Err(CatalogError::UnknownCode(raw));
                }
            }
        }

        Ok(ErrorObject::new(code, data))
    }

    /// The canonical message of `code`, if it is catalogued.
    pub const fn message(code: i32) -> Option<&'static str> {
        lookup(code)
    }

    /// Iterate over every `(code, message)` pair.
    pub fn entries() -> impl Iterator<Item = (ErrorCode, &'static str)> {
        CATALOG
            .into_iter()
            .map(|(code, msg)| (ErrorCode::from_code(code), msg))
    }
}
