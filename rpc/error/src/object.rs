//! Error object.

//---------------------------------------------------------------------------------------------------- Use
use std::{
    error::Error,
    fmt::{self, Display},
};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::Value;

use crate::{
    category::ErrorCategory,
    code::ErrorCode,
    constants::{
        BAD_CREDENTIALS, DUPLICATE_VALUE, FORBIDDEN, INTERNAL_ERROR, INVALID_PARAMS,
        INVALID_REQUEST, METHOD_NOT_FOUND, NOT_FOUND, PARSE_ERROR, SERVER_ERROR, UNAUTHORIZED,
    },
    error::CatalogError,
};

//---------------------------------------------------------------------------------------------------- ErrorObject
/// [The error object](https://www.jsonrpc.org/specification#error_object).
///
/// This is the object placed in the `error` field of a JSON-RPC
/// response when a method call fails.
///
/// The message is always the canonical message of [`ErrorObject::code`],
/// there is no way to set it separately. Only the `data` is up to the caller.
///
/// # Display
/// ```rust
/// use rpc_error::ErrorObject;
/// use serde_json::json;
///
/// // Without data the format is `$CODE: $MESSAGE`.
/// assert_eq!(format!("{}", ErrorObject::parse_error()),      "-32700: Parse error");
/// assert_eq!(format!("{}", ErrorObject::invalid_request()),  "-32600: Invalid Request");
/// assert_eq!(format!("{}", ErrorObject::method_not_found()), "-32601: Method not found");
/// assert_eq!(format!("{}", ErrorObject::invalid_params()),   "-32602: Invalid params");
/// assert_eq!(format!("{}", ErrorObject::internal_error()),   "-32603: Internal error");
/// assert_eq!(format!("{}", ErrorObject::server_error()),     "-32000: Server error");
///
/// // With data it is `$CODE: $MESSAGE ($DATA)`.
/// // Strings are written as-is, anything else as compact JSON.
/// let e = ErrorObject::new(-32005, Some(json!("user 7")));
/// assert_eq!(format!("{e}"), "-32005: Not found (user 7)");
///
/// let e = ErrorObject::new(-32003, Some(json!({"field":"email"})));
/// assert_eq!(format!("{e}"), r#"-32003: Duplicate value ({"field":"email"})"#);
/// ```
///
/// # Serialization
/// ```rust
/// use rpc_error::ErrorObject;
/// use serde_json::json;
///
/// let e = ErrorObject::unauthorized();
/// assert_eq!(serde_json::to_string(&e).unwrap(), r#"{"code":-32001,"message":"Unauthorized"}"#);
///
/// let e = e.with_data(json!(null));
/// assert_eq!(serde_json::to_string(&e).unwrap(), r#"{"code":-32001,"message":"Unauthorized","data":null}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    /// The error code.
    code: ErrorCode,

    /// The canonical message of `code`.
    message: &'static str,

    /// Optional data associated with the error.
    ///
    /// # `None` vs `Some(Value::Null)`
    /// This field will be completely omitted during serialization if [`None`],
    /// however if it is `Some(Value::Null)`, it will be serialized as `"data": null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl ErrorObject {
    /// Creates a new error from a code and optional data.
    ///
    /// The message is looked up from the code. Codes without
    /// an entry get an empty message, see [`ErrorObject::try_new`]
    /// for a version that rejects them.
    ///
    /// `data` is attached verbatim.
    ///
    /// ```rust
    /// use rpc_error::{ErrorCode, ErrorObject};
    /// use serde_json::json;
    ///
    /// let e = ErrorObject::new(-32002, Some(json!([1, 2])));
    /// assert_eq!(e.code(), ErrorCode::Forbidden);
    /// assert_eq!(e.message(), "Forbidden");
    /// assert_eq!(e.data(), Some(&json!([1, 2])));
    ///
    /// let e = ErrorObject::new(-1, None);
    /// assert_eq!(e.code(), ErrorCode::Unknown(-1));
    /// assert_eq!(e.message(), "");
    /// ```
    pub fn new(code: impl Into<ErrorCode>, data: Option<Value>) -> Self {
        let code = code.into();
        Self {
            code,
            message: code.msg(),
            data,
        }
    }

    /// Same as [`ErrorObject::new`] but errors on codes
    /// that have no entry in [`CATALOG`](crate::constants::CATALOG).
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownCode`] if `code` is [`ErrorCode::Unknown`].
    ///
    /// ```rust
    /// use rpc_error::{CatalogError, ErrorObject};
    ///
    /// assert!(ErrorObject::try_new(-32601, None).is_ok());
    /// assert!(matches!(
    ///     ErrorObject::try_new(-1, None),
    ///     Err(CatalogError::UnknownCode(-1)),
    /// ));
    /// ```
    pub fn try_new(code: impl Into<ErrorCode>, data: Option<Value>) -> Result<Self, CatalogError> {
        let code = code.into();
        if let ErrorCode::Unknown(code) = code {
            return Err(CatalogError::UnknownCode(code));
        }
        Ok(Self::new(code, data))
    }

    /// Creates a [`ErrorCode::ServerError`] for failures that have no better code.
    ///
    /// ```rust
    /// use rpc_error::{ErrorCode, ErrorObject};
    /// use serde_json::json;
    ///
    /// let e = ErrorObject::unexpected(Some(json!("disk full")));
    /// assert_eq!(e.code(), ErrorCode::ServerError);
    /// assert_eq!(e.to_string(), "-32000: Server error (disk full)");
    /// ```
    pub const fn unexpected(data: Option<Value>) -> Self {
        Self {
            code: ErrorCode::ServerError,
            message: SERVER_ERROR.1,
            data,
        }
    }

    /// Creates a new error, encoding `data` into JSON.
    ///
    /// # Panics
    /// Attaching data that cannot be represented as JSON is a bug in the
    /// caller (for example a map with non-string keys), this panics if so.
    /// Use [`ErrorObject::try_with_serialized`] to handle it instead.
    ///
    /// ```rust
    /// use rpc_error::ErrorObject;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Missing { id: u64 }
    ///
    /// let e = ErrorObject::with_serialized(-32005, &Missing { id: 3 });
    /// assert_eq!(e.to_string(), r#"-32005: Not found ({"id":3})"#);
    /// ```
    pub fn with_serialized<T: Serialize + ?Sized>(code: impl Into<ErrorCode>, data: &T) -> Self {
        let code = code.into();
        match Self::try_with_serialized(code, data) {
            Ok(this) => this,
            Err(e) => {
                tracing::error!(code = code.code(), "failed to encode error data: {e}");
                panic!("failed to encode error data for code {}: {e}", code.code());
            }
        }
    }

    /// Creates a new error, encoding `data` into JSON.
    ///
    /// # Errors
    /// Returns [`CatalogError::Data`] if `data` cannot be encoded.
    pub fn try_with_serialized<T: Serialize + ?Sized>(
        code: impl Into<ErrorCode>,
        data: &T,
    ) -> Result<Self, CatalogError> {
        let data = serde_json::to_value(data)?;
        Ok(Self::new(code, Some(data)))
    }

    /// Creates a new error with no data, deriving the message from the code.
    ///
    /// Same as `ErrorObject::from(ErrorCode)`.
    ///
    /// ```rust
    /// use rpc_error::{ErrorCode, ErrorObject};
    ///
    /// for code in ErrorCode::ALL {
    ///     let object = ErrorObject::from_code(code);
    ///     assert_eq!(object.code(), code);
    ///     assert_eq!(object.message(), code.msg());
    ///     assert_eq!(object.data(), None);
    /// }
    /// ```
    pub const fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.msg(),
            data: None,
        }
    }

    /// Creates a new error using [`PARSE_ERROR`].
    pub const fn parse_error() -> Self {
        Self {
            code: ErrorCode::ParseError,
            message: PARSE_ERROR.1,
            data: None,
        }
    }

    /// Creates a new error using [`INVALID_REQUEST`].
    pub const fn invalid_request() -> Self {
        Self {
            code: ErrorCode::InvalidRequest,
            message: INVALID_REQUEST.1,
            data: None,
        }
    }

    /// Creates a new error using [`METHOD_NOT_FOUND`].
    pub const fn method_not_found() -> Self {
        Self {
            code: ErrorCode::MethodNotFound,
            message: METHOD_NOT_FOUND.1,
            data: None,
        }
    }

    /// Creates a new error using [`INVALID_PARAMS`].
    pub const fn invalid_params() -> Self {
        Self {
            code: ErrorCode::InvalidParams,
            message: INVALID_PARAMS.1,
            data: None,
        }
    }

    /// Creates a new error using [`INTERNAL_ERROR`].
    pub const fn internal_error() -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: INTERNAL_ERROR.1,
            data: None,
        }
    }

    /// Creates a new error using [`SERVER_ERROR`].
    ///
    /// This is [`ErrorObject::unexpected`] without data.
    pub const fn server_error() -> Self {
        Self::unexpected(None)
    }

    /// Creates a new error using [`UNAUTHORIZED`].
    pub const fn unauthorized() -> Self {
        Self {
            code: ErrorCode::Unauthorized,
            message: UNAUTHORIZED.1,
            data: None,
        }
    }

    /// Creates a new error using [`FORBIDDEN`].
    pub const fn forbidden() -> Self {
        Self {
            code: ErrorCode::Forbidden,
            message: FORBIDDEN.1,
            data: None,
        }
    }

    /// Creates a new error using [`DUPLICATE_VALUE`].
    pub const fn duplicate_value() -> Self {
        Self {
            code: ErrorCode::DuplicateValue,
            message: DUPLICATE_VALUE.1,
            data: None,
        }
    }

    /// Creates a new error using [`BAD_CREDENTIALS`].
    pub const fn bad_credentials() -> Self {
        Self {
            code: ErrorCode::BadCredentials,
            message: BAD_CREDENTIALS.1,
            data: None,
        }
    }

    /// Creates a new error using [`NOT_FOUND`].
    pub const fn not_found() -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: NOT_FOUND.1,
            data: None,
        }
    }

    /// Replace the attached data.
    ///
    /// The code and message are untouched.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The error code.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// The canonical message of [`ErrorObject::code`].
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// The attached data, if any.
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Take the attached data out of `self`.
    pub fn into_data(self) -> Option<Value> {
        self.data
    }

    /// The [`ErrorCategory`] of [`ErrorObject::code`].
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

//---------------------------------------------------------------------------------------------------- Trait impl
impl From<ErrorCode> for ErrorObject {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

impl Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Using `self.code`'s formatting would skip the data.
        write!(f, "{}: {}", self.code.code(), self.message)?;

        let Some(data) = &self.data else {
            return Ok(());
        };

        if let Value::String(s) = data {
            write!(f, " ({s})")
        } else {
            // `Value`'s `Display` is its compact JSON encoding.
            write!(f, " ({data})")
        }
    }
}

impl Error for ErrorObject {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.code)
    }
}

//---------------------------------------------------------------------------------------------------- Serde impl
/// The wire shape of [`ErrorObject`], minus the message.
#[derive(Deserialize)]
struct RawErrorObject {
    code: ErrorCode,
    /// A present `null` is kept as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "deserialize_present")]
    data: Option<Value>,
}

/// Only called when `data` is present, so always [`Some`].
fn deserialize_present<'de, D>(d: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(d).map(Some)
}

impl<'a> Deserialize<'a> for ErrorObject {
    /// Any `message` in the input is discarded
    /// and replaced by the canonical one for `code`.
    fn deserialize<D: Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        let RawErrorObject { code, data } = RawErrorObject::deserialize(deserializer)?;
        Ok(Self::new(code, data))
    }
}
