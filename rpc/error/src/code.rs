//! Error codes.

//---------------------------------------------------------------------------------------------------- Use
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    category::ErrorCategory,
    constants::{
        BAD_CREDENTIALS, DUPLICATE_VALUE, FORBIDDEN, INTERNAL_ERROR, INVALID_PARAMS,
        INVALID_REQUEST, METHOD_NOT_FOUND, NOT_FOUND, PARSE_ERROR, SERVER_ERROR, UNAUTHORIZED,
    },
};

//---------------------------------------------------------------------------------------------------- ErrorCode
/// [Error object code](https://www.jsonrpc.org/specification#error_object).
///
/// This `enum` encapsulates JSON-RPC 2.0's error codes and the
/// application error codes found in [`ErrorObject`](crate::ErrorObject).
///
/// It associates the code integer ([`i32`]) with its canonical message.
///
/// # Unknown codes
/// Any integer not in [`CATALOG`](crate::constants::CATALOG) is
/// kept as-is in [`ErrorCode::Unknown`], its message is empty.
///
/// # Display
/// ```rust
/// use rpc_error::ErrorCode;
///
/// for e in ErrorCode::ALL {
///     // The formatting is `$CODE: $MSG`.
///     let expected_fmt = format!("{}: {}", e.code(), e.msg());
///     assert_eq!(expected_fmt, format!("{e}"));
/// }
///
/// assert_eq!(format!("{}", ErrorCode::Unknown(-1)), "-1: ");
/// ```
///
/// # (De)serialization
/// This type gets (de)serialized as the associated `i32`, for example:
/// ```rust
/// use rpc_error::ErrorCode;
/// use serde_json::{to_value, from_value, Value};
///
/// for e in ErrorCode::ALL.into_iter().chain([ErrorCode::Unknown(0), ErrorCode::Unknown(-32050)]) {
///     // Gets serialized into a JSON integer.
///     let value = to_value(&e).unwrap();
///     assert_eq!(value, Value::Number(e.code().into()));
///
///     // Expects a JSON integer when deserializing.
///     assert_eq!(e, from_value(value).unwrap());
/// }
/// ```
///
/// ```rust,should_panic
/// # use rpc_error::ErrorCode;
/// # use serde_json::from_value;
/// // A JSON string that contains an integer won't work.
/// from_value::<ErrorCode>("-32700".into()).unwrap();
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum ErrorCode {
    #[error("{}: {}", PARSE_ERROR.0, PARSE_ERROR.1)]
    /// Invalid JSON was received by the server.
    ///
    /// An error occurred on the server while parsing the JSON text.
    ParseError,

    #[error("{}: {}", INVALID_REQUEST.0, INVALID_REQUEST.1)]
    /// The JSON sent is not a valid Request object.
    InvalidRequest,

    #[error("{}: {}", METHOD_NOT_FOUND.0, METHOD_NOT_FOUND.1)]
    /// The method does not exist / is not available.
    MethodNotFound,

    #[error("{}: {}", INVALID_PARAMS.0, INVALID_PARAMS.1)]
    /// Invalid method parameters.
    InvalidParams,

    #[error("{}: {}", INTERNAL_ERROR.0, INTERNAL_ERROR.1)]
    /// Internal JSON-RPC error.
    InternalError,

    #[error("{}: {}", SERVER_ERROR.0, SERVER_ERROR.1)]
    /// Generic implementation-defined server error.
    ///
    /// Used for unexpected failures.
    ServerError,

    #[error("{}: {}", UNAUTHORIZED.0, UNAUTHORIZED.1)]
    /// The caller is not authenticated.
    Unauthorized,

    #[error("{}: {}", FORBIDDEN.0, FORBIDDEN.1)]
    /// The caller is authenticated but not allowed to do this.
    Forbidden,

    #[error("{}: {}", DUPLICATE_VALUE.0, DUPLICATE_VALUE.1)]
    /// A value that must be unique already exists.
    DuplicateValue,

    #[error("{}: {}", BAD_CREDENTIALS.0, BAD_CREDENTIALS.1)]
    /// The supplied credentials were rejected.
    BadCredentials,

    #[error("{}: {}", NOT_FOUND.0, NOT_FOUND.1)]
    /// The requested resource does not exist.
    NotFound,

    #[error("{0}: ")]
    /// A code with no entry in the catalog.
    Unknown(i32),
}

impl ErrorCode {
    /// Every catalogued code, in [`CATALOG`](crate::constants::CATALOG) order.
    ///
    /// This excludes [`ErrorCode::Unknown`].
    pub const ALL: [Self; 11] = [
        Self::ParseError,
        Self::InvalidRequest,
        Self::MethodNotFound,
        Self::InvalidParams,
        Self::InternalError,
        Self::ServerError,
        Self::Unauthorized,
        Self::Forbidden,
        Self::DuplicateValue,
        Self::BadCredentials,
        Self::NotFound,
    ];

    /// Creates [`Self`] from a [`i32`] code.
    ///
    /// [`From<i32>`] is the same as this function.
    ///
    /// ```rust
    /// use rpc_error::{
    ///     ErrorCode,
    ///     constants::{PARSE_ERROR, SERVER_ERROR, NOT_FOUND},
    /// };
    ///
    /// assert_eq!(ErrorCode::from_code(PARSE_ERROR.0),  ErrorCode::ParseError);
    /// assert_eq!(ErrorCode::from_code(SERVER_ERROR.0), ErrorCode::ServerError);
    /// assert_eq!(ErrorCode::from_code(NOT_FOUND.0),    ErrorCode::NotFound);
    ///
    /// // Non-defined code inputs are kept in `Unknown`.
    /// assert_eq!(ErrorCode::from_code(0),      ErrorCode::Unknown(0));
    /// assert_eq!(ErrorCode::from_code(-32099), ErrorCode::Unknown(-32099));
    /// ```
    pub const fn from_code(code: i32) -> Self {
        // FIXME: you cannot `match` on tuple fields
        // so use `if`.
        if code == PARSE_ERROR.0 {
            Self::ParseError
        } else if code == INVALID_REQUEST.0 {
            Self::InvalidRequest
        } else if code == METHOD_NOT_FOUND.0 {
            Self::MethodNotFound
        } else if code == INVALID_PARAMS.0 {
            Self::InvalidParams
        } else if code == INTERNAL_ERROR.0 {
            Self::InternalError
        } else if code == SERVER_ERROR.0 {
            Self::ServerError
        } else if code == UNAUTHORIZED.0 {
            Self::Unauthorized
        } else if code == FORBIDDEN.0 {
            Self::Forbidden
        } else if code == DUPLICATE_VALUE.0 {
            Self::DuplicateValue
        } else if code == BAD_CREDENTIALS.0 {
            Self::BadCredentials
        } else if code == NOT_FOUND.0 {
            Self::NotFound
        } else {
            Self::Unknown(code)
        }
    }

    /// Returns `self`'s [`i32`] code representation.
    ///
    /// ```rust
    /// use rpc_error::{ErrorCode, constants::{INVALID_PARAMS, FORBIDDEN}};
    ///
    /// assert_eq!(ErrorCode::InvalidParams.code(), INVALID_PARAMS.0);
    /// assert_eq!(ErrorCode::Forbidden.code(),     FORBIDDEN.0);
    /// assert_eq!(ErrorCode::Unknown(-1).code(),   -1);
    /// ```
    pub const fn code(&self) -> i32 {
        match self {
            Self::ParseError => PARSE_ERROR.0,
            Self::InvalidRequest => INVALID_REQUEST.0,
            Self::MethodNotFound => METHOD_NOT_FOUND.0,
            Self::InvalidParams => INVALID_PARAMS.0,
            Self::InternalError => INTERNAL_ERROR.0,
            Self::ServerError => SERVER_ERROR.0,
            Self::Unauthorized => UNAUTHORIZED.0,
            Self::Forbidden => FORBIDDEN.0,
            Self::DuplicateValue => DUPLICATE_VALUE.0,
            Self::BadCredentials => BAD_CREDENTIALS.0,
            Self::NotFound => NOT_FOUND.0,
            Self::Unknown(code) => *code,
        }
    }

    /// Returns `self`'s canonical [`str`] message.
    ///
    /// This is the empty string for [`ErrorCode::Unknown`].
    ///
    /// ```rust
    /// use rpc_error::{ErrorCode, constants::{DUPLICATE_VALUE, METHOD_NOT_FOUND}};
    ///
    /// assert_eq!(ErrorCode::MethodNotFound.msg(), METHOD_NOT_FOUND.1);
    /// assert_eq!(ErrorCode::DuplicateValue.msg(), DUPLICATE_VALUE.1);
    /// assert_eq!(ErrorCode::Unknown(-1).msg(),    "");
    /// ```
    pub const fn msg(&self) -> &'static str {
        match self {
            Self::ParseError => PARSE_ERROR.1,
            Self::InvalidRequest => INVALID_REQUEST.1,
            Self::MethodNotFound => METHOD_NOT_FOUND.1,
            Self::InvalidParams => INVALID_PARAMS.1,
            Self::InternalError => INTERNAL_ERROR.1,
            Self::ServerError => SERVER_ERROR.1,
            Self::Unauthorized => UNAUTHORIZED.1,
            Self::Forbidden => FORBIDDEN.1,
            Self::DuplicateValue => DUPLICATE_VALUE.1,
            Self::BadCredentials => BAD_CREDENTIALS.1,
            Self::NotFound => NOT_FOUND.1,
            Self::Unknown(_) => "",
        }
    }

    /// Returns `false` for [`ErrorCode::Unknown`].
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Returns the [`ErrorCategory`] of `self`.
    ///
    /// ```rust
    /// use rpc_error::{ErrorCategory, ErrorCode};
    ///
    /// assert_eq!(ErrorCode::InternalError.category(),   ErrorCategory::StandardProtocol);
    /// assert_eq!(ErrorCode::ServerError.category(),     ErrorCategory::ServerDefined);
    /// assert_eq!(ErrorCode::BadCredentials.category(),  ErrorCategory::Application);
    /// assert_eq!(ErrorCode::Unknown(-32042).category(), ErrorCategory::ServerDefined);
    /// assert_eq!(ErrorCode::Unknown(7).category(),      ErrorCategory::Unassigned);
    /// ```
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::of(self.code())
    }
}

//---------------------------------------------------------------------------------------------------- Trait impl
impl<N: Into<i32>> From<N> for ErrorCode {
    fn from(code: N) -> Self {
        Self::from_code(code.into())
    }
}

//---------------------------------------------------------------------------------------------------- Serde impl
impl<'a> Deserialize<'a> for ErrorCode {
    fn deserialize<D: Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_code(Deserialize::deserialize(deserializer)?))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::CATALOG;

    /// [`ErrorCode::ALL`] and [`CATALOG`] agree entry by entry.
    #[test]
    fn all_matches_catalog() {
        for (code, (raw, msg)) in ErrorCode::ALL.into_iter().zip(CATALOG) {
            assert_eq!(code.code(), raw);
            assert_eq!(code.msg(), msg);
            assert_eq!(ErrorCode::from_code(raw), code);
            assert!(code.is_known());
        }
    }

    /// Unknown codes keep their integer.
    #[test]
    fn unknown() {
        for raw in [i32::MIN, -32768, -32099, -32006, -1, 0, 1, i32::MAX] {
            let code = ErrorCode::from(raw);
            assert_eq!(code, ErrorCode::Unknown(raw));
            assert_eq!(code.code(), raw);
            assert_eq!(code.msg(), "");
            assert!(!code.is_known());
        }
    }
}
