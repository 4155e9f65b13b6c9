//! [`JSON-RPC 2.0`](https://www.jsonrpc.org/specification#error_object) and
//! application defined errors as constants.

//---------------------------------------------------------------------------------------------------- JSON-RPC spec errors.
/// Code and message for [`ErrorCode::ParseError`](crate::ErrorCode::ParseError).
pub const PARSE_ERROR: (i32, &str) = (-32700, "Parse error");

/// Code and message for [`ErrorCode::InvalidRequest`](crate::ErrorCode::InvalidRequest).
pub const INVALID_REQUEST: (i32, &str) = (-32600, "Invalid Request");

/// Code and message for [`ErrorCode::MethodNotFound`](crate::ErrorCode::MethodNotFound).
pub const METHOD_NOT_FOUND: (i32, &str) = (-32601, "Method not found");

/// Code and message for [`ErrorCode::InvalidParams`](crate::ErrorCode::InvalidParams).
pub const INVALID_PARAMS: (i32, &str) = (-32602, "Invalid params");

/// Code and message for [`ErrorCode::InternalError`](crate::ErrorCode::InternalError).
pub const INTERNAL_ERROR: (i32, &str) = (-32603, "Internal error");

/// Code and message for [`ErrorCode::ServerError`](crate::ErrorCode::ServerError).
///
/// This is the code used by [`ErrorObject::unexpected`](crate::ErrorObject::unexpected).
pub const SERVER_ERROR: (i32, &str) = (-32000, "Server error");

//---------------------------------------------------------------------------------------------------- Application errors.
/// Code and message for [`ErrorCode::Unauthorized`](crate::ErrorCode::Unauthorized).
pub const UNAUTHORIZED: (i32, &str) = (-32001, "Unauthorized");

/// Code and message for [`ErrorCode::Forbidden`](crate::ErrorCode::Forbidden).
pub const FORBIDDEN: (i32, &str) = (-32002, "Forbidden");

/// Code and message for [`ErrorCode::DuplicateValue`](crate::ErrorCode::DuplicateValue).
pub const DUPLICATE_VALUE: (i32, &str) = (-32003, "Duplicate value");

/// Code and message for [`ErrorCode::BadCredentials`](crate::ErrorCode::BadCredentials).
pub const BAD_CREDENTIALS: (i32, &str) = (-32004, "Bad credentials");

/// Code and message for [`ErrorCode::NotFound`](crate::ErrorCode::NotFound).
pub const NOT_FOUND: (i32, &str) = (-32005, "Not found");

//---------------------------------------------------------------------------------------------------- Ranges
/// The lowest code of the implementation-defined server error range.
pub const SERVER_ERROR_RANGE_START: i32 = -32099;

/// The highest code of the implementation-defined server error range.
pub const SERVER_ERROR_RANGE_END: i32 = -32000;

//---------------------------------------------------------------------------------------------------- Table
/// Every `(code, message)` pair known to this crate.
///
/// The order is: JSON-RPC 2.0 errors, then application errors.
pub const CATALOG: [(i32, &str); 11] = [
    PARSE_ERROR,
    INVALID_REQUEST,
    METHOD_NOT_FOUND,
    INVALID_PARAMS,
    INTERNAL_ERROR,
    SERVER_ERROR,
    UNAUTHORIZED,
    FORBIDDEN,
    DUPLICATE_VALUE,
    BAD_CREDENTIALS,
    NOT_FOUND,
];

/// Look up the canonical message of `code`.
///
/// Returns [`None`] if `code` is not in [`CATALOG`].
///
/// ```rust
/// use rpc_error::constants::{lookup, NOT_FOUND, PARSE_ERROR};
///
/// assert_eq!(lookup(PARSE_ERROR.0), Some(PARSE_ERROR.1));
/// assert_eq!(lookup(NOT_FOUND.0),   Some("Not found"));
/// assert_eq!(lookup(-1),            None);
/// assert_eq!(lookup(-32099),        None);
/// ```
pub const fn lookup(code: i32) -> Option<&'static str> {
    let mut i = 0;
    while i < CATALOG.len() {
        if CATALOG[i].0 == code {
            return Some(CATALOG[i].1);
        }
        i += 1;
    }
    None
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    /// No code is listed twice.
    #[test]
    fn catalog_codes_are_unique() {
        let codes = CATALOG.iter().map(|(c, _)| *c).collect::<HashSet<i32>>();
        assert_eq!(codes.len(), CATALOG.len());
    }

    /// Every entry is found by [`lookup`].
    #[test]
    fn lookup_finds_every_entry() {
        for (code, msg) in CATALOG {
            assert_eq!(lookup(code), Some(msg));
        }
    }

    /// Application codes sit inside the server error range.
    #[test]
    fn application_codes_in_server_range() {
        for (code, _) in [UNAUTHORIZED, FORBIDDEN, DUPLICATE_VALUE, BAD_CREDENTIALS, NOT_FOUND] {
            assert!((SERVER_ERROR_RANGE_START..=SERVER_ERROR_RANGE_END).contains(&code));
        }
    }
}
