//! Error taxonomy.

//---------------------------------------------------------------------------------------------------- Use
use serde::{Deserialize, Serialize};

use crate::constants::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, NOT_FOUND, PARSE_ERROR,
    SERVER_ERROR_RANGE_END, SERVER_ERROR_RANGE_START, UNAUTHORIZED,
};

//---------------------------------------------------------------------------------------------------- ErrorCategory
/// The class an error code belongs to.
///
/// ```rust
/// use rpc_error::ErrorCategory;
///
/// assert_eq!(ErrorCategory::of(-32700), ErrorCategory::StandardProtocol);
/// assert_eq!(ErrorCategory::of(-32603), ErrorCategory::StandardProtocol);
/// assert_eq!(ErrorCategory::of(-32000), ErrorCategory::ServerDefined);
/// assert_eq!(ErrorCategory::of(-32099), ErrorCategory::ServerDefined);
/// assert_eq!(ErrorCategory::of(-32001), ErrorCategory::Application);
/// assert_eq!(ErrorCategory::of(-32005), ErrorCategory::Application);
/// assert_eq!(ErrorCategory::of(-1),     ErrorCategory::Unassigned);
/// assert_eq!(ErrorCategory::of(-32100), ErrorCategory::Unassigned);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// One of the 5 errors defined by JSON-RPC 2.0 itself.
    StandardProtocol,

    /// A code in the reserved `-32000..=-32099` range
    /// that is not an [`ErrorCategory::Application`] code.
    ///
    /// This includes the catch-all unexpected error.
    ServerDefined,

    /// Authorization and lookup failures defined by this crate.
    Application,

    /// Any other integer.
    Unassigned,
}

impl ErrorCategory {
    /// Classify a raw error code.
    pub const fn of(code: i32) -> Self {
        if code == PARSE_ERROR.0
            || code == INVALID_REQUEST.0
            || code == METHOD_NOT_FOUND.0
            || code == INVALID_PARAMS.0
            || code == INTERNAL_ERROR.0
        {
            Self::StandardProtocol
        } else if code <= UNAUTHORIZED.0 && code >= NOT_FOUND.0 {
            Self::Application
        } else if code >= SERVER_ERROR_RANGE_START && code <= SERVER_ERROR_RANGE_END {
            Self::ServerDefined
        } else {
            Self::Unassigned
        }
    }
}
