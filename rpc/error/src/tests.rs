//! Tests and utilities.

//---------------------------------------------------------------------------------------------------- Use
use pretty_assertions::assert_eq;
use proptest::{
    prelude::{any, prop, Just, Strategy},
    prop_assert_eq, prop_oneof, proptest,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, to_string, to_value, Value};

use crate::{constants::lookup, ErrorCategory, ErrorCode, ErrorObject};

//---------------------------------------------------------------------------------------------------- Free functions
/// Assert input and output of serialization are the same.
pub(crate) fn assert_ser<T>(t: &T, expected_value: &Value)
where
    T: Serialize + std::fmt::Debug + Clone + PartialEq,
{
    let value = to_value(t).unwrap();
    assert_eq!(value, *expected_value);
}

/// Assert input and output of string serialization are the same.
pub(crate) fn assert_ser_string<T>(t: &T, expected_string: &str)
where
    T: Serialize + std::fmt::Debug + Clone + PartialEq,
{
    let string = to_string(t).unwrap();
    assert_eq!(string, expected_string);
}

/// Tests an input JSON string matches an expected type `T`.
pub(crate) fn assert_de<T>(json: &'static str, expected: &T)
where
    T: DeserializeOwned + std::fmt::Debug + Clone + PartialEq,
{
    let t = serde_json::from_str::<T>(json).unwrap();
    assert_eq!(t, *expected);
}

/// Arbitrary JSON data, `null` included.
///
/// Floats are left out, they are not needed to exercise `data`.
fn arb_data() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<String>().prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

//---------------------------------------------------------------------------------------------------- TESTS
/// The whole table, written out by hand.
#[test]
fn canonical_messages() {
    for (code, msg) in [
        (-32700, "Parse error"),
        (-32600, "Invalid Request"),
        (-32601, "Method not found"),
        (-32602, "Invalid params"),
        (-32603, "Internal error"),
        (-32000, "Server error"),
        (-32001, "Unauthorized"),
        (-32002, "Forbidden"),
        (-32003, "Duplicate value"),
        (-32004, "Bad credentials"),
        (-32005, "Not found"),
    ] {
        let e = ErrorObject::new(code, Some(json!({"code": code})));
        assert_eq!(e.code().code(), code);
        assert_eq!(e.message(), msg);
        assert_eq!(e.data(), Some(&json!({"code": code})));
    }
}

/// An error object as it would sit inside a JSON-RPC response.
#[test]
fn embedded_in_response() {
    let response = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": ErrorObject::new(-32002, Some(json!("admin only"))),
    });

    assert_eq!(
        to_string(&response).unwrap(),
        r#"{"error":{"code":-32002,"data":"admin only","message":"Forbidden"},"id":1,"jsonrpc":"2.0"}"#
    );

    let error = serde_json::from_value::<ErrorObject>(response["error"].clone()).unwrap();
    assert_eq!(error, ErrorObject::forbidden().with_data(json!("admin only")));
}

proptest! {
    /// `i32 -> ErrorCode -> i32` is the identity.
    #[test]
    fn code_identity(code in any::<i32>()) {
        let e = ErrorObject::new(code, None);
        prop_assert_eq!(e.code().code(), code);
        prop_assert_eq!(e.message(), lookup(code).unwrap_or(""));
        prop_assert_eq!(e.code().is_known(), lookup(code).is_some());
        prop_assert_eq!(e.category(), ErrorCategory::of(code));
    }

    /// String data is rendered as-is.
    #[test]
    fn string_data_display(code in any::<i32>(), data in any::<String>()) {
        let e = ErrorObject::new(code, Some(Value::String(data.clone())));
        let code = ErrorCode::from_code(code);
        prop_assert_eq!(e.to_string(), format!("{}: {} ({data})", code.code(), code.msg()));
    }

    /// Unexpected errors do not depend on their data.
    #[test]
    fn unexpected_any_data(n in any::<i64>(), s in any::<String>()) {
        for data in [json!(n), json!(s), json!({"n": n, "s": s})] {
            let e = ErrorObject::unexpected(Some(data.clone()));
            prop_assert_eq!(e.code(), ErrorCode::ServerError);
            prop_assert_eq!(e.message(), "Server error");
            prop_assert_eq!(e.data(), Some(&data));
        }
    }

    /// The JSON form always survives a trip through text.
    #[test]
    fn json_text_round_trip(code in any::<i32>(), data in proptest::option::of(arb_data())) {
        let e = ErrorObject::new(code, data);
        let text = to_string(&e).unwrap();
        let back = serde_json::from_str::<ErrorObject>(&text).unwrap();
        prop_assert_eq!(back, e);
    }
}
