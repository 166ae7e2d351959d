//! Decoding of loosely typed tool arguments.
//!
//! Callers may encode the same number as an integer, a float or a string
//! depending on their JSON encoder. Every argument is first decoded into an
//! [`ArgValue`] and then converted with a fixed rule table.

use serde_json::Value;

use crate::error::ToolError;
use crate::tools::JsonObject;

/// Shape of a single argument as received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgValue<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
    Other(&'static str),
}

impl<'a> ArgValue<'a> {
    pub fn decode(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => ArgValue::Integer(i),
                // u64 beyond i64::MAX lands here and fails the range check
                None => ArgValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ArgValue::Text(s.as_str()),
            Value::Bool(_) => ArgValue::Other("boolean"),
            Value::Null => ArgValue::Other("null"),
            Value::Array(_) => ArgValue::Other("array"),
            Value::Object(_) => ArgValue::Other("object"),
        }
    }

    /// integer → as is; whole finite float in range → truncated; base-10 string → parsed.
    pub fn to_integer(self) -> Result<i64, String> {
        match self {
            ArgValue::Integer(i) => Ok(i),
            ArgValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err("must be a whole number".to_string())
                }
            }
            ArgValue::Text(s) => s.parse::<i64>().map_err(|_| "must be a number".to_string()),
            ArgValue::Other(kind) => Err(format!("must be a number, got {kind}")),
        }
    }

    /// Only genuine strings are accepted.
    pub fn to_text(self) -> Result<&'a str, String> {
        match self {
            ArgValue::Text(s) => Ok(s),
            ArgValue::Integer(_) | ArgValue::Float(_) => Err("must be a string, got number".to_string()),
            ArgValue::Other(kind) => Err(format!("must be a string, got {kind}")),
        }
    }
}

fn lookup<'a>(args: Option<&'a JsonObject>, name: &str) -> Option<&'a Value> {
    args.and_then(|m| m.get(name))
}

/// Required integer argument. Absent → `MissingArgument`, wrong shape → `InvalidArgument`.
pub fn required_integer(args: Option<&JsonObject>, name: &'static str) -> Result<i64, ToolError> {
    let value = lookup(args, name).ok_or(ToolError::MissingArgument(name))?;
    ArgValue::decode(value)
        .to_integer()
        .map_err(|reason| ToolError::InvalidArgument { name, reason })
}

/// Required string argument. Both absence and a non-string value are `InvalidArgument`.
pub fn required_string(args: Option<&JsonObject>, name: &'static str) -> Result<String, ToolError> {
    let Some(value) = lookup(args, name) else {
        return Err(ToolError::InvalidArgument {
            name,
            reason: "must be a string".to_string(),
        });
    };
    ArgValue::decode(value)
        .to_text()
        .map(str::to_string)
        .map_err(|reason| ToolError::InvalidArgument { name, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(v: Value) -> JsonObject {
        match v {
            Value::Object(m) => m,
            _ => panic!("test args must be an object"),
        }
    }

    #[test]
    fn integer_coercion_table() {
        for raw in [json!(3), json!(3.0), json!("3")] {
            let a = args(json!({ "id": raw }));
            assert_eq!(required_integer(Some(&a), "id").unwrap(), 3, "input {raw}");
        }
        assert_eq!(required_integer(Some(&args(json!({"id": "-12"}))), "id").unwrap(), -12);
    }

    #[test]
    fn integer_rejections() {
        for raw in [
            json!("abc"),
            json!(" 3"),
            json!("3.0"),
            json!(3.5),
            json!(true),
            json!(null),
            json!([3]),
            json!({"v": 3}),
            json!(u64::MAX),
        ] {
            let a = args(json!({ "id": raw }));
            assert!(
                matches!(required_integer(Some(&a), "id"), Err(ToolError::InvalidArgument { name: "id", .. })),
                "input {raw}"
            );
        }
    }

    #[test]
    fn missing_integer_is_missing_argument() {
        assert!(matches!(required_integer(None, "id"), Err(ToolError::MissingArgument("id"))));
        let empty = JsonObject::new();
        assert!(matches!(required_integer(Some(&empty), "id"), Err(ToolError::MissingArgument("id"))));
    }

    #[test]
    fn string_is_not_coerced() {
        let a = args(json!({ "owner": "alice" }));
        assert_eq!(required_string(Some(&a), "owner").unwrap(), "alice");
        let untouched = args(json!({ "owner": "  Alice " }));
        assert_eq!(required_string(Some(&untouched), "owner").unwrap(), "  Alice ");

        for raw in [json!(42), json!(null), json!(["alice"])] {
            let a = args(json!({ "owner": raw }));
            assert!(matches!(
                required_string(Some(&a), "owner"),
                Err(ToolError::InvalidArgument { name: "owner", .. })
            ));
        }
        assert!(matches!(
            required_string(None, "owner"),
            Err(ToolError::InvalidArgument { name: "owner", .. })
        ));
    }

    #[test]
    fn decode_tags_shapes() {
        assert_eq!(ArgValue::decode(&json!(7)), ArgValue::Integer(7));
        assert_eq!(ArgValue::decode(&json!(7.25)), ArgValue::Float(7.25));
        assert_eq!(ArgValue::decode(&json!("x")), ArgValue::Text("x"));
        assert_eq!(ArgValue::decode(&json!(false)), ArgValue::Other("boolean"));
    }
}
