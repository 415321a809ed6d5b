use async_graphql::Number;
use async_graphql::Value;
use graph_scalars::Input;

/// Converts a GraphQL value into the input shape understood by the codecs.
///
/// Numbers are passed as their literal text so that each codec parses them at its own width.
pub(crate) fn to_input(value: Value) -> Input {
    match value {
        Value::Null => Input::Null,
        Value::Number(number) => Input::Number(number.to_string()),
        Value::String(text) => Input::String(text),
        Value::Boolean(value) => Input::Boolean(value),
        Value::Binary(_) => Input::Unsupported("binary"),
        Value::Enum(_) => Input::Unsupported("enum"),
        Value::List(_) => Input::Unsupported("list"),
        Value::Object(_) => Input::Unsupported("object"),
    }
}

/// Returns the marshalled text as a number, or as a string when it is not a valid
/// JSON number, which is the case for `+Inf`, `-Inf` and `NaN`.
pub(crate) fn numeric_value(text: String) -> Value {
    match text.parse::<Number>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(text),
    }
}
