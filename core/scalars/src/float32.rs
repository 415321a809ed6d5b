//! Codec for single precision floats.
//!
//! There are two ways to marshal a float: [ScalarCodec::marshal] never fails and writes
//! `+Inf`, `-Inf` or `NaN` for non-finite values, while [marshal_finite] rejects them.
//! Both produce the shortest text that parses back to the same value.

use crate::Input;
use crate::ScalarCodec;
use crate::ScalarError;

const EXPECTED: &str = "a string, a number, a float32 or a native integer of at least 32 bits";

// Plain decimal notation is used for decimal exponents in this range,
// exponent notation outside of it.
const MIN_PLAIN_EXPONENT: i32 = -4;
const MAX_PLAIN_EXPONENT: i32 = 5;

impl ScalarCodec for f32 {
    const NAME: &'static str = "Float32";

    fn marshal(&self) -> String {
        format_shortest(*self)
    }

    fn unmarshal(input: Input) -> Result<Self, ScalarError> {
        match input {
            Input::String(text) | Input::Number(text) => parse_text(text),
            Input::Float32(value) => Ok(value),
            input => match input.native_integer() {
                Some((value, bits)) if bits >= u32::BITS => Ok(value as f32),
                _ => Err(input.mismatch(Self::NAME, EXPECTED)),
            },
        }
    }
}

fn parse_text(text: String) -> Result<f32, ScalarError> {
    const NAME: &str = <f32 as ScalarCodec>::NAME;

    let value = match text.parse::<f32>() {
        Ok(value) => value,
        Err(err) => return Err(ScalarError::invalid_format(NAME, text, err)),
    };

    // Finite text that overflows the float32 range parses as infinity.
    if value.is_infinite() && !is_infinity_literal(&text) {
        return Err(ScalarError::invalid_format(
            NAME,
            text,
            "magnitude exceeds the float32 range",
        ));
    }

    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);

    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Returns the value unchanged if it is neither infinite nor NaN.
pub fn ensure_finite(value: f32) -> Result<f32, ScalarError> {
    if !value.is_finite() {
        return Err(ScalarError::NonFinite {
            scalar: <f32 as ScalarCodec>::NAME,
            value: format_shortest(value),
        });
    }

    Ok(value)
}

/// Marshals the value like [ScalarCodec::marshal], but fails on infinite and NaN values.
pub fn marshal_finite(value: f32) -> Result<String, ScalarError> {
    ensure_finite(value).map(format_shortest)
}

fn format_shortest(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }

    if value.is_infinite() {
        return if value.is_sign_positive() { "+Inf" } else { "-Inf" }.to_owned();
    }

    // Scientific formatting yields the shortest round-tripping digits, e.g. `-1.2345e-7`.
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(mantissa) => ("-", mantissa),
        None => ("", mantissa),
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::from(sign);

    if !(MIN_PLAIN_EXPONENT..=MAX_PLAIN_EXPONENT).contains(&exponent) {
        let (first, rest) = digits.split_at(1);

        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }

        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        out.push_str(&format!("e{exponent_sign}{:02}", exponent.unsigned_abs()));
    } else if exponent < 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(exponent.unsigned_abs() as usize - 1));
        out.push_str(&digits);
    } else {
        let int_len = exponent as usize + 1;

        if digits.len() <= int_len {
            out.push_str(&digits);
            out.push_str(&"0".repeat(int_len - digits.len()));
        } else {
            let (int_part, fraction) = digits.split_at(int_len);

            out.push_str(int_part);
            out.push('.');
            out.push_str(fraction);
        }
    }

    out
}
