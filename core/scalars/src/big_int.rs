use num_bigint::BigInt;

use crate::Input;
use crate::ScalarCodec;
use crate::ScalarError;

impl ScalarCodec for BigInt {
    const NAME: &'static str = "BigInt";

    fn marshal(&self) -> String {
        self.to_str_radix(10)
    }

    fn unmarshal(input: Input) -> Result<Self, ScalarError> {
        let text = input.into_string(Self::NAME)?;

        // The parser would also accept digit separators, which are not part of the wire format.
        let digits = text.strip_prefix(['-', '+']).unwrap_or(&text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScalarError::invalid_format(
                Self::NAME,
                text,
                "expected a base-10 integer",
            ));
        }

        BigInt::parse_bytes(text.as_bytes(), 10).ok_or_else(|| {
            ScalarError::invalid_format(Self::NAME, text, "expected a base-10 integer")
        })
    }
}
