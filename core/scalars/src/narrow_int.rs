//! Codecs for the 8 and 16 bit integers.
//!
//! Text and numeric literals are parsed at the target width, so overflow is a format error.
//! Native integers are accepted when they are at least as wide as the target:
//! unsigned targets reject values outside their range, while signed targets truncate.
//! Signed targets never report a range error, unlike unsigned ones.

use crate::Input;
use crate::ScalarCodec;
use crate::ScalarError;

const EXPECTED: &str = "a string, a number or a native integer at least as wide as the target";

macro_rules! impl_narrow_int {
    ($ty:ty, $name:literal, $convert:ident) => {
        impl ScalarCodec for $ty {
            const NAME: &'static str = $name;

            fn marshal(&self) -> String {
                self.to_string()
            }

            fn unmarshal(input: Input) -> Result<Self, ScalarError> {
                match input {
                    Input::String(text) | Input::Number(text) => text
                        .parse::<$ty>()
                        .map_err(|err| ScalarError::invalid_format(Self::NAME, text, err)),
                    input => match input.native_integer() {
                        Some((value, bits)) if bits >= <$ty>::BITS => $convert::<$ty>(value),
                        _ => Err(input.mismatch(Self::NAME, EXPECTED)),
                    },
                }
            }
        }
    };
}

impl_narrow_int!(i8, "Int8", truncate);
impl_narrow_int!(i16, "Int16", truncate);
impl_narrow_int!(u8, "UInt8", range_checked);
impl_narrow_int!(u16, "UInt16", range_checked);

trait NarrowInt: ScalarCodec + TryFrom<i128> {
    fn truncated(value: i128) -> Self;
}

macro_rules! impl_truncated {
    ($($ty:ty),+) => {
        $(
            impl NarrowInt for $ty {
                fn truncated(value: i128) -> Self {
                    value as $ty
                }
            }
        )+
    };
}

impl_truncated!(i8, i16, u8, u16);

fn truncate<T: NarrowInt>(value: i128) -> Result<T, ScalarError> {
    Ok(T::truncated(value))
}

fn range_checked<T: NarrowInt>(value: i128) -> Result<T, ScalarError> {
    T::try_from(value).map_err(|_| ScalarError::Range {
        scalar: T::NAME,
        value: value.to_string(),
    })
}
