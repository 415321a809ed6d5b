use crate::ScalarError;

/// Describes every shape of value a scalar can receive as input.
///
/// The GraphQL layer converts its own dynamic values into this type before decoding,
/// so each codec dispatches on a closed set of variants instead of inspecting types at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    String(String),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),

    /// A numeric literal kept as its source text.
    Number(String),

    Boolean(bool),
    Null,

    /// Any other shape, such as a list or an object, that no scalar accepts.
    Unsupported(&'static str),
}

impl Input {
    /// Creates a numeric literal input.
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    /// Returns the name of the shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int8(_) => "int8",
            Self::Int16(_) => "int16",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::UInt8(_) => "uint8",
            Self::UInt16(_) => "uint16",
            Self::UInt32(_) => "uint32",
            Self::UInt64(_) => "uint64",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
            Self::Unsupported(kind) => *kind,
        }
    }

    /// Returns the value and the bit width of a native integer input.
    pub(crate) fn native_integer(&self) -> Option<(i128, u32)> {
        let integer: (i128, u32) = match *self {
            Self::Int8(v) => (v.into(), i8::BITS),
            Self::Int16(v) => (v.into(), i16::BITS),
            Self::Int32(v) => (v.into(), i32::BITS),
            Self::Int64(v) => (v.into(), i64::BITS),
            Self::UInt8(v) => (v.into(), u8::BITS),
            Self::UInt16(v) => (v.into(), u16::BITS),
            Self::UInt32(v) => (v.into(), u32::BITS),
            Self::UInt64(v) => (v.into(), u64::BITS),
            _ => return None,
        };

        Some(integer)
    }

    /// Returns the text of a string input, or a type mismatch error naming the scalar.
    pub(crate) fn into_string(self, scalar: &'static str) -> Result<String, ScalarError> {
        let Self::String(text) = self else {
            return Err(self.mismatch(scalar, "a string"));
        };

        Ok(text)
    }

    pub(crate) fn mismatch(&self, scalar: &'static str, expected: &'static str) -> ScalarError {
        ScalarError::TypeMismatch {
            scalar,
            expected,
            found: self.kind(),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from! {
    String => String,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    bool => Boolean,
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl<T> From<Option<T>> for Input
where
    T: Into<Input>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}
