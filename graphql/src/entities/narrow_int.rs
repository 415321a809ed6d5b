//! Small integers are returned as numbers and accepted as numbers or decimal strings.

use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use graph_scalars::ScalarCodec;

use crate::error::input_error;
use crate::value::{numeric_value, to_input};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Int8(pub i8);

#[Scalar]
/// Represents a signed 8-bit integer.
impl ScalarType for Int8 {
    fn parse(value: Value) -> InputValueResult<Self> {
        i8::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        numeric_value(self.0.marshal())
    }
}

impl From<i8> for Int8 {
    fn from(value: i8) -> Self {
        Self(value)
    }
}

impl From<Int8> for i8 {
    fn from(value: Int8) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Int16(pub i16);

#[Scalar]
/// Represents a signed 16-bit integer.
impl ScalarType for Int16 {
    fn parse(value: Value) -> InputValueResult<Self> {
        i16::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        numeric_value(self.0.marshal())
    }
}

impl From<i16> for Int16 {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

impl From<Int16> for i16 {
    fn from(value: Int16) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UInt8(pub u8);

#[Scalar(name = "UInt8")]
/// Represents an unsigned 8-bit integer.
impl ScalarType for UInt8 {
    fn parse(value: Value) -> InputValueResult<Self> {
        u8::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        numeric_value(self.0.marshal())
    }
}

impl From<u8> for UInt8 {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<UInt8> for u8 {
    fn from(value: UInt8) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UInt16(pub u16);

#[Scalar(name = "UInt16")]
/// Represents an unsigned 16-bit integer.
impl ScalarType for UInt16 {
    fn parse(value: Value) -> InputValueResult<Self> {
        u16::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        numeric_value(self.0.marshal())
    }
}

impl From<u16> for UInt16 {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<UInt16> for u16 {
    fn from(value: UInt16) -> Self {
        value.0
    }
}
