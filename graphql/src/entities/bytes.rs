use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use graph_scalars::ScalarCodec;

use crate::error::input_error;
use crate::value::to_input;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub graph_scalars::Bytes);

#[Scalar]
/// Represents a byte string in hex form with a `0x` prefix.
///
/// The prefix is optional on input.
impl ScalarType for Bytes {
    fn parse(value: Value) -> InputValueResult<Self> {
        graph_scalars::Bytes::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.marshal())
    }
}

impl From<graph_scalars::Bytes> for Bytes {
    fn from(bytes: graph_scalars::Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl From<Bytes> for graph_scalars::Bytes {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
