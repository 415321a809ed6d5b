use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use graph_scalars::ScalarCodec;

use crate::error::input_error;
use crate::value::to_input;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt(pub graph_scalars::BigInt);

#[Scalar]
/// Represents an arbitrary-precision signed integer as a base-10 string.
impl ScalarType for BigInt {
    fn parse(value: Value) -> InputValueResult<Self> {
        graph_scalars::BigInt::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.marshal())
    }
}

impl From<graph_scalars::BigInt> for BigInt {
    fn from(value: graph_scalars::BigInt) -> Self {
        Self(value)
    }
}

impl From<BigInt> for graph_scalars::BigInt {
    fn from(value: BigInt) -> Self {
        value.0
    }
}
