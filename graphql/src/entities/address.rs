use async_graphql::InputValueResult;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use graph_scalars::ScalarCodec;

use crate::error::input_error;
use crate::value::to_input;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Address(pub graph_scalars::Address);

#[Scalar]
/// Represents an account address as 40 hex digits with a `0x` prefix.
///
/// Addresses are returned in the EIP-55 checksum form and accepted in any letter case.
impl ScalarType for Address {
    fn parse(value: Value) -> InputValueResult<Self> {
        graph_scalars::Address::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.marshal())
    }
}

impl From<graph_scalars::Address> for Address {
    fn from(address: graph_scalars::Address) -> Self {
        Self(address)
    }
}

impl From<Address> for graph_scalars::Address {
    fn from(address: Address) -> Self {
        address.0
    }
}
