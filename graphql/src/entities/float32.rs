use async_graphql::Context;
use async_graphql::InputValueResult;
use async_graphql::Result;
use async_graphql::Scalar;
use async_graphql::ScalarType;
use async_graphql::Value;
use graph_scalars::float32;
use graph_scalars::ScalarCodec;
use slog::debug;
use slog::warn;
use slog::Logger;

use crate::error::{input_error, output_error};
use crate::value::{numeric_value, to_input};
use crate::ScalarConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Float32(pub f32);

#[Scalar]
/// Represents a single precision float.
///
/// Infinite and NaN values are returned as the strings `+Inf`, `-Inf` and `NaN`.
impl ScalarType for Float32 {
    fn parse(value: Value) -> InputValueResult<Self> {
        f32::unmarshal(to_input(value))
            .map(Self)
            .map_err(input_error)
    }

    fn to_value(&self) -> Value {
        numeric_value(self.0.marshal())
    }
}

impl Float32 {
    /// Prepares a value to be returned from a resolver, failing the field
    /// if the value is infinite or NaN.
    ///
    /// The check can be disabled with [ScalarConfig::allow_non_finite_floats].
    pub fn finite(ctx: &Context<'_>, value: f32) -> Result<Self> {
        let Err(err) = float32::ensure_finite(value) else {
            return Ok(Self(value));
        };

        let allow_non_finite = ctx
            .data_opt::<ScalarConfig>()
            .is_some_and(|config| config.allow_non_finite_floats);

        let logger = ctx.data_opt::<Logger>();

        if allow_non_finite {
            if let Some(logger) = logger {
                warn!(logger, "Returning non-finite Float32 value {}", value.marshal());
            }

            return Ok(Self(value));
        }

        if let Some(logger) = logger {
            debug!(logger, "Rejecting non-finite Float32 value {}", value.marshal());
        }

        Err(output_error(err))
    }
}

impl From<f32> for Float32 {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<Float32> for f32 {
    fn from(value: Float32) -> Self {
        value.0
    }
}
