use async_graphql::ErrorExtensions;
use async_graphql::InputType;
use async_graphql::InputValueError;
use graph_scalars::ScalarError;
use graph_scalars::ScalarErrorKind;

/// Converts a decoding failure into an error reported for the scalar input.
pub(crate) fn input_error<T: InputType>(err: ScalarError) -> InputValueError<T> {
    InputValueError::custom(err)
}

/// Converts an encoding failure into a field error with a machine-readable code.
pub(crate) fn output_error(err: ScalarError) -> async_graphql::Error {
    let code = error_code(err.kind());

    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

fn error_code(kind: ScalarErrorKind) -> &'static str {
    match kind {
        ScalarErrorKind::TypeMismatch => "TYPE_MISMATCH",
        ScalarErrorKind::InvalidFormat => "INVALID_FORMAT",
        ScalarErrorKind::Range => "OUT_OF_RANGE",
        ScalarErrorKind::NonFinite => "NON_FINITE",
    }
}
