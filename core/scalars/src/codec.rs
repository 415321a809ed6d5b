use crate::Input;
use crate::ScalarError;

/// Describes a native value that has a wire representation as a custom GraphQL scalar.
///
/// Both conversions are pure: they don't depend on any state and can be called
/// concurrently from any number of threads.
pub trait ScalarCodec: Sized {
    /// The name of the scalar in the schema.
    const NAME: &'static str;

    /// Converts the native value into its wire text.
    fn marshal(&self) -> String;

    /// Converts a wire input into the native value.
    fn unmarshal(input: Input) -> Result<Self, ScalarError>;
}
