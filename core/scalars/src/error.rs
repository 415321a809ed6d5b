use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScalarError {
    #[error("{scalar} must be {expected}, found {found}")]
    TypeMismatch {
        scalar: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid {scalar} '{value}': {reason}")]
    InvalidFormat {
        scalar: &'static str,
        value: String,
        reason: String,
    },

    #[error("{scalar} value {value} is out of range")]
    Range { scalar: &'static str, value: String },

    #[error("{scalar} value {value} is not finite")]
    NonFinite { scalar: &'static str, value: String },
}

/// The variant of a [ScalarError] without its details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarErrorKind {
    TypeMismatch,
    InvalidFormat,
    Range,
    NonFinite,
}

impl ScalarError {
    pub fn kind(&self) -> ScalarErrorKind {
        match self {
            Self::TypeMismatch { .. } => ScalarErrorKind::TypeMismatch,
            Self::InvalidFormat { .. } => ScalarErrorKind::InvalidFormat,
            Self::Range { .. } => ScalarErrorKind::Range,
            Self::NonFinite { .. } => ScalarErrorKind::NonFinite,
        }
    }

    /// Returns the name of the scalar that failed to convert.
    pub fn scalar(&self) -> &'static str {
        match self {
            Self::TypeMismatch { scalar, .. }
            | Self::InvalidFormat { scalar, .. }
            | Self::Range { scalar, .. }
            | Self::NonFinite { scalar, .. } => *scalar,
        }
    }

    pub(crate) fn invalid_format(
        scalar: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidFormat {
            scalar,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
