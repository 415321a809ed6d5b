use serde::Deserialize;

/// Controls the optional checks performed when scalars are resolved.
///
/// It is registered as schema data by the application; when it is missing,
/// the default configuration applies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScalarConfig {
    /// Allows [crate::Float32::finite] to return infinite and NaN values
    /// instead of failing the field.
    pub allow_non_finite_floats: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn use_defaults_for_missing_fields() {
        let config: ScalarConfig = serde_json::from_value(json!({})).unwrap();

        assert_eq!(config, ScalarConfig::default());
        assert!(!config.allow_non_finite_floats);
    }

    #[test]
    fn read_all_fields() {
        let config: ScalarConfig =
            serde_json::from_value(json!({ "allow_non_finite_floats": true })).unwrap();

        assert!(config.allow_non_finite_floats);
    }

    #[test]
    fn reject_unknown_fields() {
        let result = serde_json::from_value::<ScalarConfig>(json!({ "strict": true }));

        assert!(result.is_err());
    }
}
