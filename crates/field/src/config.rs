//! Fields described as data
//!
//! ```
//! use vcfield_field::FieldConfig;
//!
//! let field = FieldConfig::from_json(r#"{
//!     "placeholder": "Phone",
//!     "allowed": "digits",
//!     "max_length": 10,
//!     "mask": "(###) ### ## ##",
//!     "rules": [ { "kind": "phone_number", "message": "Check the number" } ]
//! }"#)
//! .unwrap()
//! .build()
//! .unwrap();
//!
//! assert_eq!(field.placeholder(), Some("Phone"));
//! assert!(field.admits("(532) 123"));
//! ```

use serde::{Deserialize, Serialize};
use vcfield_validator::config::{ChainConfig, ConfigError, RuleConfig};

use crate::controller::FieldController;
use crate::input::{CharacterClass, InputPolicy, Mask, MaskError};

/// Failure to build a field from configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FieldConfigError {
    #[error("invalid field configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Rules(#[from] ConfigError),

    #[error(transparent)]
    Mask(#[from] MaskError),
}

/// Everything needed to build a [`FieldController`]. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub placeholder: Option<String>,
    /// Maximum length in characters; unlimited when absent.
    pub max_length: Option<usize>,
    pub allowed: CharacterClass,
    /// Mask pattern, `#` marking digit slots.
    pub mask: Option<String>,
    pub rules: Vec<RuleConfig>,
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, FieldConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the controller. Rules are checked before the mask.
    pub fn build(self) -> Result<FieldController, FieldConfigError> {
        let rules = ChainConfig { rules: self.rules }.build()?;

        let mut policy = InputPolicy::new().allow(self.allowed);
        if let Some(max) = self.max_length {
            policy = policy.max_length(max);
        }

        let mut field = FieldController::new(rules).with_policy(policy);
        if let Some(pattern) = self.mask {
            field = field.with_mask(Mask::new(pattern)?);
        }
        if let Some(placeholder) = self.placeholder {
            field = field.with_placeholder(placeholder);
        }

        tracing::debug!(
            rules = field.rules().len(),
            masked = field.mask().is_some(),
            "field built from config"
        );
        Ok(field)
    }
}

impl FieldController {
    /// Builds a controller from configuration.
    pub fn from_config(config: FieldConfig) -> Result<Self, FieldConfigError> {
        config.build()
    }
}

impl TryFrom<FieldConfig> for FieldController {
    type Error = FieldConfigError;

    fn try_from(config: FieldConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use vcfield_validator::rule::{RuleKind, ValidationRule};

    #[test]
    fn test_empty_config() {
        let config = FieldConfig::from_json("{}").unwrap();
        assert_eq!(config, FieldConfig::default());

        let mut field = FieldController::from_config(config).unwrap();
        assert!(field.rules().is_empty());
        assert_eq!(field.policy(), &InputPolicy::new());
        assert_eq!(field.validate(false), Some(true));
    }

    #[test]
    fn test_custom_character_class() {
        let config: FieldConfig =
            serde_json::from_value(json!({ "allowed": { "custom": "ABC" } })).unwrap();
        assert_eq!(config.allowed, CharacterClass::Custom("ABC".to_owned()));
        let field = config.build().unwrap();
        assert!(field.admits("CAB"));
        assert!(!field.admits("abc"));
    }

    #[test]
    fn test_rules_are_built_in_order() {
        let field = FieldController::try_from(FieldConfig {
            rules: vec![
                RuleConfig::Required {
                    message: "a".to_owned(),
                },
                RuleConfig::PlateFormat {
                    message: "b".to_owned(),
                },
            ],
            ..FieldConfig::default()
        })
        .unwrap();

        let kinds: Vec<_> = field.rules().rules().iter().map(ValidationRule::kind).collect();
        assert_eq!(kinds, vec![RuleKind::Required, RuleKind::PlateFormat]);
    }

    #[test]
    fn test_bad_mask() {
        let err = FieldConfig {
            mask: Some("---".to_owned()),
            ..FieldConfig::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, FieldConfigError::Mask(MaskError::NoSlots(_))));
    }

    #[test]
    fn test_bad_rule() {
        let err = FieldConfig::from_json(
            r#"{ "rules": [ { "kind": "regex", "pattern": "[", "message": "m" } ] }"#,
        )
        .unwrap()
        .build()
        .unwrap_err();
        assert!(matches!(err, FieldConfigError::Rules(ConfigError::Rule { index: 0, .. })));
        assert!(err.to_string().starts_with("rule #0 (regex) is invalid"));
    }

    #[test]
    fn test_bad_json() {
        let err = FieldConfig::from_json(r#"{ "max_length": "ten" }"#).unwrap_err();
        assert!(matches!(err, FieldConfigError::Json(_)));
    }
}
