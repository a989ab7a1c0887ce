//! Validation of loosely-typed input as resource IDs.
//!
//! Schema and form layers hand values around as JSON; these helpers report
//! whether such a value is a well-formed ID string.

use crate::{ResourceId, ResourceIdError};

/// Outcome of validating one input value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<ResourceIdError>,
}

impl Validation {
    /// Returns true when no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks that `input` is a string that strictly parses as `T`.
pub fn validate_resource_id<T: ResourceId>(input: &serde_json::Value, key: &str) -> Validation {
    let mut validation = Validation::default();

    let Some(value) = input.as_str() else {
        validation.errors.push(ResourceIdError::NotAString {
            key: key.to_string(),
        });
        return validation;
    };

    if let Err(err) = T::parse(value) {
        validation.errors.push(err);
    }

    validation
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::commonids::ResourceGroupId;

    #[test]
    fn test_valid_string() {
        let validation =
            validate_resource_id::<ResourceGroupId>(&json!("/subscriptions/s/resourceGroups/rg"), "id");
        assert!(validation.is_valid());
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn test_not_a_string() {
        let validation = validate_resource_id::<ResourceGroupId>(&json!(42), "resource_group_id");
        assert_eq!(
            validation.errors,
            vec![ResourceIdError::NotAString {
                key: "resource_group_id".to_string()
            }]
        );
        assert_eq!(
            validation.errors[0].to_string(),
            "expected \"resource_group_id\" to be a string"
        );
    }

    #[test]
    fn test_unparseable_string() {
        let validation = validate_resource_id::<ResourceGroupId>(&json!("/subscriptions/s"), "id");
        assert_eq!(validation.errors.len(), 1);
        assert!(validation.errors[0].is_malformed());
    }
}
