//! Resource IDs shared by every resource provider.

use crate::{impl_resource_id_traits, ParseResult, ResourceId, ResourceIdError, Segment};

/// The ID of a subscription.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId {
    pub subscription_id: String,
}

impl SubscriptionId {
    /// Creates an ID from its components. No validation is performed.
    #[must_use]
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }
}

impl ResourceId for SubscriptionId {
    const DESCRIPTION: &'static str = "Subscription";

    const SEGMENTS: &'static [Segment] = &[
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
    ];

    fn id(&self) -> String {
        format!("/subscriptions/{}", self.subscription_id)
    }

    fn describe(&self) -> String {
        format!("Subscription (Subscription: {:?})", self.subscription_id)
    }

    fn from_parse_result(input: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            subscription_id: input.require::<Self>("subscriptionId")?,
        })
    }
}

impl_resource_id_traits!(SubscriptionId);

/// The ID of a resource group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceGroupId {
    pub subscription_id: String,
    pub resource_group_name: String,
}

impl ResourceGroupId {
    /// Creates an ID from its components. No validation is performed.
    #[must_use]
    pub fn new(subscription_id: impl Into<String>, resource_group_name: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
        }
    }
}

impl ResourceId for ResourceGroupId {
    const DESCRIPTION: &'static str = "Resource Group";

    const SEGMENTS: &'static [Segment] = &[
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
    ];

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}",
            self.subscription_id, self.resource_group_name
        )
    }

    fn describe(&self) -> String {
        format!(
            "Resource Group (Subscription: {:?}\nResource Group Name: {:?})",
            self.subscription_id, self.resource_group_name
        )
    }

    fn from_parse_result(input: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            subscription_id: input.require::<Self>("subscriptionId")?,
            resource_group_name: input.require::<Self>("resourceGroupName")?,
        })
    }
}

impl_resource_id_traits!(ResourceGroupId);

/// Registers the common IDs with the re-casing registry.
pub fn register() {
    crate::recaser::register::<SubscriptionId>();
    crate::recaser::register::<ResourceGroupId>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_id_roundtrip() {
        let id = SubscriptionId::new("0000-1111");
        let parsed = SubscriptionId::parse(&id.id()).unwrap();
        assert_eq!(id, parsed);
        assert_eq!(parsed.to_string(), "/subscriptions/0000-1111");
    }

    #[test]
    fn test_resource_group_id_roundtrip() {
        let id = ResourceGroupId::new("sub", "my-rg");
        let parsed: ResourceGroupId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_resource_group_id_insensitive() {
        assert!(ResourceGroupId::parse("/subscriptions/s/resourcegroups/rg").is_err());
        let parsed = ResourceGroupId::parse_insensitively("/subscriptions/s/resourcegroups/rg").unwrap();
        assert_eq!(parsed.id(), "/subscriptions/s/resourceGroups/rg");
    }

    #[test]
    fn test_describe() {
        let id = ResourceGroupId::new("s", "rg");
        assert_eq!(
            id.describe(),
            "Resource Group (Subscription: \"s\"\nResource Group Name: \"rg\")"
        );
    }

    #[test]
    fn test_example_id() {
        assert_eq!(
            SubscriptionId::example_id(),
            "/subscriptions/12345678-1234-9876-4563-123456789012"
        );
    }
}
