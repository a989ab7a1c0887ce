use arm_resourceids::{impl_resource_id_traits, ParseResult, ResourceId, ResourceIdError, Segment};

/// The Resource ID of an IPAM Pool within a Network Manager.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpamPoolId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub network_manager_name: String,
    pub ipam_pool_name: String,
}

impl IpamPoolId {
    /// Creates an ID from its components. No validation is performed.
    #[must_use]
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        network_manager_name: impl Into<String>,
        ipam_pool_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            network_manager_name: network_manager_name.into(),
            ipam_pool_name: ipam_pool_name.into(),
        }
    }
}

impl ResourceId for IpamPoolId {
    const DESCRIPTION: &'static str = "IPAM Pool";

    const SEGMENTS: &'static [Segment] = &[
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
        Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName", "example-resource-group"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network", "Microsoft.Network"),
        Segment::static_segment("staticNetworkManagers", "networkManagers", "networkManagers"),
        Segment::user_specified("networkManagerName", "networkManagerName"),
        Segment::static_segment("staticIpamPools", "ipamPools", "ipamPools"),
        Segment::user_specified("ipamPoolName", "ipamPoolName"),
    ];

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/networkManagers/{}/ipamPools/{}",
            self.subscription_id, self.resource_group_name, self.network_manager_name, self.ipam_pool_name
        )
    }

    fn describe(&self) -> String {
        let components = [
            format!("Subscription: {:?}", self.subscription_id),
            format!("Resource Group Name: {:?}", self.resource_group_name),
            format!("Network Manager Name: {:?}", self.network_manager_name),
            format!("Ipam Pool Name: {:?}", self.ipam_pool_name),
        ];
        format!("{} ({})", Self::DESCRIPTION, components.join("\n"))
    }

    fn from_parse_result(input: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            subscription_id: input.require::<Self>("subscriptionId")?,
            resource_group_name: input.require::<Self>("resourceGroupName")?,
            network_manager_name: input.require::<Self>("networkManagerName")?,
            ipam_pool_name: input.require::<Self>("ipamPoolName")?,
        })
    }
}

impl_resource_id_traits!(IpamPoolId);
