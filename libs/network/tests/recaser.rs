//! Re-casing of IPAM Pool IDs through the process-wide registry.

use arm_network::staticcidrs::IpamPoolId;
use arm_network::ResourceId;
use arm_resourceids::{commonids, recaser};

fn setup() {
    commonids::register();
    arm_network::register_resource_ids();
}

#[test]
fn registry_lists_ipam_pool() {
    setup();
    let names = recaser::registered();
    assert!(names.contains(&"IPAM Pool"));
    assert!(names.contains(&"Resource Group"));
}

#[test]
fn recase_restores_literal_casing() {
    setup();
    let input = "/subscriptions/Sub/resourcegroups/My-Rg/providers/microsoft.network/networkmanagers/NM/ipampools/Pool-A";
    let recased = recaser::recase(input);
    assert_eq!(
        recased,
        "/subscriptions/Sub/resourceGroups/My-Rg/providers/Microsoft.Network/networkManagers/NM/ipamPools/Pool-A"
    );
    let id = IpamPoolId::parse(&recased).unwrap();
    assert_eq!(id, IpamPoolId::new("Sub", "My-Rg", "NM", "Pool-A"));
}

#[test]
fn recase_is_stable_on_canonical_input() {
    setup();
    let id = IpamPoolId::new("s", "rg", "nm", "p");
    assert_eq!(recaser::recase(&id.id()), id.id());
}

#[test]
fn identify_picks_matching_type() {
    setup();
    let identified = recaser::identify(
        "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/networkManagers/nm/ipamPools/p",
    )
    .unwrap();
    assert_eq!(identified.description, IpamPoolId::DESCRIPTION);
    assert_eq!(identified.result.get("ipamPoolName"), Some("p"));

    let identified = recaser::identify("/subscriptions/s/resourceGroups/rg").unwrap();
    assert_eq!(identified.description, "Resource Group");
}

#[test]
fn identify_unknown_returns_none() {
    setup();
    assert!(recaser::identify("/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/vnet").is_none());
}
