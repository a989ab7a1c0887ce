//! Resource IDs for IPAM static CIDR resources.

mod id_ipampool;

pub use id_ipampool::IpamPoolId;

/// Registers the IDs in this module with the re-casing registry.
pub fn register() {
    arm_resourceids::recaser::register::<IpamPoolId>();
}
