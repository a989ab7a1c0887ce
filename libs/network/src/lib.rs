//! # arm-network
//!
//! Typed resource IDs for `Microsoft.Network` resources.
//!
//! Each ID is a plain struct configured with its segment list and parsed by
//! [`arm_resourceids::Parser`]. Call [`register_resource_ids`] once at startup
//! so the re-casing registry knows about every type in this crate.

pub mod staticcidrs;

pub use arm_resourceids::{ResourceId, ResourceIdError};

/// Registers every resource ID type in this crate with the re-casing registry.
pub fn register_resource_ids() {
    staticcidrs::register();
}
