//! # arm-resourceids
//!
//! Typed resource IDs for Azure Resource Manager paths.
//!
//! ## Design Principles
//!
//! - Each ID type is a plain struct plus an ordered segment list
//! - Parsing is done by one generic segment-matching [`Parser`]
//! - IDs support roundtrip serialization (format → parse → format)
//! - Case-insensitive parsing canonicalizes literal segments
//!
//! ## ID Format
//!
//! IDs are `/`-separated paths interleaving literal tokens with values:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}
//! ```
//!
//! ID types are registered with the [`recaser`] so that IDs returned by the
//! API with non-canonical casing can be rewritten.

pub mod commonids;
mod error;
mod macros;
mod parser;
pub mod recaser;
mod resource_id;
mod segments;
mod validate;

pub use error::ResourceIdError;
pub use parser::{ParseResult, Parser};
pub use resource_id::ResourceId;
pub use segments::{example_id, Segment, SegmentKind};
pub use validate::{validate_resource_id, Validation};

#[doc(hidden)]
pub use serde;
