//! Process-wide registry of resource ID types used to restore canonical casing.
//!
//! API responses frequently return IDs with the literal segments re-cased
//! (`resourcegroups`, `microsoft.network`, ...). Every ID type registered here
//! is tried in turn; the first one whose segments match the input
//! case-insensitively is used to rewrite the literal segments while keeping
//! user-supplied values untouched.

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::parser::{ParseResult, Parser};
use crate::{ResourceId, Segment};

static REGISTRY: RwLock<Vec<Parser>> = RwLock::new(Vec::new());

/// Well-known keys fixed up when no registered type matches.
const COMMON_KEYS: &[&str] = &["subscriptions", "resourceGroups", "providers"];

/// A registered ID type that matched an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identified {
    pub description: &'static str,
    pub segments: &'static [Segment],
    pub result: ParseResult,
}

/// Registers `T`. Registering the same type twice is a no-op.
pub fn register<T: ResourceId>() {
    let parser = Parser::for_resource_id::<T>();
    let mut registry = REGISTRY.write();
    let exists = registry
        .iter()
        .any(|p| p.description() == parser.description() && p.segments() == parser.segments());
    if !exists {
        trace!(description = T::DESCRIPTION, "registering resource ID type");
        registry.push(parser);
    }
}

/// Returns the descriptions of all registered ID types in registration order.
pub fn registered() -> Vec<&'static str> {
    REGISTRY.read().iter().map(Parser::description).collect()
}

/// Finds the first registered ID type that matches `input` case-insensitively.
pub fn identify(input: &str) -> Option<Identified> {
    let registry = REGISTRY.read();
    let identified = registry.iter().find_map(|parser| {
        parser.try_match(input, true).ok().map(|result| Identified {
            description: parser.description(),
            segments: parser.segments(),
            result,
        })
    });
    if identified.is_none() {
        debug!(registered = registry.len(), "no registered resource ID type matched");
    }
    identified
}

/// Rewrites the literal segments of `input` to their canonical casing.
///
/// Inputs that match no registered type only have the well-known keys
/// re-cased; anything else is returned unchanged.
pub fn recase(input: &str) -> String {
    match identify(input) {
        Some(identified) => {
            trace!(description = identified.description, "re-casing resource ID");
            let mut out = String::with_capacity(input.len());
            if input.starts_with('/') {
                out.push('/');
            }
            let values: Vec<&str> = identified
                .segments
                .iter()
                .filter_map(|segment| identified.result.get(segment.name))
                .collect();
            out.push_str(&values.join("/"));
            out
        }
        None => recase_common_keys(input),
    }
}

/// Only components in a key position (even index, followed by a value) are
/// candidates, so values that happen to spell a key are left alone.
fn recase_common_keys(input: &str) -> String {
    let (prefix, path) = match input.strip_prefix('/') {
        Some(path) => ("/", path),
        None => ("", input),
    };
    let parts: Vec<&str> = path.split('/').collect();
    let recased: Vec<&str> = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i % 2 != 0 || i + 1 >= parts.len() {
                return *part;
            }
            COMMON_KEYS
                .iter()
                .find(|key| key.eq_ignore_ascii_case(part))
                .copied()
                .unwrap_or(*part)
        })
        .collect();
    format!("{prefix}{}", recased.join("/"))
}
