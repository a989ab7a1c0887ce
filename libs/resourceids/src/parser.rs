//! Generic segment-matching parser.
//!
//! A [`Parser`] is configured with the ordered segment list of one ID type and
//! matches an input path against it, producing a [`ParseResult`] keyed by
//! segment name.

use std::collections::BTreeMap;

use tracing::debug;

use crate::segments::{example_id, Segment};
use crate::{ResourceId, ResourceIdError};

/// The named values captured from a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Segment name to matched value. Literal segments hold their canonical text.
    pub parsed: BTreeMap<String, String>,

    /// The input exactly as given.
    pub raw_input: String,
}

impl ParseResult {
    /// Returns the value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parsed.get(name).map(String::as_str)
    }

    /// Returns the value captured for `name` or a missing-segment error for `T`.
    pub fn require<T: ResourceId>(&self, name: &'static str) -> Result<String, ResourceIdError> {
        self.get(name)
            .map(str::to_owned)
            .ok_or_else(|| ResourceIdError::SegmentNotSpecified {
                description: T::DESCRIPTION,
                input: self.raw_input.clone(),
                name,
                example: example_id(T::SEGMENTS),
            })
    }
}

/// Matches input paths against an ordered segment list.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    description: &'static str,
    segments: &'static [Segment],
}

impl Parser {
    /// Creates a parser for `segments`, naming errors after `description`.
    #[must_use]
    pub const fn new(description: &'static str, segments: &'static [Segment]) -> Self {
        Self {
            description,
            segments,
        }
    }

    /// Creates a parser for the segment list of `T`.
    #[must_use]
    pub const fn for_resource_id<T: ResourceId>() -> Self {
        Self::new(T::DESCRIPTION, T::SEGMENTS)
    }

    /// Returns the human-readable name of the ID type.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the ordered segments this parser matches.
    #[must_use]
    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Parses `input`.
    ///
    /// With `insensitively` set, literal segments are compared ignoring ASCII
    /// case. Variable segments are always captured verbatim.
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ResourceIdError> {
        let result = self.try_match(input, insensitively);
        if let Err(err) = &result {
            debug!(
                description = self.description,
                insensitively,
                error = %err,
                "resource ID did not match"
            );
        }
        result
    }

    /// Same as [`parse`](Self::parse) without logging failures.
    pub(crate) fn try_match(&self, input: &str, insensitively: bool) -> Result<ParseResult, ResourceIdError> {
        if input.is_empty() {
            return Err(ResourceIdError::Empty {
                description: self.description,
            });
        }

        let path = input.strip_prefix('/').unwrap_or(input);
        let components: Vec<&str> = path.split('/').collect();
        if components.len() != self.segments.len() {
            return Err(ResourceIdError::SegmentCount {
                description: self.description,
                input: input.to_string(),
                expected: self.segments.len(),
                actual: components.len(),
                example: example_id(self.segments),
            });
        }

        let mut parsed = BTreeMap::new();
        for (position, (segment, raw)) in self.segments.iter().zip(components).enumerate() {
            let value = match segment.literal() {
                Some(expected) => {
                    let matched = if insensitively {
                        raw.eq_ignore_ascii_case(expected)
                    } else {
                        raw == expected
                    };
                    if !matched {
                        return Err(ResourceIdError::UnexpectedSegment {
                            description: self.description,
                            input: input.to_string(),
                            position,
                            name: segment.name,
                            expected,
                            actual: raw.to_string(),
                            example: example_id(self.segments),
                        });
                    }
                    expected.to_string()
                }
                None => {
                    if raw.is_empty() {
                        return Err(ResourceIdError::EmptySegment {
                            description: self.description,
                            input: input.to_string(),
                            name: segment.name,
                        });
                    }
                    raw.to_string()
                }
            };
            parsed.insert(segment.name.to_string(), value);
        }

        Ok(ParseResult {
            parsed,
            raw_input: input.to_string(),
        })
    }
}
