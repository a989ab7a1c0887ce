//! Error types for resource ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating resource IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// The input string is empty.
    #[error("cannot parse an empty string as a {description} ID")]
    Empty { description: &'static str },

    /// The input has a different number of path segments than the ID type.
    #[error(
        "parsing {input:?} as a {description} ID: expected {expected} segments but got {actual} \
         (an example {description} ID is {example:?})"
    )]
    SegmentCount {
        description: &'static str,
        input: String,
        expected: usize,
        actual: usize,
        example: String,
    },

    /// A literal path segment did not match.
    #[error(
        "parsing {input:?} as a {description} ID: segment {position} ({name}) should be \
         {expected:?} but got {actual:?} (an example {description} ID is {example:?})"
    )]
    UnexpectedSegment {
        description: &'static str,
        input: String,
        position: usize,
        name: &'static str,
        expected: &'static str,
        actual: String,
        example: String,
    },

    /// A variable path segment was present but empty.
    #[error("parsing {input:?} as a {description} ID: the segment {name} was empty")]
    EmptySegment {
        description: &'static str,
        input: String,
        name: &'static str,
    },

    /// A named segment was missing from an otherwise successful parse.
    #[error(
        "the segment {name} was not specified in {input:?} for the {description} ID \
         (an example {description} ID is {example:?})"
    )]
    SegmentNotSpecified {
        description: &'static str,
        input: String,
        name: &'static str,
        example: String,
    },

    /// A value handed to a validator was not a string.
    #[error("expected {key:?} to be a string")]
    NotAString { key: String },
}

impl ResourceIdError {
    /// Returns true if the input did not have the shape of the ID type.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ResourceIdError::Empty { .. }
                | ResourceIdError::SegmentCount { .. }
                | ResourceIdError::UnexpectedSegment { .. }
                | ResourceIdError::EmptySegment { .. }
        )
    }

    /// Returns true if a named capture was absent from a parse result.
    pub fn is_missing_segment(&self) -> bool {
        matches!(self, ResourceIdError::SegmentNotSpecified { .. })
    }
}
