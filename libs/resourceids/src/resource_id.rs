//! The trait implemented by every typed resource ID.

use crate::parser::{ParseResult, Parser};
use crate::segments::{example_id, Segment};
use crate::validate::Validation;
use crate::ResourceIdError;

/// A resource ID type defined by an ordered segment list.
pub trait ResourceId: Sized {
    /// Human-readable name of the resource, e.g. `IPAM Pool`.
    const DESCRIPTION: &'static str;

    /// The ordered segments that make up this ID.
    const SEGMENTS: &'static [Segment];

    /// Returns the canonical path string.
    fn id(&self) -> String;

    /// Returns a human-readable description of this ID and its components.
    fn describe(&self) -> String;

    /// Builds the ID from the captures of a successful parse.
    fn from_parse_result(input: &ParseResult) -> Result<Self, ResourceIdError>;

    /// Parses `input`, requiring literal segments to match exactly.
    fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let parsed = Parser::for_resource_id::<Self>().parse(input, false)?;
        Self::from_parse_result(&parsed)
    }

    /// Parses `input`, matching literal segments case-insensitively.
    ///
    /// This should only be used for API response data, not user input.
    fn parse_insensitively(input: &str) -> Result<Self, ResourceIdError> {
        let parsed = Parser::for_resource_id::<Self>().parse(input, true)?;
        Self::from_parse_result(&parsed)
    }

    /// Checks that `input` is a string that parses as this ID type.
    fn validate(input: &serde_json::Value, key: &str) -> Validation {
        crate::validate::validate_resource_id::<Self>(input, key)
    }

    /// Returns an example ID built from the segments' example values.
    fn example_id() -> String {
        example_id(Self::SEGMENTS)
    }
}
