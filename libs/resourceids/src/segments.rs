//! Segment definitions that describe the shape of a resource ID.

/// The role a segment plays in a resource ID path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A fixed path token such as `subscriptions` or `networkManagers`.
    Static,
    /// A fixed resource provider namespace such as `Microsoft.Network`.
    ResourceProvider,
    /// The subscription ID.
    SubscriptionId,
    /// The resource group name.
    ResourceGroup,
    /// A user-supplied resource name.
    UserSpecified,
}

impl SegmentKind {
    /// Returns true for kinds whose value is fixed by the ID type.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, SegmentKind::Static | SegmentKind::ResourceProvider)
    }
}

/// One literal or variable component of a resource ID path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Capture key used in a [`ParseResult`](crate::ParseResult).
    pub name: &'static str,

    pub kind: SegmentKind,

    /// Canonical text of a literal segment.
    pub fixed_value: Option<&'static str>,

    /// Value used when rendering an example ID.
    pub example_value: &'static str,
}

impl Segment {
    /// Creates a fixed path token such as `resourceGroups`.
    #[must_use]
    pub const fn static_segment(
        name: &'static str,
        fixed_value: &'static str,
        example_value: &'static str,
    ) -> Self {
        Self {
            name,
            kind: SegmentKind::Static,
            fixed_value: Some(fixed_value),
            example_value,
        }
    }

    /// Creates a fixed resource provider namespace such as `Microsoft.Network`.
    #[must_use]
    pub const fn resource_provider(
        name: &'static str,
        fixed_value: &'static str,
        example_value: &'static str,
    ) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceProvider,
            fixed_value: Some(fixed_value),
            example_value,
        }
    }

    /// Creates the subscription ID segment.
    #[must_use]
    pub const fn subscription_id(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::SubscriptionId,
            fixed_value: None,
            example_value,
        }
    }

    /// Creates the resource group name segment.
    #[must_use]
    pub const fn resource_group(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceGroup,
            fixed_value: None,
            example_value,
        }
    }

    /// Creates a user-supplied resource name segment.
    #[must_use]
    pub const fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::UserSpecified,
            fixed_value: None,
            example_value,
        }
    }

    /// Returns the fixed value for literal segments.
    #[must_use]
    pub fn literal(&self) -> Option<&'static str> {
        if self.kind.is_literal() {
            self.fixed_value
        } else {
            None
        }
    }
}

/// Renders an example ID from the example values of `segments`.
pub fn example_id(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(segment.literal().unwrap_or(segment.example_value));
    }
    out
}
