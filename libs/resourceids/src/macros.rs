//! Macros for wiring standard traits onto resource ID types.

/// Implements the string-facing traits for a [`ResourceId`](crate::ResourceId) type.
///
/// This generates:
/// - `Display`, writing the canonical path
/// - `FromStr`, parsing strictly
/// - `Serialize` and `Deserialize` as the canonical path string
///
/// # Example
///
/// ```ignore
/// impl ResourceId for WidgetId { /* ... */ }
/// impl_resource_id_traits!(WidgetId);
///
/// let id: WidgetId = "/subscriptions/s/providers/Microsoft.Widgets/widgets/w".parse()?;
/// ```
#[macro_export]
macro_rules! impl_resource_id_traits {
    ($name:ident) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::ResourceId::id(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ResourceIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::ResourceId>::parse(s)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(&$crate::ResourceId::id(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let s = <String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::ResourceId>::parse(&s).map_err($crate::serde::de::Error::custom)
            }
        }
    };
}
