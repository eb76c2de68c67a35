//! Macros for defining typed resource IDs.

/// Macro to define a typed ID for a routed resource.
///
/// This generates a newtype wrapper around the numeric primary key with:
/// - A `KIND` constant naming the resource
/// - `parse()` to decode a token (or bare decimal key)
/// - `encode()` and `path()` using the standard codec
/// - `Display` (the token) and `FromStr` implementations
/// - `Serialize` and `Deserialize` as the token string
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_token!(CourseId, ResourceKind::Course);
///
/// let id = CourseId::new(5);
/// assert_eq!(id.to_string(), "CR0RX");
/// let parsed: CourseId = "CR0RX".parse()?;
/// ```
#[macro_export]
macro_rules! define_token {
    ($name:ident, $kind:expr) => {
        /// A typed ID for this resource type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// The resource this ID addresses.
            pub const KIND: $crate::ResourceKind = $kind;

            /// Wraps a raw primary key.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw primary key.
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Parses an ID from its token.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::decode(s).map(Self)
            }

            /// Returns the opaque token.
            #[must_use]
            pub fn encode(&self) -> String {
                $crate::encode(self.0)
            }

            /// Returns the router path for this resource.
            #[must_use]
            pub fn path(&self) -> String {
                $crate::resource_path(Self::KIND, self.0)
            }

            /// Parses an ID from a path, checking the resource prefix.
            pub fn from_path(path: &str) -> Result<Self, $crate::IdError> {
                let (kind, id) = $crate::resolve_path(path)?;
                if kind != Self::KIND {
                    return Err($crate::IdError::UnknownResource {
                        path: path.to_string(),
                    });
                }
                Ok(Self(id))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.encode())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.encode())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
