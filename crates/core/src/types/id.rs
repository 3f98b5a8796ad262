//! Newtype IDs for type-safe entity references.
//!
//! The workshop API assigns opaque string document IDs. Use the `define_id!`
//! macro to create wrappers that prevent accidentally mixing IDs from
//! different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` as a plain string
/// - `Deserialize` from a non-empty string or an integer (hand-seeded
///   documents sometimes carry numeric IDs)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use workshop_core::define_id;
/// define_id!(TalkId);
/// define_id!(RoomId);
///
/// let talk = TalkId::new("abc123");
/// let room = RoomId::new("abc123");
///
/// // These are different types, so this won't compile:
/// // let _: TalkId = room;
/// assert_eq!(talk.as_str(), room.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Text(String),
                    Signed(i64),
                    Unsigned(u64),
                }

                match Raw::deserialize(deserializer)? {
                    Raw::Text(s) if s.trim().is_empty() => Err(<D::Error as ::serde::de::Error>::custom(
                        concat!(stringify!($name), " cannot be empty"),
                    )),
                    Raw::Text(s) => Ok(Self(s)),
                    Raw::Signed(n) => Ok(Self(n.to_string())),
                    Raw::Unsigned(n) => Ok(Self(n.to_string())),
                }
            }
        }

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(AttendeeId);
define_id!(SpeakerId);
define_id!(SessionId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_id() {
        let id = SpeakerId::new("s1");
        assert_eq!(id.to_string(), "s1");
    }

    #[test]
    fn test_serde_transparent() {
        let id = SessionId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");

        let parsed: SessionId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_numeric_id_accepted() {
        let parsed: SessionId = serde_json::from_str("1").unwrap();
        assert_eq!(parsed.as_str(), "1");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(serde_json::from_str::<SpeakerId>("\"\"").is_err());
        assert!(serde_json::from_str::<SpeakerId>("null").is_err());
    }
}
