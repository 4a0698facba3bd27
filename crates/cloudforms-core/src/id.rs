//! Strongly-typed identifiers for Cloudforms resources.
//!
//! Resource ids are opaque tokens issued by the remote system; they
//! are never validated locally, only carried into request paths. The
//! wrappers exist to keep different collections' ids from being mixed
//! up at compile time. Responses have carried ids both as JSON strings
//! and as bare integers across API versions, so deserialization
//! accepts either.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate strongly-typed resource identifier wrappers.
macro_rules! id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct IdVisitor;

                impl<'de> Visitor<'de> for IdVisitor {
                    type Value = String;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("a string or integer identifier")
                    }

                    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
                        Ok(value.to_string())
                    }

                    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
                        Ok(value.to_string())
                    }

                    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
                        Ok(value.to_string())
                    }
                }

                deserializer.deserialize_any(IdVisitor).map($name)
            }
        }
    };
}

// Generate identifier types for the collections the client covers
id_type!(VmId, "Virtual server identifier");
id_type!(TaskId, "Task identifier");
