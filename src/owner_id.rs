use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::de::Unexpected::Str;
use thiserror::Error;

/// Opaque identity of the party owning a note. The authentication
/// collaborator decides what goes in here; this service only requires
/// it to be non-blank.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OwnerId(String);

impl FromStr for OwnerId {
    type Err = OwnerIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(OwnerIdParseError);
        }
        Ok(OwnerId(trimmed.to_owned()))
    }
}

impl Deref for OwnerId {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
#[error("owner identifier is blank")]
pub struct OwnerIdParseError;

impl Serialize for OwnerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OwnerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = OwnerId;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                formatter.write_str("string containing a non-blank owner identifier")
            }

            fn visit_str<E>(self, v: &str) -> Result<OwnerId, E>
            where
                E: Error,
            {
                OwnerId::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
