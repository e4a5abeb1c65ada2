//! Serde helpers for subgraph payloads.
//!
//! The subgraph renders `BigInt` scalars as decimal strings. These helpers
//! accept either a string or a JSON number, and serialize back to a string.

use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn parse<E: de::Error>(value: StringOrNumber) -> Result<u64, E> {
    match value {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::String(s) => {
            s.parse().map_err(|_| E::custom(format!("invalid integer string: {s}")))
        }
    }
}

/// (De)serialize a `u64` as a decimal string.
pub mod quoted_u64 {
    use super::*;

    /// Serialize a `u64` as a decimal string.
    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    /// Deserialize a `u64` from a decimal string or a number.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        parse(StringOrNumber::deserialize(deserializer)?)
    }
}

/// (De)serialize an `Option<u64>` as an optional decimal string.
pub mod quoted_u64_opt {
    use super::*;

    /// Serialize an `Option<u64>` as an optional decimal string.
    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an `Option<u64>` from a decimal string, a number, or null.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<StringOrNumber>::deserialize(deserializer)?.map(parse).transpose()
    }
}
