use std::{fmt, str::FromStr};

/// An unquoted CQL identifier, used for keyspace and table names.
///
/// These names end up inside DDL statements, which cannot take bound parameters, so
/// anything outside `[A-Za-z][A-Za-z0-9_]*` is rejected rather than quoted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SchemaName(String);

impl SchemaName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid CQL identifier {0:?}, expected a letter followed by at most 47 letters, digits or underscores")]
pub struct InvalidSchemaName(String);

impl FromStr for SchemaName {
    type Err = InvalidSchemaName;

    fn from_str(s: &str) -> Result<SchemaName, InvalidSchemaName> {
        lazy_static::lazy_static! {
            static ref RE: regex::Regex = regex::Regex::new(
                r"^[A-Za-z][A-Za-z0-9_]{0,47}$"
            ).unwrap();
        }

        if RE.is_match(s) {
            // Unquoted identifiers are case insensitive, system_schema stores them folded.
            Ok(SchemaName(s.to_ascii_lowercase()))
        } else {
            Err(InvalidSchemaName(s.to_owned()))
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SchemaName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
