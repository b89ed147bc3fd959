//! Environment and version types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// One of the two deployment environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Blue,
    Green,
}

impl Environment {
    /// Both environments, in display order.
    pub const ALL: [Environment; 2] = [Environment::Blue, Environment::Green];

    /// The peer environment.
    pub fn other(self) -> Self {
        match self {
            Environment::Blue => Environment::Green,
            Environment::Green => Environment::Blue,
        }
    }

    /// Uppercase label used in narration ("BLUE", "GREEN").
    pub fn label(self) -> &'static str {
        match self {
            Environment::Blue => "BLUE",
            Environment::Green => "GREEN",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Blue => write!(f, "blue"),
            Environment::Green => write!(f, "green"),
        }
    }
}

/// A simulated version number with one-decimal precision.
///
/// Stored as integer tenths so repeated `+0.1` bumps stay exact; displays
/// as `1.0`, `1.1`, ... Serializes as the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u32);

impl Version {
    /// Starting version for both environments.
    pub const INITIAL: Version = Version(10);

    /// Value in tenths (version 1.1 is 11).
    pub fn tenths(self) -> u32 {
        self.0
    }

    /// The next version: this one plus one tenth.
    pub fn bump(self) -> Version {
        Version(self.0 + 1)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl FromStr for Version {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SimError::VersionParse(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        let major: u32 = major.parse().map_err(|_| invalid())?;
        if minor.len() != 1 {
            return Err(invalid());
        }
        let minor: u32 = minor.parse().map_err(|_| invalid())?;
        Ok(Version(major * 10 + minor))
    }
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips_between_environments() {
        assert_eq!(Environment::Blue.other(), Environment::Green);
        assert_eq!(Environment::Green.other(), Environment::Blue);
        assert_eq!(Environment::Blue.other().other(), Environment::Blue);
    }

    #[test]
    fn version_bump_is_exact_tenths() {
        let mut v = Version::INITIAL;
        for _ in 0..10 {
            v = v.bump();
        }
        // Ten bumps of 0.1 land exactly on 2.0, no float drift.
        assert_eq!(v.to_string(), "2.0");
    }

    #[test]
    fn version_displays_one_decimal() {
        assert_eq!(Version::INITIAL.to_string(), "1.0");
        assert_eq!(Version::INITIAL.bump().to_string(), "1.1");
    }

    #[test]
    fn version_parses_display_form() {
        let v: Version = "1.3".parse().unwrap();
        assert_eq!(v.tenths(), 13);
        assert!("1".parse::<Version>().is_err());
        assert!("1.25".parse::<Version>().is_err());
        assert!("x.y".parse::<Version>().is_err());
    }

    #[test]
    fn version_serializes_as_string() {
        let json = serde_json::to_string(&Version::INITIAL.bump()).unwrap();
        assert_eq!(json, "\"1.1\"");
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Version::INITIAL.bump());
    }

    #[test]
    fn environment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Environment::Green).unwrap(),
            "\"green\""
        );
    }
}
