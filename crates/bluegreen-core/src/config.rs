//! Timing configuration.
//!
//! The choreography offsets are multiples of a single tick (the original
//! animation hardcoded one second). A config file can shrink the tick for
//! fast demos without changing the shape of the schedule.
//!
//! ```toml
//! [timings]
//! tick = "250ms"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Raw config file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    timings: Option<TimingsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TimingsSection {
    /// Base step duration, e.g. "1s" or "250ms".
    tick: Option<String>,
}

/// Resolved timing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimTimings {
    pub tick: Duration,
}

impl Default for SimTimings {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
        }
    }
}

impl SimTimings {
    /// Load timings from a toml file. Missing keys fall back to defaults;
    /// an unreadable or malformed file is an error.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SimError::ConfigRead(e.to_string()))?;
        Self::from_toml_str(&raw)
    }

    /// Parse timings from toml text.
    pub fn from_toml_str(raw: &str) -> SimResult<Self> {
        let file: ConfigFile =
            toml::from_str(raw).map_err(|e| SimError::ConfigParse(e.to_string()))?;

        let mut timings = Self::default();
        if let Some(section) = file.timings {
            if let Some(tick) = section.tick {
                timings.tick = parse_duration(&tick)?;
            }
        }
        Ok(timings)
    }
}

/// Parse a duration literal: `"500ms"` or `"2s"`.
fn parse_duration(s: &str) -> SimResult<Duration> {
    let s = s.trim();
    let invalid = || SimError::ConfigParse(format!("invalid duration {s:?}"));

    if let Some(ms) = s.strip_suffix("ms") {
        ms.parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| invalid())
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| invalid())
    } else {
        Err(invalid())
    }
}
