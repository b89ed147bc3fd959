//! Cluster state — the single mutable state block of the simulator.
//!
//! Replaces the module-level globals of the original animation with an
//! explicit struct owned by the animator. Traffic shares are derived from
//! the active environment rather than stored, so they cannot drift out of
//! the 100/0 invariant.

use serde::Serialize;

use crate::types::{Environment, Version};

/// Simulator state: which environment is active, each environment's
/// version, and whether a standby build is awaiting a traffic switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterState {
    pub active: Environment,
    blue: Version,
    green: Version,
    /// A standby build finished and is eligible for a traffic switch.
    /// Process-wide, not per-environment; cleared by the switch.
    pub deployed: bool,
}

impl Default for ClusterState {
    fn default() -> Self {
        Self {
            active: Environment::Blue,
            blue: Version::INITIAL,
            green: Version::INITIAL,
            deployed: false,
        }
    }
}

impl ClusterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The inactive environment, target of the next deploy.
    pub fn standby(&self) -> Environment {
        self.active.other()
    }

    pub fn version(&self, env: Environment) -> Version {
        match env {
            Environment::Blue => self.blue,
            Environment::Green => self.green,
        }
    }

    pub fn set_version(&mut self, env: Environment, version: Version) {
        match env {
            Environment::Blue => self.blue = version,
            Environment::Green => self.green = version,
        }
    }

    /// Traffic share in percent. The active environment carries all of it.
    pub fn traffic(&self, env: Environment) -> u8 {
        if env == self.active { 100 } else { 0 }
    }

    /// Flip the active environment. Returns the new active environment.
    pub fn flip_active(&mut self) -> Environment {
        self.active = self.active.other();
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_load_defaults() {
        let state = ClusterState::new();
        assert_eq!(state.active, Environment::Blue);
        assert_eq!(state.version(Environment::Blue), Version::INITIAL);
        assert_eq!(state.version(Environment::Green), Version::INITIAL);
        assert!(!state.deployed);
    }

    #[test]
    fn traffic_shares_always_sum_to_100() {
        let mut state = ClusterState::new();
        for _ in 0..5 {
            let total: u32 = Environment::ALL
                .iter()
                .map(|&env| state.traffic(env) as u32)
                .sum();
            assert_eq!(total, 100);
            state.flip_active();
        }
    }

    #[test]
    fn flip_active_swaps_roles() {
        let mut state = ClusterState::new();
        assert_eq!(state.flip_active(), Environment::Green);
        assert_eq!(state.standby(), Environment::Blue);
        assert_eq!(state.traffic(Environment::Green), 100);
        assert_eq!(state.traffic(Environment::Blue), 0);
    }

    #[test]
    fn set_version_touches_only_the_given_env() {
        let mut state = ClusterState::new();
        state.set_version(Environment::Green, Version::INITIAL.bump());
        assert_eq!(state.version(Environment::Green).to_string(), "1.1");
        assert_eq!(state.version(Environment::Blue), Version::INITIAL);
    }

    #[test]
    fn serializes_for_status_output() {
        let state = ClusterState::new();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["active"], "blue");
        assert_eq!(json["blue"], "1.0");
        assert_eq!(json["deployed"], false);
    }
}
