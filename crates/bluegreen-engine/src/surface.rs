//! Display seam between the animator and its host.
//!
//! The engine never draws anything itself; it pushes narrow updates
//! through this trait. The CLI renders them to a terminal, tests record
//! them, headless callers discard them.

use bluegreen_core::{Environment, Version};

/// Role badge shown for an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Active,
    Standby,
}

impl Role {
    /// Badge text, e.g. "ACTIVE - 100% Traffic".
    pub fn badge_text(self) -> &'static str {
        match self {
            Role::Active => "ACTIVE - 100% Traffic",
            Role::Standby => "STANDBY - 0% Traffic",
        }
    }
}

/// The output surface of the simulator.
pub trait Surface {
    /// Overwrite the status message region.
    fn status(&mut self, message: &str);

    /// Update an environment's version label.
    fn version_label(&mut self, env: Environment, version: Version);

    /// Update an environment's traffic share (percent).
    fn traffic(&mut self, env: Environment, percent: u8);

    /// Update an environment's role badge.
    fn badge(&mut self, env: Environment, role: Role);

    /// Toggle an environment's transient "switching" decoration.
    fn switching(&mut self, env: Environment, on: bool);

    /// Enable or disable the switch-traffic control.
    fn switch_enabled(&mut self, enabled: bool);
}

/// Discards all updates. For headless runs.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn status(&mut self, _message: &str) {}
    fn version_label(&mut self, _env: Environment, _version: Version) {}
    fn traffic(&mut self, _env: Environment, _percent: u8) {}
    fn badge(&mut self, _env: Environment, _role: Role) {}
    fn switching(&mut self, _env: Environment, _on: bool) {}
    fn switch_enabled(&mut self, _enabled: bool) {}
}

/// A recorded surface update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Status(String),
    VersionLabel(Environment, Version),
    Traffic(Environment, u8),
    Badge(Environment, Role),
    Switching(Environment, bool),
    SwitchEnabled(bool),
}

/// Records every update in order. Test double.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All status messages, in emission order.
    pub fn statuses(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Status(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses().last().copied()
    }
}

impl Surface for RecordingSurface {
    fn status(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Status(message.to_string()));
    }

    fn version_label(&mut self, env: Environment, version: Version) {
        self.events.push(SurfaceEvent::VersionLabel(env, version));
    }

    fn traffic(&mut self, env: Environment, percent: u8) {
        self.events.push(SurfaceEvent::Traffic(env, percent));
    }

    fn badge(&mut self, env: Environment, role: Role) {
        self.events.push(SurfaceEvent::Badge(env, role));
    }

    fn switching(&mut self, env: Environment, on: bool) {
        self.events.push(SurfaceEvent::Switching(env, on));
    }

    fn switch_enabled(&mut self, enabled: bool) {
        self.events.push(SurfaceEvent::SwitchEnabled(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_order() {
        let mut surface = RecordingSurface::new();
        surface.status("one");
        surface.switch_enabled(false);
        surface.status("two");

        assert_eq!(surface.statuses(), vec!["one", "two"]);
        assert_eq!(surface.last_status(), Some("two"));
        assert_eq!(surface.events[1], SurfaceEvent::SwitchEnabled(false));
    }

    #[test]
    fn badge_text_matches_roles() {
        assert_eq!(Role::Active.badge_text(), "ACTIVE - 100% Traffic");
        assert_eq!(Role::Standby.badge_text(), "STANDBY - 0% Traffic");
    }
}
