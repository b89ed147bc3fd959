//! Terminal rendering of the simulator surface.
//!
//! Status narrations print as they arrive; the environment panels carry
//! pre-formatted values and are drawn as a frame on demand, after an
//! operation settles.

use bluegreen_core::{Environment, Version};
use bluegreen_engine::{Role, Surface};

const BAR_CELLS: u8 = 10;

#[derive(Debug, Clone)]
struct Panel {
    version: Version,
    traffic: u8,
    role: Role,
    switching: bool,
}

impl Panel {
    fn new(role: Role) -> Self {
        Self {
            version: Version::INITIAL,
            traffic: 0,
            role,
            switching: false,
        }
    }

    fn line(&self, env: Environment) -> String {
        let decoration = if self.switching { "  ⇆ switching" } else { "" };
        format!(
            "  {:<5}  Version {:<5}  {:<21}  [{}]{}",
            env.label(),
            self.version.to_string(),
            self.role.badge_text(),
            traffic_bar(self.traffic),
            decoration,
        )
    }
}

/// Renders surface updates to stdout.
pub struct TerminalSurface {
    blue: Panel,
    green: Panel,
    switch_enabled: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            blue: Panel::new(Role::Active),
            green: Panel::new(Role::Standby),
            switch_enabled: true,
        }
    }

    fn panel_mut(&mut self, env: Environment) -> &mut Panel {
        match env {
            Environment::Blue => &mut self.blue,
            Environment::Green => &mut self.green,
        }
    }

    /// Draw the two environment panels.
    pub fn draw(&self) {
        println!();
        println!("{}", self.blue.line(Environment::Blue));
        println!("{}", self.green.line(Environment::Green));
        if !self.switch_enabled {
            println!("  (switch control disabled)");
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn status(&mut self, message: &str) {
        println!("  {message}");
    }

    fn version_label(&mut self, env: Environment, version: Version) {
        self.panel_mut(env).version = version;
    }

    fn traffic(&mut self, env: Environment, percent: u8) {
        self.panel_mut(env).traffic = percent;
    }

    fn badge(&mut self, env: Environment, role: Role) {
        self.panel_mut(env).role = role;
    }

    fn switching(&mut self, env: Environment, on: bool) {
        self.panel_mut(env).switching = on;
    }

    fn switch_enabled(&mut self, enabled: bool) {
        self.switch_enabled = enabled;
    }
}

fn traffic_bar(percent: u8) -> String {
    let filled = (u16::from(percent) * u16::from(BAR_CELLS) / 100) as u8;
    let mut bar = String::new();
    for cell in 0..BAR_CELLS {
        bar.push(if cell < filled { '█' } else { '░' });
    }
    bar
}
