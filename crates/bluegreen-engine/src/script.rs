//! Timed-step scripts for the two operations.
//!
//! A script is a list of steps ordered by offset from the trigger. The
//! builders are pure: they read the current state to compute targets and
//! narration but mutate nothing, so a script can be inspected or asserted
//! on before anything runs.

use std::time::Duration;

use bluegreen_core::{ClusterState, Environment, SimTimings, Version};

/// A single step in a choreographed sequence.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimedStep {
    /// Offset from the start of the operation.
    pub offset: Duration,
    pub action: Action,
}

/// What a step does when it fires. Applied by the animator in order;
/// steps may share an offset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Overwrite the status message.
    Narrate(String),
    /// Record a version for an environment and update its label.
    SetVersion {
        env: Environment,
        version: Version,
    },
    /// Set or clear the deployed flag.
    SetDeployed(bool),
    /// Toggle the transient "switching" decoration on both environments.
    SetSwitching(bool),
    /// Flip the active environment and republish traffic shares and badges.
    FlipActive,
    /// Enable or disable the switch-traffic control.
    SetSwitchEnabled(bool),
}

/// Build the deploy sequence for the current standby environment.
///
/// Phases narrate at 0..=3 ticks; the commit lands at 4 ticks.
pub fn deploy_script(state: &ClusterState, timings: &SimTimings) -> Vec<TimedStep> {
    let standby = state.standby();
    let next = state.version(standby).bump();
    let tick = timings.tick;

    vec![
        TimedStep {
            offset: Duration::ZERO,
            action: Action::Narrate(format!(
                "🔄 Deploying version {next} to {} environment...",
                standby.label()
            )),
        },
        TimedStep {
            offset: tick,
            action: Action::Narrate(format!("📦 Building Docker image for version {next}...")),
        },
        TimedStep {
            offset: 2 * tick,
            action: Action::Narrate(format!(
                "☸️ Updating Kubernetes pods in {} environment...",
                standby.label()
            )),
        },
        TimedStep {
            offset: 3 * tick,
            action: Action::Narrate(format!(
                "🔍 Running health checks on {} environment...",
                standby.label()
            )),
        },
        TimedStep {
            offset: 4 * tick,
            action: Action::SetVersion {
                env: standby,
                version: next,
            },
        },
        TimedStep {
            offset: 4 * tick,
            action: Action::SetDeployed(true),
        },
        TimedStep {
            offset: 4 * tick,
            action: Action::Narrate(format!(
                "✅ Version {next} successfully deployed to {}! Ready to switch traffic.",
                standby.label()
            )),
        },
    ]
}

/// Build the traffic-switch sequence.
///
/// The control is disabled and both environments marked "switching" at
/// the trigger; traffic flips at 1 tick; cleanup at 2 ticks. The caller
/// checks the deployed precondition.
pub fn switch_script(state: &ClusterState, timings: &SimTimings) -> Vec<TimedStep> {
    let target = state.standby();
    let tick = timings.tick;

    vec![
        TimedStep {
            offset: Duration::ZERO,
            action: Action::SetSwitchEnabled(false),
        },
        TimedStep {
            offset: Duration::ZERO,
            action: Action::SetSwitching(true),
        },
        TimedStep {
            offset: Duration::ZERO,
            action: Action::Narrate("🔄 Initiating traffic switch...".to_string()),
        },
        TimedStep {
            offset: tick / 2,
            action: Action::Narrate("⚡ Updating load balancer configuration...".to_string()),
        },
        TimedStep {
            offset: tick,
            action: Action::Narrate("🔀 Routing traffic to new environment...".to_string()),
        },
        TimedStep {
            offset: tick,
            action: Action::FlipActive,
        },
        TimedStep {
            offset: 2 * tick,
            action: Action::SetSwitching(false),
        },
        TimedStep {
            offset: 2 * tick,
            action: Action::SetSwitchEnabled(true),
        },
        TimedStep {
            offset: 2 * tick,
            action: Action::SetDeployed(false),
        },
        TimedStep {
            offset: 2 * tick,
            action: Action::Narrate(format!(
                "✅ Traffic successfully switched to {} environment! Zero downtime achieved.",
                target.label()
            )),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(steps: &[TimedStep]) -> Vec<Duration> {
        steps.iter().map(|s| s.offset).collect()
    }

    #[test]
    fn deploy_script_offsets_span_four_ticks() {
        let state = ClusterState::new();
        let timings = SimTimings::default();
        let steps = deploy_script(&state, &timings);

        let offsets = ticks(&steps);
        assert_eq!(offsets.first(), Some(&Duration::ZERO));
        assert_eq!(offsets.last(), Some(&Duration::from_secs(4)));
        // Offsets are non-decreasing: the driver sleeps forward only.
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn deploy_script_targets_standby_with_bumped_version() {
        let state = ClusterState::new(); // Blue active, Green standby.
        let steps = deploy_script(&state, &SimTimings::default());

        let commit = steps
            .iter()
            .find_map(|s| match &s.action {
                Action::SetVersion { env, version } => Some((*env, *version)),
                _ => None,
            })
            .unwrap();
        assert_eq!(commit.0, Environment::Green);
        assert_eq!(commit.1.to_string(), "1.1");
    }

    #[test]
    fn deploy_script_narrates_four_phases_then_success() {
        let steps = deploy_script(&ClusterState::new(), &SimTimings::default());
        let narrations: Vec<&String> = steps
            .iter()
            .filter_map(|s| match &s.action {
                Action::Narrate(text) => Some(text),
                _ => None,
            })
            .collect();

        assert_eq!(narrations.len(), 5);
        assert!(narrations[0].contains("Deploying version 1.1 to GREEN"));
        assert!(narrations[1].contains("Docker image"));
        assert!(narrations[2].contains("Kubernetes pods"));
        assert!(narrations[3].contains("health checks"));
        assert!(narrations[4].contains("Ready to switch traffic"));
    }

    #[test]
    fn switch_script_offsets_follow_half_tick_schedule() {
        let timings = SimTimings {
            tick: Duration::from_secs(1),
        };
        let steps = switch_script(&ClusterState::new(), &timings);

        let offsets = ticks(&steps);
        assert!(offsets.contains(&Duration::from_millis(500)));
        assert_eq!(offsets.last(), Some(&Duration::from_secs(2)));
    }

    #[test]
    fn switch_script_disables_control_first_and_reenables_last() {
        let steps = switch_script(&ClusterState::new(), &SimTimings::default());

        assert_eq!(steps.first().unwrap().action, Action::SetSwitchEnabled(false));
        let reenable = steps
            .iter()
            .position(|s| s.action == Action::SetSwitchEnabled(true))
            .unwrap();
        assert_eq!(steps[reenable].offset, Duration::from_secs(2));
    }

    #[test]
    fn scripts_scale_with_tick() {
        let timings = SimTimings {
            tick: Duration::from_millis(100),
        };
        let deploy = deploy_script(&ClusterState::new(), &timings);
        assert_eq!(deploy.last().unwrap().offset, Duration::from_millis(400));

        let switch = switch_script(&ClusterState::new(), &timings);
        assert_eq!(switch.last().unwrap().offset, Duration::from_millis(200));
    }

    #[test]
    fn scripts_serialize_for_inspection() {
        let steps = deploy_script(&ClusterState::new(), &SimTimings::default());
        let json = serde_json::to_string(&steps).unwrap();
        let back: Vec<TimedStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, steps);
    }

    #[test]
    fn builders_do_not_mutate_state() {
        let state = ClusterState::new();
        let before = state.clone();
        let _ = deploy_script(&state, &SimTimings::default());
        let _ = switch_script(&state, &SimTimings::default());
        assert_eq!(state, before);
    }
}
