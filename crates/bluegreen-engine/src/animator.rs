//! Deployment animator — drives scripts against the cluster state.
//!
//! The animator owns the state block and the display surface. Each
//! operation builds its script, then the driver sleeps to every offset in
//! turn and applies the action. Operations take `&mut self`, so two
//! sequences can never be in flight at once; once started, a sequence
//! always runs to completion.

use tokio::time::Instant;
use tracing::{debug, info, warn};

use bluegreen_core::{ClusterState, Environment, SimError, SimResult, SimTimings};

use crate::script::{deploy_script, switch_script, Action, TimedStep};
use crate::surface::{Role, Surface};

/// The deployment animator.
pub struct Animator<S: Surface> {
    state: ClusterState,
    timings: SimTimings,
    surface: S,
}

impl<S: Surface> Animator<S> {
    /// Create an animator with default timings and a fresh cluster.
    pub fn new(surface: S) -> Self {
        Self::with_timings(surface, SimTimings::default())
    }

    pub fn with_timings(surface: S, timings: SimTimings) -> Self {
        Self {
            state: ClusterState::new(),
            timings,
            surface,
        }
    }

    pub fn state(&self) -> &ClusterState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Publish the full current state to the surface. Initial paint.
    pub fn sync_surface(&mut self) {
        for env in Environment::ALL {
            self.surface.version_label(env, self.state.version(env));
            self.surface.traffic(env, self.state.traffic(env));
            self.surface.badge(env, self.role_of(env));
            self.surface.switching(env, false);
        }
        self.surface.switch_enabled(true);
    }

    /// Deploy the next version to the standby environment.
    ///
    /// Narrates the build/orchestration/health-check phases, then commits
    /// the bumped version and sets the deployed flag. Always succeeds;
    /// there is no real deployment to fail.
    pub async fn deploy(&mut self) {
        let standby = self.state.standby();
        let next = self.state.version(standby).bump();
        info!(env = %standby, version = %next, "deploy started");

        let steps = deploy_script(&self.state, &self.timings);
        self.run_script(steps).await;

        info!(env = %standby, version = %next, "deploy completed");
    }

    /// Switch all traffic to the most recently deployed environment.
    ///
    /// Refused with a warning if nothing has been deployed since the last
    /// switch; no state changes in that case.
    pub async fn switch_traffic(&mut self) -> SimResult<()> {
        if !self.state.deployed {
            warn!("traffic switch refused; nothing deployed");
            self.surface
                .status("⚠️ Please deploy a new version first before switching traffic!");
            return Err(SimError::NotDeployed);
        }

        let target = self.state.standby();
        info!(env = %target, "traffic switch started");

        let steps = switch_script(&self.state, &self.timings);
        self.run_script(steps).await;

        info!(env = %target, "traffic switch completed");
        Ok(())
    }

    async fn run_script(&mut self, steps: Vec<TimedStep>) {
        let start = Instant::now();
        for step in steps {
            tokio::time::sleep_until(start + step.offset).await;
            self.apply(step.action);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Narrate(message) => {
                debug!(%message, "narrate");
                self.surface.status(&message);
            }
            Action::SetVersion { env, version } => {
                self.state.set_version(env, version);
                self.surface.version_label(env, version);
            }
            Action::SetDeployed(deployed) => {
                self.state.deployed = deployed;
            }
            Action::SetSwitching(on) => {
                for env in Environment::ALL {
                    self.surface.switching(env, on);
                }
            }
            Action::FlipActive => {
                self.state.flip_active();
                for env in Environment::ALL {
                    self.surface.traffic(env, self.state.traffic(env));
                    self.surface.badge(env, self.role_of(env));
                }
            }
            Action::SetSwitchEnabled(enabled) => {
                self.surface.switch_enabled(enabled);
            }
        }
    }

    fn role_of(&self, env: Environment) -> Role {
        if env == self.state.active {
            Role::Active
        } else {
            Role::Standby
        }
    }
}
