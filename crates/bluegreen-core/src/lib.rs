//! Domain model for the blue-green deployment simulator.
//!
//! Two environments (Blue, Green), exactly one active at a time. A deploy
//! targets the standby environment and bumps its version by one tenth; a
//! traffic switch flips which environment is active. Nothing here performs
//! real work — the model exists so the choreography in `bluegreen-engine`
//! has explicit, testable state instead of a pile of globals.
//!
//! # Components
//!
//! - **`types`** — `Environment` and tenths-based `Version`
//! - **`state`** — `ClusterState`, the single mutable state block
//! - **`config`** — `SimTimings`, tick duration loaded from toml
//! - **`error`** — `SimError` / `SimResult`

pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use config::SimTimings;
pub use error::{SimError, SimResult};
pub use state::ClusterState;
pub use types::{Environment, Version};
