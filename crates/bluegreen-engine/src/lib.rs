//! Blue-green deployment animator — timed deploy and traffic-switch
//! choreography over explicit cluster state.
//!
//! The original animation chained nested timer callbacks against global
//! variables. Here each operation compiles to an explicit, inspectable
//! schedule (a list of `{offset, action}` steps) that a single driver
//! executes against tokio's clock, so the whole sequence is testable under
//! paused time.
//!
//! # Components
//!
//! - **`script`** — `TimedStep`/`Action` and the deploy/switch builders
//! - **`surface`** — display seam (`Surface`) plus null/recording impls
//! - **`animator`** — `Animator`, owns state and drives scripts

pub mod animator;
pub mod script;
pub mod surface;

pub use animator::Animator;
pub use script::{deploy_script, switch_script, Action, TimedStep};
pub use surface::{NullSurface, RecordingSurface, Role, Surface, SurfaceEvent};
