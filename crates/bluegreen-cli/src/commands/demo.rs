//! Scripted demo: N deploy-then-switch cycles.

use bluegreen_core::SimTimings;
use bluegreen_engine::Animator;

use crate::render::TerminalSurface;

pub async fn demo(timings: SimTimings, cycles: u32) -> anyhow::Result<()> {
    let mut animator = Animator::with_timings(TerminalSurface::new(), timings);
    animator.sync_surface();
    animator.surface_mut().draw();

    for cycle in 1..=cycles {
        println!();
        println!("cycle {cycle} of {cycles}");
        animator.deploy().await;
        animator.surface_mut().draw();

        animator.switch_traffic().await?;
        animator.surface_mut().draw();
    }
    Ok(())
}
