//! Interactive session: one command per line on stdin.

use tokio::io::{AsyncBufReadExt, BufReader};

use bluegreen_core::SimTimings;
use bluegreen_engine::Animator;

use crate::render::TerminalSurface;

pub async fn run(timings: SimTimings) -> anyhow::Result<()> {
    let mut animator = Animator::with_timings(TerminalSurface::new(), timings);
    animator.sync_surface();
    animator.surface_mut().draw();
    println!();
    println!("commands: deploy, switch, status, quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "deploy" => {
                animator.deploy().await;
                animator.surface_mut().draw();
            }
            "switch" => {
                // A refused switch already narrated its warning.
                if animator.switch_traffic().await.is_ok() {
                    animator.surface_mut().draw();
                }
            }
            "status" => animator.surface_mut().draw(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }
    Ok(())
}
