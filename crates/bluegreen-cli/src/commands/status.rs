//! Print the initial cluster state.

use anyhow::bail;

use bluegreen_core::{ClusterState, Environment};

pub fn status(format: &str) -> anyhow::Result<()> {
    let state = ClusterState::new();
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&state)?),
        "text" => {
            for env in Environment::ALL {
                let role = if env == state.active { "active" } else { "standby" };
                println!(
                    "{:<5}  version {}  traffic {:>3}%  {role}",
                    env.to_string(),
                    state.version(env),
                    state.traffic(env),
                );
            }
            println!("deployed: {}", state.deployed);
        }
        other => bail!("unknown format {other:?} (expected text or json)"),
    }
    Ok(())
}
