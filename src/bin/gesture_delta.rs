//! Gesture delta pass: reads a saved pose sequence, computes adjacent-frame
//! deltas, and writes the delta sequence. Runs as a separate batch process
//! after capture.

use anyhow::{bail, Context, Result};

use gesture_tracker::config::Config;
use gesture_tracker::gesture;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::load_or_default(CONFIG_PATH);

    let args: Vec<String> = std::env::args().collect();
    let (input, output) = match args.len() {
        1 => (
            config.storage.pose_path.clone(),
            config.storage.gesture_path.clone(),
        ),
        3 => (args[1].clone(), args[2].clone()),
        _ => bail!("usage: gesture_delta [<input> <output>]"),
    };

    println!("Gesture delta: {} -> {}", input, output);
    let count = gesture::delta_pass(&input, &output).context("gesture delta pass failed")?;
    println!("Wrote {} delta frames", count);
    Ok(())
}
