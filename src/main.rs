//! CLI: stdin JSON -> stdout JSON. Fallback path for hosts that cannot load
//! the dynamic module; filters a whole batch in one invocation.
//!
//! Usage:
//!   echo '{"ticks":[...]}' | tick-filters valid
//!   echo '{"points":[...], "threshold_percent":5.0}' | tick-filters significant
use serde::{Deserialize, Serialize};
use std::{env, io};
use tick_filters::{is_significant, is_valid, Tick};

// --- Validity structs ---

#[derive(Debug, Deserialize)]
struct ValidInput {
    ticks: Vec<Tick>,
}

#[derive(Debug, Serialize)]
struct ValidOutput {
    kept: Vec<Tick>,
    dropped: usize,
}

// --- Significance structs ---

#[derive(Debug, Deserialize)]
struct SignificantInput {
    points: Vec<PricePoint>,
    threshold_percent: f32,
}

#[derive(Debug, Deserialize)]
struct PricePoint {
    current: f32,
    last: f32,
}

#[derive(Debug, Serialize)]
struct SignificantOutput {
    significant: Vec<bool>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("valid");

    match cmd {
        "significant" => {
            let input: SignificantInput = serde_json::from_reader(io::stdin())?;
            let significant = input
                .points
                .iter()
                .map(|p| is_significant(p.current, p.last, input.threshold_percent))
                .collect();
            serde_json::to_writer(io::stdout(), &SignificantOutput { significant })?;
        }
        _ => {
            let input: ValidInput = serde_json::from_reader(io::stdin())?;
            let total = input.ticks.len();
            let kept: Vec<Tick> = input
                .ticks
                .into_iter()
                .filter(|t| is_valid(t.price, t.volume))
                .collect();
            let dropped = total - kept.len();
            serde_json::to_writer(io::stdout(), &ValidOutput { kept, dropped })?;
        }
    }
    Ok(())
}
