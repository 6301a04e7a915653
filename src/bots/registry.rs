use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::bots::{CpuBot, HumanBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - cpu[:seed]
/// - random[:seed]
///
/// Seeded bots without an explicit seed derive one from `seed` and the seat `index`.
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let label = label_for_spec(spec);
    let derived_seed = || {
        spec.split_once(':')
            .and_then(|(_, value)| value.trim().parse::<u64>().ok())
            .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9))
    };
    match label.as_str() {
        "human" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string())
                .unwrap_or_else(|| format!("Human {index}"));
            Ok(Box::new(HumanBot::new(name)))
        }
        "cpu" => Ok(Box::new(CpuBot::new(StdRng::seed_from_u64(derived_seed())))),
        "random" => Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(
            derived_seed(),
        )))),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}
