use std::time::{SystemTime, UNIX_EPOCH};

/// Seed taken from the wall clock, for runs without an explicit `--seed`.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default()
}
