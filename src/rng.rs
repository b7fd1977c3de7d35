use rand::{rngs::StdRng, SeedableRng};

/// Create a [`StdRng`] from an explicit seed.
///
/// All randomness in the crate (weight initialization, synthetic data) flows
/// through a generator built here, so a fixed seed reproduces an entire
/// training run exactly.
pub fn from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create a [`StdRng`] seeded from the `SEED` environment variable,
/// defaulting to 0 when unset or unparseable.
pub fn from_env() -> StdRng {
    let seed = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    from_seed(seed)
}
