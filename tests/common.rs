//!
//! 集成测试的通用辅助函数
//!
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Routes `tracing` output through the test harness; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic generator so key material is reproducible across runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
