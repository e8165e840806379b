//! Benchmark workloads for the pow2vec container.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`filled`]: a container of `len` copies of one value
//! - [`ascending`]: `0..n` pushed one at a time
//! - [`changes_workload`]: a seeded mixed-operation script

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pow2vec::Pow2Vec;
use pow2vec_test_utils::generate::random_changes;
use pow2vec_test_utils::{Action, ScriptConfig};
use rand::Rng;

/// Element count used by the stress benches.
pub const STRESS_LEN: usize = 100_000;

/// Build a container holding `len` copies of `7`.
pub fn filled(len: usize) -> Pow2Vec<u64> {
    Pow2Vec::with_value(len, 7).unwrap()
}

/// Build a container holding `0..n`, appended one element at a time so
/// capacity walks the power-of-two ladder.
pub fn ascending(n: u64) -> Pow2Vec<u64> {
    let mut v = Pow2Vec::new();
    for i in 0..n {
        v.push_back(i).unwrap();
    }
    v
}

/// Seeded mixed-operation script of `steps` actions over `u64` values.
///
/// The same `(seed, steps)` always yields the same script.
pub fn changes_workload(seed: u64, steps: usize) -> Vec<Action<u64>> {
    let config = ScriptConfig::new(seed).with_steps(steps);
    random_changes(&config, |rng| rng.random::<u64>()).unwrap()
}

/// Replay `actions` on a fresh container, returning it.
///
/// # Panics
///
/// Panics if the container rejects an action; workloads from
/// [`changes_workload`] never trigger that.
pub fn replay(actions: &[Action<u64>]) -> Pow2Vec<u64> {
    let mut v = Pow2Vec::new();
    for action in actions {
        action.apply(&mut v).unwrap();
    }
    v
}
