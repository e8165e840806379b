//! Seeded random script generators.
//!
//! Every generator tracks the length the script will have reached after
//! each action, so the scripts it emits are always valid for the
//! reference model. Values come from a caller-supplied closure that draws
//! from the same ChaCha8 stream, so a given [`ScriptConfig`] and value
//! generator reproduce the same script.
//!
//! - [`random_changes`]: mixed growing and shrinking operations.
//! - [`random_inserts`]: single and bulk inserts at random positions.
//! - [`random_erases`]: a bulk fill followed by single and range erases.
//! - [`mixed_resizes`]: resizes that double, halve or jump at random.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ScriptConfig;
use crate::Action;

/// Random lowercase ASCII string with length in `[min_len, max_len]`.
pub fn random_string(rng: &mut ChaCha8Rng, min_len: usize, max_len: usize) -> String {
    let len = rng.random_range(min_len..=max_len);
    (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

/// Mixed growing and shrinking operations.
///
/// Growing steps push, insert, bulk insert or resize upwards; shrinking
/// steps pop, erase, range-erase, resize downwards or (with
/// `clear_probability`) clear.
pub fn random_changes<T, G>(config: &ScriptConfig, mut make_value: G) -> Result<Vec<Action<T>>, String>
where
    G: FnMut(&mut ChaCha8Rng) -> T,
{
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut actions = Vec::with_capacity(config.steps);
    let mut len = 0usize;
    let bulk = config.max_run * 2;

    for _ in 0..config.steps {
        let grow = len == 0 || (len + bulk <= config.max_len && rng.random_bool(0.5));
        let kind = rng.random_range(0..4u8);

        if grow {
            let pos = rng.random_range(0..=len);
            let count = rng.random_range(0..=bulk.min(config.max_len - len));
            let action = match kind {
                0 => {
                    len += 1;
                    Action::PushBack(make_value(&mut rng))
                }
                1 => {
                    len += count;
                    Action::InsertN {
                        pos,
                        count,
                        value: make_value(&mut rng),
                    }
                }
                2 => {
                    len += 1;
                    Action::Insert {
                        pos,
                        value: make_value(&mut rng),
                    }
                }
                _ => {
                    len += count;
                    Action::Resize {
                        len,
                        value: Some(make_value(&mut rng)),
                    }
                }
            };
            actions.push(action);
            continue;
        }

        if rng.random_bool(config.clear_probability) {
            len = 0;
            actions.push(Action::Clear);
            continue;
        }

        let first = rng.random_range(0..=len);
        let last = first + rng.random_range(0..=config.max_run.min(len - first));
        let action = match kind {
            0 => {
                len -= 1;
                Action::PopBack
            }
            1 => {
                let pos = rng.random_range(0..len);
                len -= 1;
                Action::Erase { pos }
            }
            2 => {
                len -= last - first;
                Action::EraseRange { first, last }
            }
            _ => {
                len -= last - first;
                Action::Resize { len, value: None }
            }
        };
        actions.push(action);
    }
    Ok(actions)
}

/// Single and bulk inserts before random positions.
pub fn random_inserts<T, G>(config: &ScriptConfig, mut make_value: G) -> Result<Vec<Action<T>>, String>
where
    G: FnMut(&mut ChaCha8Rng) -> T,
{
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut actions = Vec::with_capacity(config.steps);
    let mut len = 0usize;

    for _ in 0..config.steps {
        let pos = rng.random_range(0..=len);
        let count = rng.random_range(0..=config.max_run);
        let value = make_value(&mut rng);
        if rng.random_bool(0.5) {
            len += count;
            actions.push(Action::InsertN { pos, count, value });
        } else {
            len += 1;
            actions.push(Action::Insert { pos, value });
        }
    }
    Ok(actions)
}

/// Fill with `max_len` copies of `value`, then erase single elements and
/// ranges at random.
pub fn random_erases<T: Clone>(config: &ScriptConfig, value: T) -> Result<Vec<Action<T>>, String> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut actions = Vec::with_capacity(config.steps + 1);
    let mut len = config.max_len;
    actions.push(Action::InsertN {
        pos: 0,
        count: len,
        value,
    });

    for _ in 0..config.steps {
        let first = rng.random_range(0..=len);
        let last = rng.random_range(first..=len);
        if len == 0 || rng.random_bool(0.5) {
            len -= last - first;
            actions.push(Action::EraseRange { first, last });
        } else {
            let pos = rng.random_range(0..len);
            len -= 1;
            actions.push(Action::Erase { pos });
        }
    }
    Ok(actions)
}

/// Resizes that double, halve, or jump to a random length within those
/// bounds, alternating default and explicit fill values.
pub fn mixed_resizes<T, G>(config: &ScriptConfig, mut make_value: G) -> Result<Vec<Action<T>>, String>
where
    G: FnMut(&mut ChaCha8Rng) -> T,
{
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut actions = Vec::with_capacity(config.steps);
    let mut len = 0usize;

    for _ in 0..config.steps {
        let extend = len == 0 || (rng.random_bool(0.5) && len * 2 <= config.max_len);
        len = match (extend, rng.random_bool(0.5)) {
            // Doubling zero stays at zero; jump to one instead.
            (true, true) => (len * 2).max(1),
            (true, false) => rng.random_range(len..=(len * 2).max(1)),
            (false, true) => len / 2,
            (false, false) => rng.random_range(0..=len),
        };
        let value = if rng.random_bool(0.5) {
            None
        } else {
            Some(make_value(&mut rng))
        };
        actions.push(Action::Resize { len, value });
    }
    Ok(actions)
}
