//! Test utilities for `pow2vec` development.
//!
//! Drives a [`Pow2Vec`] and a `std` `Vec` reference model through the
//! same scripted [`Action`]s and compares them after every step:
//!
//! - [`Action`]: one scripted operation, applicable to both sides.
//! - [`check_equivalence`] / [`check_invariants`]: per-step checks.
//! - [`run_script`]: applies a script, returning the transcript on the
//!   first divergence.
//! - [`generate`]: seeded random script generators configured by
//!   [`ScriptConfig`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod generate;

use std::fmt::{self, Debug, Display, Write as _};

use pow2vec::growth::is_valid_capacity;
use pow2vec::{Pow2Vec, VecError};

pub use config::ScriptConfig;

/// One scripted container operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Action<T> {
    Clear,
    Insert { pos: usize, value: T },
    InsertN { pos: usize, count: usize, value: T },
    Erase { pos: usize },
    EraseRange { first: usize, last: usize },
    PushBack(T),
    PopBack,
    /// Resize with `value` as filler, or `T::default()` when `None`.
    Resize { len: usize, value: Option<T> },
}

impl<T: Clone + Default> Action<T> {
    /// Apply to the reference model.
    ///
    /// # Panics
    ///
    /// Panics on out-of-range positions, like the `Vec` methods it calls.
    /// Scripts are expected to be valid for the model.
    pub fn apply_model(&self, model: &mut Vec<T>) {
        match self {
            Self::Clear => model.clear(),
            Self::Insert { pos, value } => model.insert(*pos, value.clone()),
            Self::InsertN { pos, count, value } => {
                let tail = model.split_off(*pos);
                model.extend(std::iter::repeat_n(value.clone(), *count));
                model.extend(tail);
            }
            Self::Erase { pos } => {
                model.remove(*pos);
            }
            Self::EraseRange { first, last } => {
                model.drain(*first..*last);
            }
            Self::PushBack(value) => model.push(value.clone()),
            Self::PopBack => {
                model.pop();
            }
            Self::Resize { len, value } => {
                model.resize(*len, value.clone().unwrap_or_default());
            }
        }
    }

    /// Apply to the container under test.
    pub fn apply(&self, v: &mut Pow2Vec<T>) -> Result<(), VecError> {
        match self {
            Self::Clear => v.clear(),
            Self::Insert { pos, value } => v.insert(*pos, value.clone())?,
            Self::InsertN { pos, count, value } => v.insert_n(*pos, *count, value.clone())?,
            Self::Erase { pos } => {
                v.erase(*pos)?;
            }
            Self::EraseRange { first, last } => v.erase_range(*first, *last)?,
            Self::PushBack(value) => v.push_back(value.clone())?,
            Self::PopBack => {
                v.pop_back()?;
            }
            Self::Resize { len, value: None } => v.resize(*len)?,
            Self::Resize {
                len,
                value: Some(value),
            } => v.resize_with_value(*len, value.clone())?,
        }
        Ok(())
    }
}

impl<T: Display> Display for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Insert { pos, value } => write!(f, "insert before {pos}: {value}"),
            Self::InsertN { pos, count, value } => {
                write!(f, "insert {count} before {pos}: {value}")
            }
            Self::Erase { pos } => write!(f, "erase at {pos}"),
            Self::EraseRange { first, last } => write!(f, "erase [{first}, {last})"),
            Self::PushBack(value) => write!(f, "push back {value}"),
            Self::PopBack => write!(f, "pop back"),
            Self::Resize { len, value: None } => write!(f, "resize to {len} with default"),
            Self::Resize {
                len,
                value: Some(value),
            } => write!(f, "resize to {len} with {value}"),
        }
    }
}

/// Compare the container against the reference model.
///
/// Checks size, emptiness, `front`/`back`, every live element, and that
/// the prefix of raw storage matches the model.
pub fn check_equivalence<T: PartialEq + Debug>(
    expected: &[T],
    actual: &Pow2Vec<T>,
) -> Result<(), String> {
    let mismatch = |what: &str| {
        format!(
            "{what}\n  expected [len {}] {:?}\n  actual   [len {}] {:?}",
            expected.len(),
            expected,
            actual.len(),
            actual.as_slice()
        )
    };

    if expected.len() != actual.len() {
        return Err(mismatch("different sizes"));
    }
    if expected.is_empty() != actual.is_empty() {
        return Err(mismatch("different empty status"));
    }
    if !expected.is_empty() {
        if expected.first() != actual.front().ok() {
            return Err(mismatch("different front values"));
        }
        if expected.last() != actual.back().ok() {
            return Err(mismatch("different back values"));
        }
    }
    if let Some(i) = (0..expected.len()).find(|&i| expected[i] != actual[i]) {
        return Err(mismatch(&format!("different values at position {i}")));
    }
    let raw = actual.data().unwrap_or(&[]);
    if raw.len() < expected.len() || raw[..expected.len()] != *expected {
        return Err(mismatch("raw storage disagrees with the model"));
    }
    Ok(())
}

/// Check the structural invariants that must hold after every operation.
pub fn check_invariants<T>(v: &Pow2Vec<T>) -> Result<(), String> {
    let (len, capacity) = (v.len(), v.capacity());
    if !is_valid_capacity(capacity) {
        return Err(format!("capacity {capacity} is not zero or a power of two"));
    }
    if len > capacity {
        return Err(format!("length {len} exceeds capacity {capacity}"));
    }
    if (capacity == 0) != v.data().is_none() {
        return Err(format!(
            "capacity {capacity} but buffer {}",
            if v.data().is_some() { "present" } else { "absent" }
        ));
    }
    if let Some(data) = v.data() {
        if data.len() != capacity {
            return Err(format!(
                "raw storage spans {} slots, capacity is {capacity}",
                data.len()
            ));
        }
    }
    Ok(())
}

/// Apply `actions` to a fresh container and a fresh reference model,
/// checking equivalence and invariants after the start and after each
/// step.
///
/// An action the container rejects is never applied to the model. On
/// failure returns the transcript of every step up to and including the
/// failing one.
pub fn run_script<T>(actions: &[Action<T>]) -> Result<(), String>
where
    T: Clone + Default + PartialEq + Debug + Display,
{
    let mut expected: Vec<T> = Vec::new();
    let mut actual: Pow2Vec<T> = Pow2Vec::new();
    let mut transcript = String::new();

    transcript.push_str("init by default constructor");
    record_step(&mut transcript, &expected, &actual)?;

    for action in actions {
        let _ = write!(transcript, "{action}");
        if let Err(err) = action.apply(&mut actual) {
            let _ = writeln!(transcript, "\tERROR!\nrejected by container: {err}");
            return Err(transcript);
        }
        action.apply_model(&mut expected);
        record_step(&mut transcript, &expected, &actual)?;
    }
    Ok(())
}

/// Append the outcome of the per-step checks to `transcript`. On failure
/// the whole transcript becomes the error.
fn record_step<T: PartialEq + Debug>(
    transcript: &mut String,
    expected: &[T],
    actual: &Pow2Vec<T>,
) -> Result<(), String> {
    match check_equivalence(expected, actual).and_then(|()| check_invariants(actual)) {
        Ok(()) => {
            let _ = writeln!(transcript, "\tOK!");
            Ok(())
        }
        Err(reason) => {
            let _ = writeln!(transcript, "\tERROR!\n{reason}");
            Err(std::mem::take(transcript))
        }
    }
}
