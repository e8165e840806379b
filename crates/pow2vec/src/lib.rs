//! A growable array with power-of-two capacity and value semantics.
//!
//! [`Pow2Vec<T>`] owns one contiguous heap buffer and tracks its logical
//! length separately from the allocated capacity. Capacity is always zero
//! or a power of two, grows straight to the smallest power of two that
//! fits the required length, and only shrinks on request.
//!
//! # Architecture
//!
//! ```text
//! Pow2Vec<T>  (vector: mutation ops, access, copy, swap)
//! ├── Buffer<T>  (buffer: single-owner Option<Box<[T]>>)
//! ├── growth     (capacity_for / grow_target / shrink_target)
//! └── cmp        (Eq / Ord / Hash over the live prefix)
//! ```
//!
//! # Invariants
//!
//! After every public operation, successful or not:
//!
//! - capacity is zero iff no buffer is allocated ([`Pow2Vec::data`] is `None`);
//! - capacity is zero or a power of two;
//! - `len <= capacity`;
//! - a copy never shares storage and its capacity is recomputed from its
//!   length ("narrowing copy").
//!
//! # Safety
//!
//! Every slot of the buffer always holds a constructed value, so the crate
//! needs no `unsafe`. Operations that open new slots require `T: Default`;
//! operations that duplicate elements also require `T: Clone`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
mod cmp;
pub mod error;
pub mod growth;
pub mod vector;

// Public re-exports for the primary API surface.
pub use error::VecError;
pub use vector::Pow2Vec;
