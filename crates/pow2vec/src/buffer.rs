//! Single-owner backing storage for [`Pow2Vec`](crate::Pow2Vec).
//!
//! A [`Buffer`] owns at most one contiguous heap allocation of `T` slots.
//! Every slot is always a constructed value: live elements at the front,
//! `T::default()` fillers behind them. Keeping the whole allocation
//! initialised lets the crate stay free of `unsafe`; the price is that
//! opening new slots requires `T: Default`.
//!
//! Reallocation is all-or-nothing. The replacement allocation is reserved
//! fallibly and filled completely before the live elements are swapped
//! across, so an allocation failure (or a panicking `Default`/`Clone`)
//! leaves the current allocation untouched.

use std::alloc::Layout;

use crate::error::VecError;

/// Exclusively owned slot storage. Absent iff its capacity is zero.
pub struct Buffer<T> {
    /// The allocation. `None` iff capacity is zero.
    slots: Option<Box<[T]>>,
}

impl<T> Buffer<T> {
    /// A buffer with no allocation.
    pub const fn empty() -> Self {
        Self { slots: None }
    }

    /// Number of slots in the allocation (zero when absent).
    pub fn capacity(&self) -> usize {
        self.slots.as_ref().map_or(0, |slots| slots.len())
    }

    /// All slots, or `None` when nothing is allocated.
    pub fn as_slice(&self) -> Option<&[T]> {
        self.slots.as_deref()
    }

    /// All slots mutably, or `None` when nothing is allocated.
    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        self.slots.as_deref_mut()
    }

    /// All slots; empty when nothing is allocated.
    pub fn slots(&self) -> &[T] {
        self.slots.as_deref().unwrap_or(&[])
    }

    /// All slots mutably; empty when nothing is allocated.
    pub fn slots_mut(&mut self) -> &mut [T] {
        self.slots.as_deref_mut().unwrap_or(&mut [])
    }

    /// Drop every slot and release the allocation.
    pub fn release(&mut self) {
        self.slots = None;
    }

    /// Exchange allocations with `other` without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Memory footprint of the allocation in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity() * std::mem::size_of::<T>()
    }
}

impl<T: Default> Buffer<T> {
    /// Allocate `capacity` slots all holding `T::default()`.
    pub fn with_defaults(capacity: usize) -> Result<Self, VecError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        Ok(Self {
            slots: Some(default_slots(capacity)?),
        })
    }

    /// Move the first `len` slots into a fresh allocation of
    /// `new_capacity` slots, then drop the old allocation.
    ///
    /// A `new_capacity` of zero releases the allocation. On error the
    /// buffer is unchanged.
    pub fn reallocate(&mut self, new_capacity: usize, len: usize) -> Result<(), VecError> {
        debug_assert!(len <= new_capacity, "reallocation would lose live elements");
        debug_assert!(len <= self.capacity(), "more live elements than slots");

        if new_capacity == 0 {
            self.release();
            return Ok(());
        }
        let mut fresh = default_slots(new_capacity)?;
        fresh[..len].swap_with_slice(&mut self.slots_mut()[..len]);
        self.slots = Some(fresh);
        Ok(())
    }
}

impl<T: Clone + Default> Buffer<T> {
    /// Allocate `capacity` slots whose first `len` hold clones of `value`.
    pub fn filled(capacity: usize, len: usize, value: &T) -> Result<Self, VecError> {
        debug_assert!(len <= capacity);
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let mut slots = reserve_slots(capacity)?;
        slots.resize(len, value.clone());
        slots.resize_with(capacity, T::default);
        Ok(Self {
            slots: Some(slots.into_boxed_slice()),
        })
    }

    /// Allocate `capacity` slots whose prefix holds clones of `live`.
    pub fn copied(capacity: usize, live: &[T]) -> Result<Self, VecError> {
        debug_assert!(live.len() <= capacity);
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let mut slots = reserve_slots(capacity)?;
        slots.extend_from_slice(live);
        slots.resize_with(capacity, T::default);
        Ok(Self {
            slots: Some(slots.into_boxed_slice()),
        })
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn default_slots<T: Default>(capacity: usize) -> Result<Box<[T]>, VecError> {
    let mut slots = reserve_slots(capacity)?;
    slots.resize_with(capacity, T::default);
    Ok(slots.into_boxed_slice())
}

/// Reserve room for exactly `capacity` slots without aborting on failure.
fn reserve_slots<T>(capacity: usize) -> Result<Vec<T>, VecError> {
    // Layout::array rejects byte sizes above isize::MAX.
    Layout::array::<T>(capacity).map_err(|_| VecError::CapacityOverflow {
        requested: capacity,
    })?;
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| VecError::AllocationFailed { capacity })?;
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_allocation() {
        let buf: Buffer<u32> = Buffer::empty();
        assert_eq!(buf.capacity(), 0);
        assert!(buf.as_slice().is_none());
        assert!(buf.slots().is_empty());
        assert_eq!(buf.memory_bytes(), 0);
    }

    #[test]
    fn with_defaults_fills_every_slot() {
        let buf: Buffer<u32> = Buffer::with_defaults(8).unwrap();
        assert_eq!(buf.capacity(), 8);
        assert!(buf.slots().iter().all(|&v| v == 0));
        assert_eq!(buf.memory_bytes(), 8 * 4);
    }

    #[test]
    fn zero_capacity_allocates_nothing() {
        let buf = Buffer::filled(0, 0, &String::from("x")).unwrap();
        assert!(buf.as_slice().is_none());
        let buf: Buffer<String> = Buffer::copied(0, &[]).unwrap();
        assert!(buf.as_slice().is_none());
    }

    #[test]
    fn filled_clones_prefix_and_defaults_tail() {
        let buf = Buffer::filled(4, 3, &String::from("ab")).unwrap();
        assert_eq!(buf.slots(), &["ab", "ab", "ab", ""]);
    }

    #[test]
    fn reallocate_moves_live_prefix() {
        let mut buf = Buffer::copied(4, &[1u32, 2, 3]).unwrap();
        buf.reallocate(16, 3).unwrap();
        assert_eq!(buf.capacity(), 16);
        assert_eq!(&buf.slots()[..3], &[1, 2, 3]);
        assert!(buf.slots()[3..].iter().all(|&v| v == 0));

        buf.reallocate(4, 3).unwrap();
        assert_eq!(buf.slots(), &[1, 2, 3, 0]);
    }

    #[test]
    fn reallocate_to_zero_releases() {
        let mut buf = Buffer::copied(2, &[7u8]).unwrap();
        buf.reallocate(0, 0).unwrap();
        assert_eq!(buf.capacity(), 0);
        assert!(buf.as_slice().is_none());
    }

    #[test]
    fn oversized_request_is_capacity_overflow_not_abort() {
        let mut buf = Buffer::copied(2, &[1u64, 2]).unwrap();
        let huge = 1usize << (usize::BITS - 2);
        let err = buf.reallocate(huge, 2).unwrap_err();
        assert_eq!(err, VecError::CapacityOverflow { requested: huge });
        // Untouched on failure.
        assert_eq!(buf.slots(), &[1, 2]);
    }

    #[test]
    fn swap_exchanges_allocations() {
        let mut a = Buffer::copied(2, &[1u8, 2]).unwrap();
        let mut b: Buffer<u8> = Buffer::empty();
        let a_ptr = a.slots().as_ptr();
        a.swap(&mut b);
        assert!(a.as_slice().is_none());
        assert_eq!(b.slots().as_ptr(), a_ptr);
    }
}
