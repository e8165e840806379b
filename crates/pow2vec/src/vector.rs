//! The [`Pow2Vec`] container and its inherent API.
//!
//! `Pow2Vec<T>` is a growable array with value semantics. It owns a single
//! [`Buffer`] whose capacity is always zero or a power of two, and tracks
//! the number of live elements separately from that capacity.
//!
//! # Capacity contract
//!
//! - Growth jumps straight to [`capacity_for`](crate::growth::capacity_for)
//!   of the required length.
//! - `erase`, `pop_back`, `resize` and `truncate` never shrink capacity;
//!   only [`clear`](Pow2Vec::clear) (to zero) and
//!   [`shrink_to_fit`](Pow2Vec::shrink_to_fit) do.
//! - Copies are *narrowing*: a copy's capacity is recomputed from the
//!   source's length instead of inherited from the source's capacity.
//!
//! # Failure
//!
//! Bounds and emptiness violations return [`VecError`] and leave the
//! container untouched. Operations that may allocate return
//! [`VecError::CapacityOverflow`] or [`VecError::AllocationFailed`] before
//! any state has changed.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::buffer::Buffer;
use crate::error::VecError;
use crate::growth;

/// A growable array whose capacity is always zero or a power of two.
///
/// Slots past the live length are allocated and hold `T::default()`;
/// they are exposed only through [`data`](Pow2Vec::data) and never take
/// part in comparisons.
///
/// # Examples
///
/// ```
/// use pow2vec::Pow2Vec;
///
/// let mut v = Pow2Vec::new();
/// v.push_back(1).unwrap();
/// v.push_back(2).unwrap();
/// v.push_back(3).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
///
/// v.erase_range(0, 2).unwrap();
/// assert_eq!(v.capacity(), 4);
/// assert_eq!(v.clone().capacity(), 1);
/// ```
pub struct Pow2Vec<T> {
    buf: Buffer<T>,
    /// Number of live elements at the front of `buf`.
    len: usize,
}

impl<T> Pow2Vec<T> {
    /// Create an empty container. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: Buffer::empty(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots: zero or a power of two, never below
    /// [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` iff the container holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Memory footprint of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buf.memory_bytes()
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.buf.slots()[..self.len]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.slots_mut()[..len]
    }

    /// Raw storage: every allocated slot, live or not.
    ///
    /// Returns `None` iff [`capacity`](Self::capacity) is zero. Slots at
    /// or past [`len`](Self::len) hold unspecified (but valid) values.
    pub fn data(&self) -> Option<&[T]> {
        self.buf.as_slice()
    }

    /// Raw storage, mutably. See [`data`](Self::data).
    pub fn data_mut(&mut self) -> Option<&mut [T]> {
        self.buf.as_mut_slice()
    }

    /// Element at `index`.
    ///
    /// # Errors
    ///
    /// [`VecError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, VecError> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Element at `index`, mutably.
    ///
    /// # Errors
    ///
    /// [`VecError::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// First element, or [`VecError::EmptyContainer`].
    pub fn front(&self) -> Result<&T, VecError> {
        self.as_slice().first().ok_or(VecError::EmptyContainer)
    }

    /// First element mutably, or [`VecError::EmptyContainer`].
    pub fn front_mut(&mut self) -> Result<&mut T, VecError> {
        self.as_mut_slice().first_mut().ok_or(VecError::EmptyContainer)
    }

    /// Last element, or [`VecError::EmptyContainer`].
    pub fn back(&self) -> Result<&T, VecError> {
        self.as_slice().last().ok_or(VecError::EmptyContainer)
    }

    /// Last element mutably, or [`VecError::EmptyContainer`].
    pub fn back_mut(&mut self) -> Result<&mut T, VecError> {
        self.as_mut_slice().last_mut().ok_or(VecError::EmptyContainer)
    }

    /// Exchange buffers, lengths and capacities with `other`.
    ///
    /// O(1): no element is copied or moved.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Drop every element and release the buffer.
    ///
    /// Unlike `resize(0)`, which keeps the allocation, capacity drops to
    /// zero and [`data`](Self::data) returns `None` afterwards.
    pub fn clear(&mut self) {
        self.buf.release();
        self.len = 0;
    }

    fn check_index(&self, index: usize) -> Result<(), VecError> {
        if index < self.len {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn check_position(&self, pos: usize) -> Result<(), VecError> {
        if pos <= self.len {
            Ok(())
        } else {
            Err(self.out_of_range(pos))
        }
    }

    fn out_of_range(&self, index: usize) -> VecError {
        VecError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T: Default> Pow2Vec<T> {
    /// Append `value` after the last element.
    ///
    /// # Errors
    ///
    /// Allocation errors if the buffer had to grow; the container is
    /// unchanged in that case.
    pub fn push_back(&mut self, value: T) -> Result<(), VecError> {
        let required = growth::required_len(self.len, 1)?;
        self.grow_for(required)?;
        self.buf.slots_mut()[self.len] = value;
        self.len = required;
        Ok(())
    }

    /// Remove and return the last element. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// [`VecError::EmptyContainer`] if there is nothing to pop.
    pub fn pop_back(&mut self) -> Result<T, VecError> {
        if self.len == 0 {
            return Err(VecError::EmptyContainer);
        }
        self.len -= 1;
        Ok(std::mem::take(&mut self.buf.slots_mut()[self.len]))
    }

    /// Insert `value` before position `pos`, shifting `[pos, len)` right.
    ///
    /// # Errors
    ///
    /// [`VecError::IndexOutOfRange`] if `pos > len`, or an allocation
    /// error if the buffer had to grow.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), VecError> {
        self.check_position(pos)?;
        let required = growth::required_len(self.len, 1)?;
        self.grow_for(required)?;

        let slots = self.buf.slots_mut();
        slots[self.len] = value;
        slots[pos..required].rotate_right(1);
        self.len = required;
        Ok(())
    }

    /// Remove and return the element at `pos`, shifting the tail left.
    /// Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// [`VecError::IndexOutOfRange`] if `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> Result<T, VecError> {
        self.check_index(pos)?;
        let len = self.len;
        let slots = self.buf.slots_mut();
        slots[pos..len].rotate_left(1);
        self.len -= 1;
        Ok(std::mem::take(&mut slots[len - 1]))
    }

    /// Remove the elements in `[first, last)`, shifting the tail left.
    ///
    /// `first == last` is a valid no-op. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// [`VecError::IndexOutOfRange`] unless `first <= last <= len`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> Result<(), VecError> {
        if first > last {
            return Err(self.out_of_range(first));
        }
        self.check_position(last)?;

        let count = last - first;
        if count == 0 {
            return Ok(());
        }
        let len = self.len;
        self.buf.slots_mut()[first..len].rotate_left(count);
        self.vacate(len - count);
        Ok(())
    }

    /// Drop elements past `new_len`. Capacity is unchanged; a `new_len`
    /// at or above the current length does nothing.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.vacate(new_len);
        }
    }

    /// Resize to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking drops the tail and keeps the capacity.
    ///
    /// # Errors
    ///
    /// Allocation errors if `new_len` exceeds the capacity.
    pub fn resize(&mut self, new_len: usize) -> Result<(), VecError> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.grow_for(new_len)?;
        let len = self.len;
        self.buf.slots_mut()[len..new_len].fill_with(T::default);
        self.len = new_len;
        Ok(())
    }

    /// Ensure room for at least `capacity` elements.
    ///
    /// No-op if the current capacity suffices; otherwise grows to the
    /// smallest power of two `>= capacity`, keeping every element.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), VecError> {
        self.grow_for(capacity)
    }

    /// Reallocate to the smallest power of two that holds the current
    /// length (releasing the buffer when empty). No-op if already tight.
    pub fn shrink_to_fit(&mut self) -> Result<(), VecError> {
        if let Some(capacity) = growth::shrink_target(self.capacity(), self.len)? {
            self.buf.reallocate(capacity, self.len)?;
        }
        Ok(())
    }

    fn grow_for(&mut self, required: usize) -> Result<(), VecError> {
        if let Some(capacity) = growth::grow_target(self.capacity(), required)? {
            self.buf.reallocate(capacity, self.len)?;
        }
        Ok(())
    }

    /// Shorten to `new_len`, resetting the vacated slots so removed values
    /// are dropped now rather than when the slot is next reused.
    fn vacate(&mut self, new_len: usize) {
        let old_len = self.len;
        self.len = new_len;
        self.buf.slots_mut()[new_len..old_len].fill_with(T::default);
    }
}

impl<T: Clone + Default> Pow2Vec<T> {
    /// Create a container holding `count` clones of `value`.
    ///
    /// Capacity is the smallest power of two `>= count`; `count == 0`
    /// allocates nothing.
    pub fn with_value(count: usize, value: T) -> Result<Self, VecError> {
        let capacity = growth::capacity_for(count)?;
        Ok(Self {
            buf: Buffer::filled(capacity, count, &value)?,
            len: count,
        })
    }

    /// Create a container holding clones of `items`, with the narrowing
    /// capacity rule of a copy.
    pub fn from_slice(items: &[T]) -> Result<Self, VecError> {
        let capacity = growth::capacity_for(items.len())?;
        Ok(Self {
            buf: Buffer::copied(capacity, items)?,
            len: items.len(),
        })
    }

    /// Fallible copy. The copy never shares storage with `self` and its
    /// capacity is recomputed from `self.len()`.
    pub fn try_clone(&self) -> Result<Self, VecError> {
        Self::from_slice(self.as_slice())
    }

    /// Replace the contents with a copy of `source` (copy-and-swap).
    ///
    /// The copy is built before `self` is touched, so on error `self` is
    /// unchanged. The previous buffer is dropped on success.
    pub fn assign(&mut self, source: &Self) -> Result<(), VecError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Insert `count` clones of `value` before position `pos`.
    ///
    /// # Errors
    ///
    /// [`VecError::IndexOutOfRange`] if `pos > len`, or an allocation
    /// error if the buffer had to grow to `len + count`.
    pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> Result<(), VecError> {
        self.check_position(pos)?;
        let required = growth::required_len(self.len, count)?;
        if count == 0 {
            return Ok(());
        }
        self.grow_for(required)?;

        let len = self.len;
        let slots = self.buf.slots_mut();
        slots[len..required].fill(value);
        slots[pos..required].rotate_right(count);
        self.len = required;
        Ok(())
    }

    /// Resize to `new_len`, filling new slots with clones of `value`.
    ///
    /// Shrinking drops the tail and keeps the capacity.
    pub fn resize_with_value(&mut self, new_len: usize, value: T) -> Result<(), VecError> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.grow_for(new_len)?;
        let len = self.len;
        self.buf.slots_mut()[len..new_len].fill(value);
        self.len = new_len;
        Ok(())
    }
}

impl<T> Default for Pow2Vec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for Pow2Vec<T> {
    /// Narrowing copy: capacity is the smallest power of two holding
    /// `self.len()`.
    ///
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated; use
    /// [`try_clone`](Pow2Vec::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => copy_failed(err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign(source) {
            copy_failed(err);
        }
    }
}

// Kept out of line so the panic path stays out of `clone`.
#[cold]
#[inline(never)]
fn copy_failed(err: VecError) -> ! {
    panic!("failed to copy container: {err}");
}

impl<T> Index<usize> for Pow2Vec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Pow2Vec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Pow2Vec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
