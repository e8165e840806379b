//! Capacity growth and shrink policy.
//!
//! Capacity is always `0` or a power of two. Whenever the length must
//! exceed the current capacity, the new capacity is the smallest power of
//! two that fits the *required* length, computed directly rather than by
//! doubling the old capacity step by step. A bulk insert that jumps from
//! 32 to 52 elements therefore lands on 64 in a single reallocation.
//!
//! Capacity only moves downwards through `clear` (to zero) and
//! `shrink_to_fit` (to [`capacity_for`] of the current length).

use crate::error::VecError;

/// Smallest valid capacity that holds `len` elements.
///
/// Returns `0` for `0`, otherwise the smallest power of two `>= len`.
///
/// # Errors
///
/// [`VecError::CapacityOverflow`] if that power of two does not fit in
/// `usize`.
pub fn capacity_for(len: usize) -> Result<usize, VecError> {
    if len == 0 {
        return Ok(0);
    }
    len.checked_next_power_of_two()
        .ok_or(VecError::CapacityOverflow { requested: len })
}

/// Whether `capacity` satisfies the policy (zero or a power of two).
pub fn is_valid_capacity(capacity: usize) -> bool {
    capacity == 0 || capacity.is_power_of_two()
}

/// Length after adding `additional` elements to `len`.
///
/// # Errors
///
/// [`VecError::CapacityOverflow`] if the sum overflows `usize`.
pub fn required_len(len: usize, additional: usize) -> Result<usize, VecError> {
    len.checked_add(additional)
        .ok_or(VecError::CapacityOverflow { requested: usize::MAX })
}

/// New capacity needed to hold `required` elements, or `None` if the
/// current capacity already suffices.
pub fn grow_target(capacity: usize, required: usize) -> Result<Option<usize>, VecError> {
    if required <= capacity {
        return Ok(None);
    }
    capacity_for(required).map(Some)
}

/// Capacity `shrink_to_fit` settles on, or `None` if the current capacity
/// is already minimal for `len`.
pub fn shrink_target(capacity: usize, len: usize) -> Result<Option<usize>, VecError> {
    let target = capacity_for(len)?;
    if target == capacity {
        Ok(None)
    } else {
        Ok(Some(target))
    }
}
