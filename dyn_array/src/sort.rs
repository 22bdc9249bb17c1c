//! Lomuto quicksort over the occupied prefix of the slot storage.
//!
//! Every comparison goes through `partial_cmp`; the first pair that has no
//! ordering aborts the sort with [`ArrayError::TypeMismatch`]. Segments of
//! length one or less are never compared, so they can never fail.

use crate::ArrayError;
use std::cmp::Ordering;

/// Sorts `slots[0..len]` ascending in place.
///
/// All slots in the range must be occupied.
pub(crate) fn quicksort<T: PartialOrd>(
    slots: &mut [Option<T>],
    len: usize,
) -> Result<(), ArrayError> {
    if len < 2 {
        return Ok(());
    }
    sort_range(slots, 0, len - 1)
}

/// Sorts `low..=high`.
///
/// Only the smaller side of each partition is sorted recursively; the larger
/// side is handled by the loop, so the stack depth stays `O(log n)` even for
/// already sorted or all-equal input.
fn sort_range<T: PartialOrd>(
    slots: &mut [Option<T>],
    mut low: usize,
    mut high: usize,
) -> Result<(), ArrayError> {
    while low < high {
        let pivot = partition(slots, low, high)?;

        if pivot - low < high - pivot {
            if pivot > low {
                sort_range(slots, low, pivot - 1)?;
            }
            low = pivot + 1;
        } else {
            sort_range(slots, pivot + 1, high)?;
            // pivot > low here, otherwise the left side would be the smaller one.
            high = pivot - 1;
        }
    }
    Ok(())
}

/// Places `slots[high]` at its sorted position within `low..=high` and
/// returns that position.
fn partition<T: PartialOrd>(
    slots: &mut [Option<T>],
    low: usize,
    high: usize,
) -> Result<usize, ArrayError> {
    // `boundary` is one past the last element known to be smaller than the pivot.
    let mut boundary = low;

    for j in low..high {
        if is_less(&slots[j], &slots[high])? {
            slots.swap(boundary, j);
            boundary += 1;
        }
    }

    slots.swap(boundary, high);
    Ok(boundary)
}

fn is_less<T: PartialOrd>(elem: &Option<T>, pivot: &Option<T>) -> Result<bool, ArrayError> {
    match (elem, pivot) {
        (Some(elem), Some(pivot)) => match pivot.partial_cmp(elem) {
            Some(Ordering::Greater) => Ok(true),
            Some(_) => Ok(false),
            None => Err(ArrayError::TypeMismatch),
        },
        // Empty slots are never part of the sorted range.
        _ => Err(ArrayError::TypeMismatch),
    }
}
