//! A growable array with explicit, observable growth.
//!
//! [`DynamicArray`] keeps its elements in a boxed slice of slots. Slots past
//! the logical length are empty. Capacity grows by half (never below
//! [`DEFAULT_CAPACITY`]) and never shrinks.

use std::fmt;

mod error;
mod sort;

pub use error::{ArrayError, ErrorKind};

/// Capacity allocated by the first growth of an empty array.
pub const DEFAULT_CAPACITY: usize = 10;

/// Growable array of `T`.
///
/// Invariant: `slots[..len]` are all `Some`, `slots[len..]` are all `None`.
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
            len: 0,
        }
    }

    /// Creates an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }

        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Signed variant of [`with_capacity`](Self::with_capacity) for callers
    /// that receive the capacity from untrusted input.
    pub fn try_with_capacity(capacity: i64) -> Result<Self, ArrayError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ArrayError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `elem`. Always returns `true`.
    pub fn add(&mut self, elem: T) -> bool {
        self.reserve_slot();
        self.slots[self.len] = Some(elem);
        self.len += 1;
        true
    }

    /// Inserts `elem` at `index`, shifting later elements up by one.
    ///
    /// `index == size()` appends.
    pub fn add_at(&mut self, index: usize, elem: T) -> Result<bool, ArrayError> {
        if index > self.len {
            return Err(ArrayError::index(index, self.len));
        }

        self.reserve_slot();
        // Rotating the empty slot at `len` down to `index` moves
        // `index..len` up by one, highest element first.
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(elem);
        self.len += 1;
        Ok(true)
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        self.slots[index]
            .as_ref()
            .ok_or_else(|| ArrayError::index(index, self.len))
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        let elem = self.slots[index]
            .take()
            .ok_or_else(|| ArrayError::index(index, self.len))?;
        self.close_gap(index);
        Ok(elem)
    }

    /// Removes the first element equal to `elem`.
    ///
    /// `None` never matches anything. Returns whether an element was removed.
    pub fn remove_value(&mut self, elem: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let Some(elem) = elem else {
            return false;
        };

        let found = self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_ref() == Some(elem));

        match found {
            Some(index) => {
                self.slots[index] = None;
                self.close_gap(index);
                true
            }
            None => false,
        }
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Sorts the elements in ascending order with an unstable quicksort.
    ///
    /// Fails with [`ArrayError::TypeMismatch`] as soon as two elements turn
    /// out to be unordered; the elements may then be partially reordered.
    pub fn quicksort(&mut self) -> Result<(), ArrayError>
    where
        T: PartialOrd,
    {
        sort::quicksort(&mut self.slots, self.len)
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::index(index, self.len));
        }
        Ok(())
    }

    /// Growth fires while one free slot still remains: `len + 1 >= capacity`.
    fn reserve_slot(&mut self) {
        if self.len + 1 >= self.slots.len() {
            self.grow();
        }
    }

    fn grow(&mut self) {
        let old_cap = self.slots.len();
        let new_cap = if old_cap == 0 {
            DEFAULT_CAPACITY
        } else {
            (old_cap + old_cap / 2).max(DEFAULT_CAPACITY)
        };

        let mut slots = empty_slots(new_cap);
        for (new, old) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }

    /// Moves the empty slot at `index` to the end of the occupied prefix.
    fn close_gap(&mut self, index: usize) {
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
    }

    fn occupied(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.occupied()).finish()
    }
}

/// Elements separated by single spaces; empty arrays render as `""`.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.occupied().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", elem)?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

#[cfg(test)]
mod tests;
