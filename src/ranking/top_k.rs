//! Bounded Top-K selection.
//!
//! Keeps the `k` best items of a stream without sorting the whole stream.
//! Insertion costs O(k), which beats a heap for the small `k` used here.

use std::cmp::Ordering;

use crate::error::TopKError;

/// Bounded, always-sorted selection of the `k` highest-ranked items.
///
/// Rank is given by `order`: an item comparing [`Ordering::Less`] than another
/// ranks ahead of it, the same convention as `slice::sort_by`. Equal-ranked
/// items keep insertion order, so the snapshot always equals the first `k`
/// items of a stable sort of everything added so far.
pub struct TopK<T, F> {
    capacity: usize,
    order: F,
    items: Vec<T>,
}

impl<T, F> TopK<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(capacity: usize, order: F) -> Result<Self, TopKError> {
        if capacity == 0 {
            return Err(TopKError::ZeroCapacity);
        }

        Ok(Self {
            capacity,
            order,
            items: Vec::with_capacity(capacity + 1),
        })
    }

    /// Offer an item to the selector
    pub fn add(&mut self, item: T) {
        // Full and not strictly ahead of the current last: nothing changes
        if self.is_full() {
            if let Some(last) = self.items.last() {
                if (self.order)(&item, last) != Ordering::Less {
                    return;
                }
            }
        }

        // Insert before the first item the newcomer strictly outranks
        let position = self
            .items
            .iter()
            .position(|existing| (self.order)(&item, existing) == Ordering::Less)
            .unwrap_or(self.items.len());

        self.items.insert(position, item);
        self.items.truncate(self.capacity);
    }

    /// Current selection, highest rank first
    pub fn snapshot(&self) -> &[T] {
        &self.items
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

impl<T, F> Extend<T> for TopK<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
