/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

//! The ring buffer backing a channel

use alloc::vec::Vec;

use crate::errors::InitError;

/// A fixed-size circular buffer of slots.
/// The ring has no synchronization of its own, the channel guards it with its lock.
#[derive(Debug)]
pub(crate) struct Ring<T> {
    /// The slots, each holding zero or one item
    slots: Box<[Option<T>]>,
    /// Index of the next slot to be read
    head: usize,
    /// Index of the next slot to be written
    tail: usize,
    /// Number of occupied slots.
    /// `head == tail` both when empty and when full, so this is the ground truth.
    count: usize,
}

impl<T> Ring<T> {
    /// Allocates a ring with `capacity` empty slots
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, InitError> {
        if capacity == 0 {
            return Err(InitError::InvalidCapacity);
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| InitError::AllocationFailure(capacity))?;
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Gets the capacity of the ring
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Gets the number of items in the ring
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Writes an item at the tail.
    /// The caller must have checked that the ring is not full.
    pub(crate) fn push(&mut self, item: T) {
        debug_assert!(!self.is_full());
        debug_assert!(self.slots[self.tail].is_none());
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
    }

    /// Takes the item at the head, if any
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let item = self.slots[self.head].take();
        debug_assert!(item.is_some());
        self.head = (self.head + 1) % self.slots.len();
        self.count -= 1;
        item
    }

    /// Takes all remaining items, in order
    pub(crate) fn drain(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.count);
        while let Some(item) = self.pop() {
            items.push(item);
        }
        items
    }
}
