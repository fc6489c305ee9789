/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

//! Bounded blocking channel.
//! The channel is a ring buffer of fixed capacity, guarded by a single lock.
//! Threads wait on two condition variables, one for items becoming readable, one for slots becoming writable.

mod ring;

use alloc::vec::Vec;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crossbeam_utils::CachePadded;
use ring::Ring;

use crate::errors::{InitError, RecvError, SendError, TryRecvError, TrySendError};

/// The state protected by the lock
#[derive(Debug)]
struct State<T> {
    /// The buffered items
    ring: Ring<T>,
    /// Whether the channel is closed, never reverts to `false`
    closed: bool,
}

/// A bounded, multi-producer, multi-consumer channel.
///
/// Items are delivered in a single FIFO order, as serialized by the lock.
/// Once closed, the channel rejects all sends but receivers still drain the buffered items.
///
/// The channel is usually shared between threads behind an `Arc`,
/// or through the handles created by [`crate::channels::channel_mpmc`].
#[derive(Debug)]
pub struct Channel<T> {
    /// The state, only accessed while holding the lock
    state: CachePadded<Mutex<State<T>>>,
    /// Signaled when an item became available for reading
    readable: Condvar,
    /// Signaled when a slot became available for writing
    writable: Condvar,
    /// The capacity, immutable
    capacity: usize,
}

impl<T> Channel<T> {
    /// Creates a channel able to buffer `capacity` items
    ///
    /// # Errors
    ///
    /// Returns `InitError::InvalidCapacity` when `capacity` is zero
    /// and `InitError::AllocationFailure` when the slots cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, InitError> {
        let ring = Ring::with_capacity(capacity)?;
        log::trace!("channel created with capacity {capacity}");
        Ok(Self {
            state: CachePadded::new(Mutex::new(State { ring, closed: false })),
            readable: Condvar::new(),
            writable: Condvar::new(),
            capacity,
        })
    }

    /// Acquires the lock.
    /// No code panics while holding the lock, so the state behind a poisoned lock is still consistent.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Gets the capacity of the channel
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gets the number of items in the channel
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().ring.len()
    }

    /// Gets whether the channel is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().ring.is_empty()
    }

    /// Gets whether the channel is full
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.lock().ring.is_full()
    }

    /// Gets whether the channel is closed.
    /// This is a snapshot, the channel may be closed right after `false` is returned.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Closes the channel and wakes up all waiting senders and receivers.
    /// Subsequent sends fail, receivers get the remaining items before failing.
    ///
    /// Returns `true` if this call closed the channel, `false` if it was already closed.
    pub fn close(&self) -> bool {
        let mut state = self.lock();
        if state.closed {
            return false;
        }
        state.closed = true;
        log::trace!("channel closed with {} items left", state.ring.len());
        // all waiters, on both sides, must observe the close
        self.readable.notify_all();
        self.writable.notify_all();
        true
    }

    /// Destroys the channel and gives back the items that were not received, in order
    #[must_use]
    pub fn destroy(self) -> Vec<T> {
        let mut state = self.state.into_inner().into_inner().unwrap_or_else(PoisonError::into_inner);
        state.ring.drain()
    }

    /// Enqueues an item while holding the lock and wakes up one receiver
    #[inline]
    fn enqueue(&self, state: &mut State<T>, item: T) {
        state.ring.push(item);
        self.readable.notify_one();
    }

    /// Dequeues an item while holding the lock and wakes up one sender
    #[inline]
    fn dequeue(&self, state: &mut State<T>) -> Option<T> {
        let item = state.ring.pop()?;
        self.writable.notify_one();
        Some(item)
    }

    /// Sends an item, blocking while the channel is full
    ///
    /// # Errors
    ///
    /// Returns the item back when the channel is closed, before or while waiting.
    /// A closed channel rejects the item even if there is space left.
    pub fn send(&self, item: T) -> Result<(), SendError<T>> {
        let state = self.lock();
        let mut state = self
            .writable
            .wait_while(state, |state| state.ring.is_full() && !state.closed)
            .unwrap_or_else(PoisonError::into_inner);
        if state.closed {
            return Err(SendError(item));
        }
        self.enqueue(&mut state, item);
        Ok(())
    }

    /// Receives an item, blocking while the channel is empty and open.
    /// Buffered items are still received after the channel is closed.
    ///
    /// # Errors
    ///
    /// Returns an error when the channel is both empty and closed
    pub fn recv(&self) -> Result<T, RecvError> {
        let state = self.lock();
        let mut state = self
            .readable
            .wait_while(state, |state| state.ring.is_empty() && !state.closed)
            .unwrap_or_else(PoisonError::into_inner);
        // the wait only ends on an empty ring when closed
        self.dequeue(&mut state).ok_or(RecvError)
    }

    /// Attempts to send an item without blocking
    ///
    /// # Errors
    ///
    /// Returns the item back when the channel is closed or full.
    /// Closed takes precedence when both hold.
    pub fn try_send(&self, item: T) -> Result<(), TrySendError<T>> {
        let mut state = self.lock();
        if state.closed {
            return Err(TrySendError::Closed(item));
        }
        if state.ring.is_full() {
            return Err(TrySendError::Full(item));
        }
        self.enqueue(&mut state, item);
        Ok(())
    }

    /// Attempts to receive an item without blocking.
    /// Buffered items are still received after the channel is closed.
    ///
    /// # Errors
    ///
    /// Returns `TryRecvError::Empty` when there is no item yet,
    /// and `TryRecvError::Closed` when there is no item and the channel is closed.
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        let mut state = self.lock();
        match self.dequeue(&mut state) {
            Some(item) => Ok(item),
            None if state.closed => Err(TryRecvError::Closed),
            None => Err(TryRecvError::Empty),
        }
    }
}
