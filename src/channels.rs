/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

//! Sender and receiver handles over a shared channel

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

use crate::channel::Channel;
use crate::errors::{InitError, RecvError, SendError, TryRecvError, TrySendError};

/// Common traits for all kind of sender
pub trait Sender: Sized {
    type Item;

    /// Gets whether the channel is closed
    #[must_use]
    fn is_closed(&self) -> bool;

    /// Gets the capacity of the channel
    #[must_use]
    fn capacity(&self) -> usize;

    /// Gets the number of items in the channel
    #[must_use]
    fn len(&self) -> usize;

    /// Gets whether the channel is empty
    #[must_use]
    fn is_empty(&self) -> bool;

    /// Gets whether the channel is full
    #[must_use]
    fn is_full(&self) -> bool;

    /// Attempts to send a single item on to the channel
    ///
    /// # Errors
    ///
    /// Returns an error when the channel is full or closed
    fn try_send(&self, item: Self::Item) -> Result<(), TrySendError<Self::Item>>;

    /// Blocks while sending the next item
    ///
    /// # Errors
    ///
    /// Returns an error when the channel is closed
    fn send(&self, item: Self::Item) -> Result<(), SendError<Self::Item>>;

    /// Closes the channel for all senders and receivers
    fn close(&self) -> bool;

    /// Disconnects this sender by dropping it
    fn disconnect(self) {}
}

/// Common trait for all kind of receiver
pub trait Receiver: Sized {
    type Item;

    /// Gets whether the channel is closed
    #[must_use]
    fn is_closed(&self) -> bool;

    /// Gets the capacity of the channel
    #[must_use]
    fn capacity(&self) -> usize;

    /// Gets the number of items in the channel
    #[must_use]
    fn len(&self) -> usize;

    /// Gets whether the channel is empty
    #[must_use]
    fn is_empty(&self) -> bool;

    /// Gets whether the channel is full
    #[must_use]
    fn is_full(&self) -> bool;

    /// Attempts to receive a single item from to the channel
    /// An item will be returned for as long as there are items in the channel, even if it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error when the channel is empty, or empty and closed
    fn try_recv(&self) -> Result<Self::Item, TryRecvError>;

    /// Blocks while waiting for the next item
    /// An item will be returned for as long as there are items in the channel, even if it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error when the channel is empty and closed
    fn recv(&self) -> Result<Self::Item, RecvError>;

    /// Closes the channel for all senders and receivers
    fn close(&self) -> bool;

    /// Disconnects this receiver by dropping it
    fn disconnect(self) {}
}

/// The channel shared by all handles
#[derive(Debug)]
struct Shared<T> {
    channel: Channel<T>,
    /// The number of connected senders
    senders: CachePadded<AtomicUsize>,
    /// The number of connected receivers
    receivers: CachePadded<AtomicUsize>,
}

/// A sender for a multiple producers, multiple consumers channel.
/// The channel is closed when the last sender is dropped.
#[derive(Debug)]
pub struct MpmcSender<T> {
    shared: Arc<Shared<T>>,
}

/// A receiver for a multiple producers, multiple consumers channel.
/// Each item is received by exactly one receiver.
/// The channel is closed when the last receiver is dropped.
#[derive(Debug)]
pub struct MpmcReceiver<T> {
    shared: Arc<Shared<T>>,
}

/// Creates a multiple producers, multiple consumers channel.
/// More senders and receivers are obtained by cloning the returned ones.
///
/// # Errors
///
/// Returns an error when `capacity` is zero or the buffer cannot be allocated
pub fn channel_mpmc<T>(capacity: usize) -> Result<(MpmcSender<T>, MpmcReceiver<T>), InitError> {
    let shared = Arc::new(Shared {
        channel: Channel::new(capacity)?,
        senders: CachePadded::new(AtomicUsize::new(1)),
        receivers: CachePadded::new(AtomicUsize::new(1)),
    });
    Ok((
        MpmcSender { shared: shared.clone() },
        MpmcReceiver { shared },
    ))
}

impl<T> Clone for MpmcSender<T> {
    fn clone(&self) -> Self {
        self.shared.senders.fetch_add(1, Ordering::Relaxed);
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> Drop for MpmcSender<T> {
    fn drop(&mut self) {
        if self.shared.senders.fetch_sub(1, Ordering::AcqRel) == 1 && self.shared.channel.close() {
            log::debug!("channel closed: last sender disconnected");
        }
    }
}

impl<T> Clone for MpmcReceiver<T> {
    fn clone(&self) -> Self {
        self.shared.receivers.fetch_add(1, Ordering::Relaxed);
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> Drop for MpmcReceiver<T> {
    fn drop(&mut self) {
        if self.shared.receivers.fetch_sub(1, Ordering::AcqRel) == 1 && self.shared.channel.close() {
            log::debug!("channel closed: last receiver disconnected");
        }
    }
}

impl<T> MpmcSender<T> {
    /// Gets the number of connected senders
    #[must_use]
    pub fn get_connected_senders(&self) -> usize {
        self.shared.senders.load(Ordering::Acquire)
    }

    /// Gets the number of connected receivers
    #[must_use]
    pub fn get_connected_receivers(&self) -> usize {
        self.shared.receivers.load(Ordering::Acquire)
    }
}

impl<T> Sender for MpmcSender<T> {
    type Item = T;

    #[inline]
    fn is_closed(&self) -> bool {
        self.shared.channel.is_closed()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.shared.channel.capacity()
    }

    #[inline]
    fn len(&self) -> usize {
        self.shared.channel.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.shared.channel.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.shared.channel.is_full()
    }

    #[inline]
    fn try_send(&self, item: T) -> Result<(), TrySendError<T>> {
        self.shared.channel.try_send(item)
    }

    #[inline]
    fn send(&self, item: T) -> Result<(), SendError<T>> {
        self.shared.channel.send(item)
    }

    #[inline]
    fn close(&self) -> bool {
        self.shared.channel.close()
    }
}

impl<T> MpmcReceiver<T> {
    /// Gets the number of connected senders
    #[must_use]
    pub fn get_connected_senders(&self) -> usize {
        self.shared.senders.load(Ordering::Acquire)
    }

    /// Gets the number of connected receivers
    #[must_use]
    pub fn get_connected_receivers(&self) -> usize {
        self.shared.receivers.load(Ordering::Acquire)
    }

    /// Gets a blocking iterator over the received items.
    /// The iterator ends when the channel is closed and drained.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { receiver: self }
    }

    /// Gets an iterator over the items that can be received without blocking
    #[must_use]
    pub fn try_iter(&self) -> TryIter<'_, T> {
        TryIter { receiver: self }
    }
}

impl<T> Receiver for MpmcReceiver<T> {
    type Item = T;

    #[inline]
    fn is_closed(&self) -> bool {
        self.shared.channel.is_closed()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.shared.channel.capacity()
    }

    #[inline]
    fn len(&self) -> usize {
        self.shared.channel.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.shared.channel.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.shared.channel.is_full()
    }

    #[inline]
    fn try_recv(&self) -> Result<T, TryRecvError> {
        self.shared.channel.try_recv()
    }

    #[inline]
    fn recv(&self) -> Result<T, RecvError> {
        self.shared.channel.recv()
    }

    #[inline]
    fn close(&self) -> bool {
        self.shared.channel.close()
    }
}

/// Blocking iterator over the items of a receiver
#[derive(Debug)]
pub struct Iter<'a, T> {
    receiver: &'a MpmcReceiver<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.recv().ok()
    }
}

/// Non-blocking iterator over the items of a receiver
#[derive(Debug)]
pub struct TryIter<'a, T> {
    receiver: &'a MpmcReceiver<T>,
}

impl<T> Iterator for TryIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }
}

impl<'a, T> IntoIterator for &'a MpmcReceiver<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
