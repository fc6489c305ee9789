/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

//! Definition of errors for this crate

use core::fmt::{Debug, Display};

/// Error when creating a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The requested capacity is zero
    InvalidCapacity,
    /// The storage for the requested number of slots could not be allocated
    AllocationFailure(usize),
}

impl Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCapacity => write!(f, "failed to create channel: capacity must be at least 1"),
            Self::AllocationFailure(capacity) => {
                write!(f, "failed to create channel: cannot allocate {capacity} slots")
            }
        }
    }
}

impl core::error::Error for InitError {}

/// Error when trying to send an item without blocking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrySendError<T> {
    /// The message could not be sent because the channel is full.
    Full(T),
    /// The message could not be sent because the channel is closed.
    Closed(T),
}

impl<T> Display for TrySendError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Full(_) => write!(f, "failed to send: the channel is full"),
            Self::Closed(_) => write!(f, "failed to send: the channel is closed"),
        }
    }
}

impl<T: Debug> core::error::Error for TrySendError<T> {}

impl<T> TrySendError<T> {
    /// Gets back the wrapped message
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Full(item) | Self::Closed(item) => item,
        }
    }

    /// Tests whether the cause of the error is the channel being full
    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    /// Tests whether the cause of the error is the channel being closed
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }
}

/// The message could not be sent because the channel is closed
///
/// The error contains the message so it can be recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendError<T>(pub T);

impl<T> Display for SendError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "failed to send: the channel is closed")
    }
}

impl<T: Debug> core::error::Error for SendError<T> {}

impl<T> SendError<T> {
    /// Gets back the wrapped message
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<TrySendError<T>> for SendError<T> {
    fn from(value: TrySendError<T>) -> Self {
        Self(value.into_inner())
    }
}

/// Error when trying to receive an item without blocking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// A message could not be received because the channel is empty
    Empty,
    /// The message could not be received because the channel is empty and closed
    Closed,
}

impl Display for TryRecvError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "failed to receive: the channel is empty"),
            Self::Closed => write!(f, "failed to receive: the channel is closed"),
        }
    }
}

impl core::error::Error for TryRecvError {}

impl TryRecvError {
    /// Tests whether the cause of the error is the channel being empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Tests whether the cause of the error is the channel being closed
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// A message could not be received because the channel is empty and closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecvError;

impl Display for RecvError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "failed to receive: the channel is closed")
    }
}

impl core::error::Error for RecvError {}

impl From<RecvError> for TryRecvError {
    fn from(_: RecvError) -> Self {
        Self::Closed
    }
}
