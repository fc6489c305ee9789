/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

//! # Boundring
//!
//! Bounded, multi-producer, multi-consumer blocking channel.
//! Items are stored in a fixed-size ring buffer guarded by a lock,
//! with senders waiting for free slots and receivers waiting for items on two separate condition variables.
//! Each item is received by exactly one receiver, in the order in which the items were sent.
//!
//! A channel can be closed by any party.
//! After that, all sends fail and all waiting threads are woken up,
//! but receivers still get the items that were buffered before failing.
//!
//!
//! ## Example
//!
//! Share a channel between 4 producers and 2 consumers.
//! ```
//! use boundring::channels::channel_mpmc;
//! use boundring::prelude::*;
//!
//! let (sender, receiver) = channel_mpmc::<usize>(16).unwrap();
//!
//! let producers = (0..4)
//!     .map(|p| {
//!         let sender = sender.clone();
//!         std::thread::spawn(move || {
//!             for i in 0..100 {
//!                 sender.send(p * 100 + i).unwrap();
//!             }
//!         })
//!     })
//!     .collect::<Vec<_>>();
//! drop(sender); // the channel is closed when the last sender is gone
//!
//! let consumers = (0..2)
//!     .map(|_| {
//!         let receiver = receiver.clone();
//!         std::thread::spawn(move || receiver.iter().count())
//!     })
//!     .collect::<Vec<_>>();
//!
//! for producer in producers {
//!     producer.join().unwrap();
//! }
//! let received: usize = consumers.into_iter().map(|c| c.join().unwrap()).sum();
//! assert_eq!(received, 400);
//! ```
//!
//! The [`channel::Channel`] can also be used directly, shared behind an `Arc`.
//! ```
//! use std::sync::Arc;
//! use boundring::channel::Channel;
//!
//! let channel = Arc::new(Channel::new(2).unwrap());
//! channel.send("a").unwrap();
//! channel.send("b").unwrap();
//! channel.close();
//! assert!(channel.send("c").is_err());
//! assert_eq!(channel.recv(), Ok("a"));
//! assert_eq!(channel.recv(), Ok("b"));
//! assert!(channel.recv().is_err());
//! ```
//!
//!
//! ## License
//!
//! Copyright 2024 Cénotélie Opérations SAS
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the “Software”), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
//!

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::module_name_repetitions)]

extern crate alloc;

pub mod channel;
pub mod channels;
pub mod errors;
pub mod prelude;

#[cfg(test)]
mod tests;
