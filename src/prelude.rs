/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

//! Prelude for channels

pub use crate::channel::Channel;
pub use crate::channels::{Receiver, Sender};
pub use crate::errors::{RecvError, SendError, TryRecvError, TrySendError};
