/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

use core::time::Duration;

mod channel;

/// The size of the queue to use
pub const SCALE_QUEUE_SIZE: usize = 32;

/// The number of messages
pub const SCALE_MSG_COUNT: usize = 100_000;

/// The number of producers in a multiple producers test
pub const SCALE_PRODUCERS: usize = 5;

/// The number of consumers in a multiple consumers test
pub const SCALE_CONSUMERS: usize = 5;

/// How long to wait for a thread that is expected to make progress
pub const PROGRESS_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to wait before concluding that a thread is blocked
pub const BLOCKED_DELAY: Duration = Duration::from_millis(100);
