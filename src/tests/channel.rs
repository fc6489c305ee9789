/*******************************************************************************
 * Copyright (c) 2024 Cénotélie Opérations SAS (cenotelie.fr)
 ******************************************************************************/

use alloc::sync::Arc;

use crate::channel::Channel;
use crate::errors::{RecvError, SendError, TryRecvError, TrySendError};
use crate::tests::{BLOCKED_DELAY, PROGRESS_TIMEOUT, SCALE_CONSUMERS, SCALE_MSG_COUNT, SCALE_PRODUCERS, SCALE_QUEUE_SIZE};

#[test]
fn fifo_single_producer_single_consumer() {
    let channel = Arc::new(Channel::<usize>::new(SCALE_QUEUE_SIZE).unwrap());

    let producer = std::thread::spawn({
        let channel = channel.clone();
        move || {
            for i in 0..SCALE_MSG_COUNT {
                channel.send(i).unwrap();
            }
        }
    });

    for i in 0..SCALE_MSG_COUNT {
        assert_eq!(channel.recv(), Ok(i));
    }
    producer.join().unwrap();
    assert!(channel.is_empty());
}

#[test]
fn send_blocks_while_full() {
    let channel = Arc::new(Channel::new(2).unwrap());
    channel.send(0).unwrap();
    channel.send(1).unwrap();

    let (done_tx, done_rx) = crossbeam::channel::unbounded();
    let sender = std::thread::spawn({
        let channel = channel.clone();
        move || {
            let result = channel.send(2);
            done_tx.send(result).unwrap();
        }
    });

    std::thread::sleep(BLOCKED_DELAY);
    assert!(done_rx.try_recv().is_err(), "send returned on a full channel");
    assert_eq!(channel.len(), 2);

    assert_eq!(channel.recv(), Ok(0));
    assert_eq!(done_rx.recv_timeout(PROGRESS_TIMEOUT).unwrap(), Ok(()));
    sender.join().unwrap();
    assert_eq!(channel.len(), 2);
    assert_eq!(channel.recv(), Ok(1));
    assert_eq!(channel.recv(), Ok(2));
}

#[test]
fn recv_blocks_while_empty() {
    let channel = Arc::new(Channel::<usize>::new(2).unwrap());

    let (done_tx, done_rx) = crossbeam::channel::unbounded();
    let receiver = std::thread::spawn({
        let channel = channel.clone();
        move || {
            let result = channel.recv();
            done_tx.send(result).unwrap();
        }
    });

    std::thread::sleep(BLOCKED_DELAY);
    assert!(done_rx.try_recv().is_err(), "recv returned on an empty channel");

    channel.send(7).unwrap();
    assert_eq!(done_rx.recv_timeout(PROGRESS_TIMEOUT).unwrap(), Ok(7));
    receiver.join().unwrap();
}

#[test]
fn close_drains_first() {
    let channel = Channel::new(2).unwrap();
    channel.send("first").unwrap();
    channel.send("second").unwrap();
    assert!(channel.close());

    assert_eq!(channel.recv(), Ok("first"));
    assert_eq!(channel.try_recv(), Ok("second"));
    assert_eq!(channel.recv(), Err(RecvError));
    assert_eq!(channel.try_recv(), Err(TryRecvError::Closed));
}

#[test]
fn send_after_close_rejected() {
    let channel = Channel::new(4).unwrap();
    channel.send(1).unwrap();
    channel.close();

    assert_eq!(channel.send(2), Err(SendError(2)));
    assert_eq!(channel.try_send(3), Err(TrySendError::Closed(3)));
    assert_eq!(channel.len(), 1);
    assert!(!channel.is_full());
}

#[test]
fn close_wakes_all_blocked_senders() {
    let channel = Arc::new(Channel::new(1).unwrap());
    channel.send(0).unwrap();

    let (done_tx, done_rx) = crossbeam::channel::unbounded();
    let senders = (0..SCALE_PRODUCERS)
        .map(|p| {
            let channel = channel.clone();
            let done_tx = done_tx.clone();
            std::thread::spawn(move || {
                let result = channel.send(p + 1);
                done_tx.send(result).unwrap();
            })
        })
        .collect::<Vec<_>>();

    std::thread::sleep(BLOCKED_DELAY);
    assert!(done_rx.try_recv().is_err(), "send returned on a full channel");

    assert!(channel.close());
    for _ in 0..SCALE_PRODUCERS {
        let result = done_rx.recv_timeout(PROGRESS_TIMEOUT).expect("a sender is still blocked");
        assert!(matches!(result, Err(SendError(_))));
    }
    for sender in senders {
        sender.join().unwrap();
    }
    let channel = Arc::try_unwrap(channel).unwrap();
    assert_eq!(channel.destroy(), vec![0]);
}

#[test]
fn close_wakes_all_blocked_receivers() {
    let channel = Arc::new(Channel::<usize>::new(4).unwrap());

    let (done_tx, done_rx) = crossbeam::channel::unbounded();
    let receivers = (0..SCALE_CONSUMERS)
        .map(|_| {
            let channel = channel.clone();
            let done_tx = done_tx.clone();
            std::thread::spawn(move || {
                let result = channel.recv();
                done_tx.send(result).unwrap();
            })
        })
        .collect::<Vec<_>>();

    std::thread::sleep(BLOCKED_DELAY);
    assert!(done_rx.try_recv().is_err(), "recv returned on an empty channel");

    assert!(channel.close());
    for _ in 0..SCALE_CONSUMERS {
        let result = done_rx.recv_timeout(PROGRESS_TIMEOUT).expect("a receiver is still blocked");
        assert_eq!(result, Err(RecvError));
    }
    for receiver in receivers {
        receiver.join().unwrap();
    }
}

#[test]
fn non_blocking_never_blocks() {
    let channel = Arc::new(Channel::new(1).unwrap());

    let (done_tx, done_rx) = crossbeam::channel::unbounded();
    let worker = std::thread::spawn({
        let channel = channel.clone();
        move || {
            done_tx.send(channel.try_recv() == Err(TryRecvError::Empty)).unwrap();
            channel.send(1).unwrap();
            done_tx.send(channel.try_send(2) == Err(TrySendError::Full(2))).unwrap();
            channel.close();
            assert_eq!(channel.try_recv(), Ok(1));
            done_tx.send(channel.try_recv() == Err(TryRecvError::Closed)).unwrap();
        }
    });

    for _ in 0..3 {
        let failed_fast = done_rx.recv_timeout(PROGRESS_TIMEOUT).expect("a non-blocking call blocked");
        assert!(failed_fast);
    }
    worker.join().unwrap();
}

#[test]
fn capacity_one_ping_pong() {
    let channel = Arc::new(Channel::new(1).unwrap());

    let echo = std::thread::spawn({
        let channel = channel.clone();
        move || {
            let mut received = Vec::new();
            while let Ok(item) = channel.recv() {
                assert!(channel.len() <= 1);
                received.push(item);
            }
            received
        }
    });

    for i in 0..1_000 {
        channel.send(i).unwrap();
        assert!(channel.len() <= channel.capacity());
    }
    channel.close();
    assert_eq!(echo.join().unwrap(), (0..1_000).collect::<Vec<_>>());
}
