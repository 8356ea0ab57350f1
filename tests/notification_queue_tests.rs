// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the notification queue and its background job

mod helpers;

use std::sync::Arc;

use helpers::RecordingSink;
use lendscan::{
    notification_channel, DispatchSummary, LendscanConfig, LendscanConfigBuilder,
    NotificationDispatcher, NotificationError, NotificationJob,
};

#[tokio::test]
async fn test_job_delivers_in_fifo_order_with_configured_text() {
    let sink = Arc::new(RecordingSink::new());
    let config = LendscanConfigBuilder::new()
        .notification_text("Position liquidated")
        .build();

    let (handle, task) = NotificationJob::spawn(sink.clone(), &config);
    for chat_id in [10, 20, 30] {
        handle.send_notification(chat_id).unwrap();
    }
    drop(handle);

    let summary = task.await.unwrap();

    assert_eq!(summary, DispatchSummary { delivered: 3, failed: 0 });
    assert_eq!(
        sink.sent(),
        vec![
            (10, "Position liquidated".to_string()),
            (20, "Position liquidated".to_string()),
            (30, "Position liquidated".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_default_text_is_test_message() {
    let sink = Arc::new(RecordingSink::new());

    let (handle, task) = NotificationJob::spawn(sink.clone(), &LendscanConfig::default());
    handle.send_notification(1).unwrap();
    drop(handle);
    task.await.unwrap();

    assert_eq!(sink.sent(), vec![(1, "Test message".to_string())]);
}

#[tokio::test]
async fn test_failed_delivery_does_not_stop_dispatcher() {
    let sink = Arc::new(RecordingSink::new().failing_for([2]));

    let (handle, task) = NotificationJob::spawn(sink.clone(), &LendscanConfig::default());
    for chat_id in [1, 2, 3] {
        handle.send_notification(chat_id).unwrap();
    }
    drop(handle);

    let summary = task.await.unwrap();

    assert_eq!(summary, DispatchSummary { delivered: 2, failed: 1 });
    assert_eq!(sink.chat_ids(), vec![1, 3]);
}

#[tokio::test]
async fn test_cloned_handles_feed_the_same_queue() {
    let sink = Arc::new(RecordingSink::new());

    let (handle, task) = NotificationJob::spawn(sink.clone(), &LendscanConfig::default());
    let producers: Vec<_> = (0..4)
        .map(|i| {
            let handle = handle.clone();
            tokio::spawn(async move { handle.send_notification(i) })
        })
        .collect();
    drop(handle);

    for producer in producers {
        producer.await.unwrap().unwrap();
    }
    let summary = task.await.unwrap();

    assert_eq!(summary.delivered, 4);
    let mut chat_ids = sink.chat_ids();
    chat_ids.sort_unstable();
    assert_eq!(chat_ids, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_empty_queue_finishes_immediately() {
    let (handle, receiver) = notification_channel();
    drop(handle);

    let dispatcher = NotificationDispatcher::with_text(RecordingSink::new(), "unused");
    let summary = dispatcher.run(receiver).await;

    assert_eq!(summary, DispatchSummary::default());
    assert!(dispatcher.sink().sent().is_empty());
}

#[tokio::test]
async fn test_send_after_dispatcher_gone_fails() {
    let (handle, receiver) = notification_channel();
    drop(receiver);

    assert_eq!(
        handle.send_notification(99),
        Err(NotificationError::QueueClosed)
    );
}
