// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use tokio::task::JoinHandle;
use tracing::{debug, error, info, Instrument};

use super::{notification_channel, NotificationHandle, NotificationReceiver, NotificationSink};
use crate::config::LendscanConfig;
use crate::spans;

/// Outcome of a dispatcher run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Notifications the sink accepted
    pub delivered: usize,
    /// Notifications the sink rejected
    pub failed: usize,
}

/// Drains a notification queue into a [`NotificationSink`]
pub struct NotificationDispatcher<S> {
    sink: S,
    text: String,
}

impl<S: NotificationSink> NotificationDispatcher<S> {
    /// Create a dispatcher sending `config.notification_text` to every chat
    pub fn new(sink: S, config: &LendscanConfig) -> Self {
        Self::with_text(sink, config.notification_text.clone())
    }

    pub fn with_text(sink: S, text: impl Into<String>) -> Self {
        Self {
            sink,
            text: text.into(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Deliver every queued chat id until all handles are dropped
    ///
    /// Delivery failures are logged and counted; they never stop the loop.
    pub async fn run(&self, mut receiver: NotificationReceiver) -> DispatchSummary {
        async {
            let mut summary = DispatchSummary::default();

            while let Some(chat_id) = receiver.recv().await {
                match self
                    .sink
                    .send_message(chat_id, &self.text)
                    .instrument(spans::deliver_notification(chat_id))
                    .await
                {
                    Ok(()) => {
                        summary.delivered += 1;
                        debug!(chat_id, "Delivered notification");
                    }
                    Err(e) => {
                        summary.failed += 1;
                        error!(chat_id, error = %e, "Failed to deliver notification");
                    }
                }
            }

            info!(
                delivered = summary.delivered,
                failed = summary.failed,
                "Notification queue drained"
            );
            summary
        }
        .instrument(spans::dispatch_notifications())
        .await
    }
}

/// Runs a [`NotificationDispatcher`] as a background tokio task
pub struct NotificationJob;

impl NotificationJob {
    /// Spawn the dispatcher and return the producer handle plus the task
    ///
    /// The task finishes, yielding its [`DispatchSummary`], once every clone
    /// of the returned handle has been dropped and the queue is drained.
    pub fn spawn<S>(
        sink: S,
        config: &LendscanConfig,
    ) -> (NotificationHandle, JoinHandle<DispatchSummary>)
    where
        S: NotificationSink + 'static,
    {
        let (handle, receiver) = notification_channel();
        let dispatcher = NotificationDispatcher::new(sink, config);

        let task = tokio::spawn(async move { dispatcher.run(receiver).await });

        (handle, task)
    }
}
