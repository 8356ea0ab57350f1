// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Outbound notification queue
//!
//! Producers enqueue chat ids through a cloneable [`NotificationHandle`]; a
//! single [`NotificationDispatcher`] drains them in FIFO order and hands each one
//! to a [`NotificationSink`] together with the configured message text.
//!
//! The queue is unbounded and enqueueing never waits. There is no retry:
//! a failed delivery is logged and counted, then the dispatcher moves on.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use lendscan::{ChatId, LendscanConfig, NotificationError, NotificationJob, NotificationSink};
//!
//! struct StdoutSink;
//!
//! #[async_trait]
//! impl NotificationSink for StdoutSink {
//!     async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), NotificationError> {
//!         println!("{chat_id}: {text}");
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (handle, task) = NotificationJob::spawn(StdoutSink, &LendscanConfig::default());
//! handle.send_notification(42).unwrap();
//! drop(handle);
//!
//! let summary = task.await.unwrap();
//! assert_eq!(summary.delivered, 1);
//! # }
//! ```

mod job;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::trace;

use crate::errors::NotificationError;

pub use job::{DispatchSummary, NotificationDispatcher, NotificationJob};

/// Chat identifier understood by the messaging backend
pub type ChatId = i64;

/// Delivers a text message to a chat
///
/// Implemented by the chat client; the queue only needs this one operation.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Send `text` to `chat_id`
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), NotificationError>;
}

#[async_trait]
impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), NotificationError> {
        (**self).send_message(chat_id, text).await
    }
}

/// Create an unbounded notification queue
pub fn notification_channel() -> (NotificationHandle, NotificationReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NotificationHandle { tx }, NotificationReceiver { rx })
}

/// Producer side of the notification queue
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    tx: mpsc::UnboundedSender<ChatId>,
}

impl NotificationHandle {
    /// Queue a notification for `chat_id`
    ///
    /// Fails with [`NotificationError::QueueClosed`] once the receiving side
    /// has been dropped.
    pub fn send_notification(&self, chat_id: ChatId) -> Result<(), NotificationError> {
        self.tx
            .send(chat_id)
            .map_err(|_| NotificationError::QueueClosed)?;
        trace!(chat_id, "Queued notification");
        Ok(())
    }

    /// Whether the receiving side has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer side of the notification queue
#[derive(Debug)]
pub struct NotificationReceiver {
    rx: mpsc::UnboundedReceiver<ChatId>,
}

impl NotificationReceiver {
    /// Wait for the next queued chat id
    ///
    /// Returns `None` once every [`NotificationHandle`] is dropped and the
    /// queue is empty.
    pub async fn recv(&mut self) -> Option<ChatId> {
        self.rx.recv().await
    }

    /// Stop accepting new notifications; already queued ids can still be received
    pub fn close(&mut self) {
        self.rx.close();
    }
}
