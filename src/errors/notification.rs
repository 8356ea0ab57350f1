// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the notification queue.

use crate::notifications::ChatId;

/// Errors that can occur while queueing or delivering a notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    /// The dispatcher has stopped, so nothing will drain the queue.
    #[error("Notification queue is closed")]
    QueueClosed,

    /// The sink could not deliver a message to a chat.
    ///
    /// Delivery failures are not retried; the dispatcher logs them and moves
    /// on to the next chat id.
    #[error("Failed to deliver notification to chat {chat_id}: {details}")]
    DeliveryFailed {
        /// Chat the message was addressed to
        chat_id: ChatId,
        /// Details reported by the sink
        details: String,
    },
}

impl NotificationError {
    /// Create a `DeliveryFailed` error with details.
    pub fn delivery_failed(chat_id: ChatId, details: impl Into<String>) -> Self {
        NotificationError::DeliveryFailed {
            chat_id,
            details: details.into(),
        }
    }
}
