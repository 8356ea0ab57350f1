// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for lendscan integration tests
//!
//! Provides payload builders and a mock [`NotificationSink`] so tests can run
//! without a real chat backend.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use lendscan::{ChatId, NotificationError, NotificationSink};

/// Build a raw payload from `(field, value)` pairs
#[allow(dead_code)]
pub fn payload(fields: &[(&str, &str)]) -> HashMap<String, String> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A well-formed Liquidation payload
#[allow(dead_code)]
pub fn liquidation_payload() -> HashMap<String, String> {
    payload(&[
        ("liquidator", "0x1111"),
        ("user", "0x2222"),
        ("debt_token", "0x3333"),
        ("debt_raw_amount", "0x64"),
        ("debt_face_amount", "0x65"),
        ("collateral_token", "0x4444"),
        ("collateral_amount", "0xc8"),
    ])
}

/// Mock NotificationSink that records every message it accepts
///
/// Chats registered with [`failing_for`](Self::failing_for) are rejected with
/// `DeliveryFailed`.
///
/// # Example
///
/// ```rust,ignore
/// let sink = Arc::new(RecordingSink::new().failing_for([13]));
/// let (handle, task) = NotificationJob::spawn(sink.clone(), &config);
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(ChatId, String)>>,
    failing: HashSet<ChatId>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject deliveries to these chats
    pub fn failing_for(mut self, chat_ids: impl IntoIterator<Item = ChatId>) -> Self {
        self.failing.extend(chat_ids);
        self
    }

    /// Messages accepted so far, in delivery order
    pub fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Chat ids accepted so far, in delivery order
    pub fn chat_ids(&self) -> Vec<ChatId> {
        self.sent().into_iter().map(|(chat_id, _)| chat_id).collect()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), NotificationError> {
        if self.failing.contains(&chat_id) {
            return Err(NotificationError::delivery_failed(chat_id, "bot was blocked by the user"));
        }
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}
