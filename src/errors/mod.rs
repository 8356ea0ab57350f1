// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the lendscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`PayloadError`],
//!   [`NotificationError`])
//! - **Unified error type** ([`LendscanError`]) for callers that don't need to
//!   distinguish between error sources
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use lendscan::{LendscanError, LiquidationRecord};
//!
//! fn ingest(payload: &HashMap<String, String>) -> Result<LiquidationRecord, LendscanError> {
//!     // PayloadError converts into LendscanError via From
//!     Ok(LiquidationRecord::from_payload(payload)?)
//! }
//!
//! assert!(matches!(
//!     ingest(&HashMap::new()),
//!     Err(LendscanError::Payload(_))
//! ));
//! ```

mod notification;
mod payload;

pub use notification::NotificationError;
pub use payload::PayloadError;

/// Unified error type for all lendscan operations.
#[derive(Debug, thiserror::Error)]
pub enum LendscanError {
    /// Error from payload validation.
    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Error from the notification queue.
    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),
}
