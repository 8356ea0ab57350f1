// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validation and normalization of lending-protocol event payloads.
//!
//! Raw events arrive as mappings of field name to string. This crate turns
//! them into typed records:
//!
//! - addresses become [`CanonicalAddress`] values (`0x` + 64 hex digits)
//! - hex accumulators become exact [`bigdecimal::BigDecimal`]s scaled by `10^27`
//! - hex and decimal-digit amounts become integer-valued `BigDecimal`s
//!
//! Any rule violation yields a [`PayloadError`] naming the offending field.
//!
//! A small notification queue ([`NotificationJob`]) is included for fanning
//! out chat messages after events are processed.

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod events;
pub mod notifications;
mod spans;
pub mod types;

pub use config::{LendscanConfig, LendscanConfigBuilder};
pub use errors::{LendscanError, NotificationError, PayloadError};
pub use events::{
    AccumulatorSyncRecord, EventKind, EventNormalizer, LiquidationRecord, NormalizedEvent,
    RawPayload, WithdrawalRecord,
};
pub use notifications::{
    notification_channel, ChatId, DispatchSummary, NotificationDispatcher, NotificationHandle,
    NotificationJob, NotificationReceiver, NotificationSink,
};
pub use types::address::{canonicalize_address, CanonicalAddress};
pub use types::numeric::{
    digits_to_decimal, hex_to_integer_decimal, hex_to_scaled_decimal, parse_hex_integer,
};
