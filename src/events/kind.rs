// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Supported event kinds and the tagged union of normalized records

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{AccumulatorSyncRecord, LiquidationRecord, WithdrawalRecord};
use crate::errors::PayloadError;

/// Lending protocol events this crate can normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// AccumulatorsSync(token, lending_accumulator, debt_accumulator)
    AccumulatorsSync,
    /// Liquidation(liquidator, user, debt_token, debt_raw_amount, debt_face_amount,
    /// collateral_token, collateral_amount)
    Liquidation,
    /// Withdrawal(user, amount, token)
    Withdrawal,
}

impl EventKind {
    /// Every supported kind
    pub const ALL: [EventKind; 3] = [
        EventKind::AccumulatorsSync,
        EventKind::Liquidation,
        EventKind::Withdrawal,
    ];

    /// Get a human-readable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::AccumulatorsSync => "AccumulatorsSync",
            EventKind::Liquidation => "Liquidation",
            EventKind::Withdrawal => "Withdrawal",
        }
    }

    /// Declared field names for this kind, in validation order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            EventKind::AccumulatorsSync => &AccumulatorSyncRecord::FIELDS,
            EventKind::Liquidation => &LiquidationRecord::FIELDS,
            EventKind::Withdrawal => &WithdrawalRecord::FIELDS,
        }
    }
}

impl FromStr for EventKind {
    type Err = PayloadError;

    /// Accepts the event name (`"AccumulatorsSync"`) or its snake_case form
    /// (`"accumulators_sync"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AccumulatorsSync" | "accumulators_sync" => Ok(EventKind::AccumulatorsSync),
            "Liquidation" | "liquidation" => Ok(EventKind::Liquidation),
            "Withdrawal" | "withdrawal" => Ok(EventKind::Withdrawal),
            other => Err(PayloadError::unknown_event_kind(other)),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized record of any supported kind
///
/// Serializes with an `event` tag next to the record's own fields:
/// `{"event": "Withdrawal", "user": "0x…", "amount": "…", "token": "0x…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum NormalizedEvent {
    AccumulatorsSync(AccumulatorSyncRecord),
    Liquidation(LiquidationRecord),
    Withdrawal(WithdrawalRecord),
}

impl NormalizedEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            NormalizedEvent::AccumulatorsSync(_) => EventKind::AccumulatorsSync,
            NormalizedEvent::Liquidation(_) => EventKind::Liquidation,
            NormalizedEvent::Withdrawal(_) => EventKind::Withdrawal,
        }
    }
}

impl From<AccumulatorSyncRecord> for NormalizedEvent {
    fn from(record: AccumulatorSyncRecord) -> Self {
        NormalizedEvent::AccumulatorsSync(record)
    }
}

impl From<LiquidationRecord> for NormalizedEvent {
    fn from(record: LiquidationRecord) -> Self {
        NormalizedEvent::Liquidation(record)
    }
}

impl From<WithdrawalRecord> for NormalizedEvent {
    fn from(record: WithdrawalRecord) -> Self {
        NormalizedEvent::Withdrawal(record)
    }
}
