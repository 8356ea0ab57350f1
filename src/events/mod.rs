// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Lending protocol event normalization.
//!
//! This module handles:
//! - Raw payload access ([`RawPayload`]) and per-field conversion rules
//! - AccumulatorsSync, Liquidation and Withdrawal record construction
//! - Kind-based routing through [`EventNormalizer`]
//!
//! # Validation order
//!
//! Each record validates its fields in declaration order and stops at the
//! first failure; the returned [`PayloadError`](crate::PayloadError) names that
//! field. Multiple failures are never aggregated.

pub mod accumulators;
pub mod kind;
pub mod liquidation;
pub mod normalizer;
pub mod payload;
pub mod withdrawal;

pub use accumulators::AccumulatorSyncRecord;
pub use kind::{EventKind, NormalizedEvent};
pub use liquidation::LiquidationRecord;
pub use normalizer::EventNormalizer;
pub use payload::RawPayload;
pub use withdrawal::WithdrawalRecord;
