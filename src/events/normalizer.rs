// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Kind-based routing of raw payloads to record constructors

use tracing::debug;

use super::payload::RawPayload;
use super::{AccumulatorSyncRecord, EventKind, LiquidationRecord, NormalizedEvent, WithdrawalRecord};
use crate::config::LendscanConfig;
use crate::errors::PayloadError;
use crate::spans;

/// Normalizes raw payloads of any supported kind using a shared configuration
///
/// Normalization is pure: the normalizer holds only immutable configuration and
/// can be shared across threads freely.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use lendscan::{EventKind, EventNormalizer, NormalizedEvent};
///
/// let normalizer = EventNormalizer::default();
///
/// let mut payload = HashMap::new();
/// payload.insert("user".to_string(), "0x1".to_string());
/// payload.insert("amount".to_string(), "500".to_string());
/// payload.insert("token".to_string(), "0x2".to_string());
///
/// let event = normalizer.normalize(EventKind::Withdrawal, &payload).unwrap();
/// assert!(matches!(event, NormalizedEvent::Withdrawal(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventNormalizer {
    config: LendscanConfig,
}

impl EventNormalizer {
    pub fn new(config: LendscanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LendscanConfig {
        &self.config
    }

    /// Validate `payload` as an event of `kind` and build its record
    ///
    /// Returns the first field failure in declaration order.
    pub fn normalize<P: RawPayload + ?Sized>(
        &self,
        kind: EventKind,
        payload: &P,
    ) -> Result<NormalizedEvent, PayloadError> {
        let span = spans::normalize_event(kind);
        let _guard = span.enter();

        let result = match kind {
            EventKind::AccumulatorsSync => {
                AccumulatorSyncRecord::from_payload_scaled(payload, self.config.accumulator_scale)
                    .map(NormalizedEvent::from)
            }
            EventKind::Liquidation => {
                LiquidationRecord::from_payload(payload).map(NormalizedEvent::from)
            }
            EventKind::Withdrawal => {
                WithdrawalRecord::from_payload(payload).map(NormalizedEvent::from)
            }
        };

        match &result {
            Ok(_) => debug!("Normalized event payload"),
            Err(e) => debug!(error = %e, field = ?e.field(), "Rejected event payload"),
        }

        result
    }

    /// Parse `kind` by name, then [`normalize`](Self::normalize)
    pub fn normalize_named<P: RawPayload + ?Sized>(
        &self,
        kind: &str,
        payload: &P,
    ) -> Result<NormalizedEvent, PayloadError> {
        self.normalize(kind.parse()?, payload)
    }
}
