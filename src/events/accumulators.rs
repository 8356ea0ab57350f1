// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! AccumulatorsSync event record

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use serde::Serialize;

use super::payload::{address_field, scaled_hex_field, RawPayload};
use crate::config::constants::ACCUMULATOR_SCALE;
use crate::errors::PayloadError;
use crate::types::numeric::serialize_plain_decimal;
use crate::types::address::CanonicalAddress;

/// Normalized AccumulatorsSync event
///
/// Both accumulators arrive as hex integers in fixed point with 27 decimals
/// and are stored as exact decimals (`raw / 10^27`).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use bigdecimal::BigDecimal;
/// use lendscan::AccumulatorSyncRecord;
///
/// let payload: HashMap<String, String> = [
///     ("token", "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7"),
///     ("lending_accumulator", "0x33b2e3c9fd0803ce8000000"),
///     ("debt_accumulator", "0x33b2e3c9fd0803ce8000000"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let record = AccumulatorSyncRecord::from_payload(&payload).unwrap();
/// assert_eq!(record.lending_accumulator(), &BigDecimal::from(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccumulatorSyncRecord {
    token: CanonicalAddress,
    #[serde(serialize_with = "serialize_plain_decimal")]
    lending_accumulator: BigDecimal,
    #[serde(serialize_with = "serialize_plain_decimal")]
    debt_accumulator: BigDecimal,
}

impl AccumulatorSyncRecord {
    /// Field names in declaration (and validation) order
    pub const FIELDS: [&'static str; 3] = ["token", "lending_accumulator", "debt_accumulator"];

    /// Build a record, scaling accumulators by `10^27`
    pub fn from_payload<P: RawPayload + ?Sized>(payload: &P) -> Result<Self, PayloadError> {
        Self::from_payload_scaled(payload, ACCUMULATOR_SCALE)
    }

    /// Build a record, scaling accumulators by `10^scale`
    pub fn from_payload_scaled<P: RawPayload + ?Sized>(
        payload: &P,
        scale: u32,
    ) -> Result<Self, PayloadError> {
        Ok(Self {
            token: address_field(payload, "token")?,
            lending_accumulator: scaled_hex_field(payload, "lending_accumulator", scale)?,
            debt_accumulator: scaled_hex_field(payload, "debt_accumulator", scale)?,
        })
    }

    pub fn token(&self) -> CanonicalAddress {
        self.token
    }

    pub fn lending_accumulator(&self) -> &BigDecimal {
        &self.lending_accumulator
    }

    pub fn debt_accumulator(&self) -> &BigDecimal {
        &self.debt_accumulator
    }
}

impl<S: std::hash::BuildHasher> TryFrom<&HashMap<String, String, S>> for AccumulatorSyncRecord {
    type Error = PayloadError;

    fn try_from(payload: &HashMap<String, String, S>) -> Result<Self, Self::Error> {
        Self::from_payload(payload)
    }
}
