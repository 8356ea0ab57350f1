// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Liquidation event record

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use serde::Serialize;

use super::payload::{address_field, hex_integer_field, RawPayload};
use crate::errors::PayloadError;
use crate::types::numeric::serialize_plain_decimal;
use crate::types::address::CanonicalAddress;

/// Normalized Liquidation event
///
/// Addresses are canonicalized and the three amounts are parsed from hex into
/// integer-valued decimals. Fields are validated in declaration order and the
/// first failure is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquidationRecord {
    liquidator: CanonicalAddress,
    user: CanonicalAddress,
    debt_token: CanonicalAddress,
    #[serde(serialize_with = "serialize_plain_decimal")]
    debt_raw_amount: BigDecimal,
    #[serde(serialize_with = "serialize_plain_decimal")]
    debt_face_amount: BigDecimal,
    collateral_token: CanonicalAddress,
    #[serde(serialize_with = "serialize_plain_decimal")]
    collateral_amount: BigDecimal,
}

impl LiquidationRecord {
    /// Field names in declaration (and validation) order
    pub const FIELDS: [&'static str; 7] = [
        "liquidator",
        "user",
        "debt_token",
        "debt_raw_amount",
        "debt_face_amount",
        "collateral_token",
        "collateral_amount",
    ];

    /// Build a record from a raw payload
    pub fn from_payload<P: RawPayload + ?Sized>(payload: &P) -> Result<Self, PayloadError> {
        Ok(Self {
            liquidator: address_field(payload, "liquidator")?,
            user: address_field(payload, "user")?,
            debt_token: address_field(payload, "debt_token")?,
            debt_raw_amount: hex_integer_field(payload, "debt_raw_amount")?,
            debt_face_amount: hex_integer_field(payload, "debt_face_amount")?,
            collateral_token: address_field(payload, "collateral_token")?,
            collateral_amount: hex_integer_field(payload, "collateral_amount")?,
        })
    }

    pub fn liquidator(&self) -> CanonicalAddress {
        self.liquidator
    }

    pub fn user(&self) -> CanonicalAddress {
        self.user
    }

    pub fn debt_token(&self) -> CanonicalAddress {
        self.debt_token
    }

    /// Debt repaid, in raw (unscaled) token units
    pub fn debt_raw_amount(&self) -> &BigDecimal {
        &self.debt_raw_amount
    }

    /// Debt repaid, in face-value token units
    pub fn debt_face_amount(&self) -> &BigDecimal {
        &self.debt_face_amount
    }

    pub fn collateral_token(&self) -> CanonicalAddress {
        self.collateral_token
    }

    /// Collateral seized by the liquidator
    pub fn collateral_amount(&self) -> &BigDecimal {
        &self.collateral_amount
    }
}

impl<S: std::hash::BuildHasher> TryFrom<&HashMap<String, String, S>> for LiquidationRecord {
    type Error = PayloadError;

    fn try_from(payload: &HashMap<String, String, S>) -> Result<Self, Self::Error> {
        Self::from_payload(payload)
    }
}
