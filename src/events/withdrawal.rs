// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Withdrawal event record

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use serde::Serialize;

use super::payload::{address_field, digits_field, RawPayload};
use crate::errors::PayloadError;
use crate::types::numeric::serialize_plain_decimal;
use crate::types::address::CanonicalAddress;

/// Normalized Withdrawal event
///
/// Unlike the other events, `amount` arrives as a base-10 digit string.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use bigdecimal::BigDecimal;
/// use lendscan::{PayloadError, WithdrawalRecord};
///
/// let mut payload: HashMap<String, String> = HashMap::new();
/// payload.insert("user".into(), "0xabc".into());
/// payload.insert("amount".into(), "123".into());
/// payload.insert("token".into(), "0xdef".into());
///
/// let record = WithdrawalRecord::from_payload(&payload).unwrap();
/// assert_eq!(record.amount(), &BigDecimal::from(123));
///
/// payload.insert("amount".into(), "-5".into());
/// assert_eq!(
///     WithdrawalRecord::from_payload(&payload).unwrap_err(),
///     PayloadError::non_numeric_amount("amount")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawalRecord {
    user: CanonicalAddress,
    #[serde(serialize_with = "serialize_plain_decimal")]
    amount: BigDecimal,
    token: CanonicalAddress,
}

impl WithdrawalRecord {
    /// Field names in declaration (and validation) order
    pub const FIELDS: [&'static str; 3] = ["user", "amount", "token"];

    /// Build a record from a raw payload
    pub fn from_payload<P: RawPayload + ?Sized>(payload: &P) -> Result<Self, PayloadError> {
        Ok(Self {
            user: address_field(payload, "user")?,
            amount: digits_field(payload, "amount")?,
            token: address_field(payload, "token")?,
        })
    }

    pub fn user(&self) -> CanonicalAddress {
        self.user
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn token(&self) -> CanonicalAddress {
        self.token
    }
}

impl<S: std::hash::BuildHasher> TryFrom<&HashMap<String, String, S>> for WithdrawalRecord {
    type Error = PayloadError;

    fn try_from(payload: &HashMap<String, String, S>) -> Result<Self, Self::Error> {
        Self::from_payload(payload)
    }
}
