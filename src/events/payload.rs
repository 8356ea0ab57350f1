// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw payload access and per-field validation rules
//!
//! A raw payload is any mapping from field name to raw string value. Each
//! helper here looks a field up, applies one conversion rule, and reports the
//! field by name on failure.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use bigdecimal::BigDecimal;

use crate::errors::PayloadError;
use crate::types::address::CanonicalAddress;
use crate::types::numeric::{digits_to_decimal, hex_to_integer_decimal, hex_to_scaled_decimal};

/// A mapping of field name to raw string value, as decoded from an event log
pub trait RawPayload {
    /// Look up the raw value of `name`
    fn field(&self, name: &str) -> Option<&str>;

    /// Look up the raw value of `name`, failing with
    /// [`PayloadError::MissingField`] if it is absent
    fn require(&self, name: &str) -> Result<&str, PayloadError> {
        self.field(name)
            .ok_or_else(|| PayloadError::missing_field(name))
    }
}

impl<S: BuildHasher> RawPayload for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RawPayload for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

pub(crate) fn address_field<P: RawPayload + ?Sized>(
    payload: &P,
    name: &str,
) -> Result<CanonicalAddress, PayloadError> {
    CanonicalAddress::parse(name, payload.require(name)?)
}

pub(crate) fn hex_integer_field<P: RawPayload + ?Sized>(
    payload: &P,
    name: &str,
) -> Result<BigDecimal, PayloadError> {
    hex_to_integer_decimal(name, payload.require(name)?)
}

pub(crate) fn scaled_hex_field<P: RawPayload + ?Sized>(
    payload: &P,
    name: &str,
    scale: u32,
) -> Result<BigDecimal, PayloadError> {
    hex_to_scaled_decimal(name, payload.require(name)?, scale)
}

pub(crate) fn digits_field<P: RawPayload + ?Sized>(
    payload: &P,
    name: &str,
) -> Result<BigDecimal, PayloadError> {
    digits_to_decimal(name, payload.require(name)?)
}
