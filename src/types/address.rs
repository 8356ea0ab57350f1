// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical address type
//!
//! Raw event payloads carry addresses as `0x`-prefixed hex strings of varying
//! length (leading zeros are routinely dropped). [`CanonicalAddress`] stores the
//! 32-byte value and always renders it as `0x` followed by 64 lowercase hex
//! digits, so two spellings of the same address compare and print identically.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{hex, B256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::constants::{ADDRESS_PREFIX, CANONICAL_ADDRESS_HEX_WIDTH};
use crate::errors::PayloadError;

/// A `0x`-prefixed address left-padded with zeros to 64 hex digits
///
/// # Examples
///
/// ```
/// use lendscan::CanonicalAddress;
///
/// let address = CanonicalAddress::parse("token", "0x4b2a").unwrap();
/// assert_eq!(
///     address.to_string(),
///     "0x0000000000000000000000000000000000000000000000000000000000004b2a"
/// );
///
/// // Missing prefix is rejected and the field is named
/// let err = CanonicalAddress::parse("token", "4b2a").unwrap_err();
/// assert_eq!(err.field(), Some("token"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CanonicalAddress(B256);

impl CanonicalAddress {
    /// The all-zero address
    pub const ZERO: Self = Self(B256::ZERO);

    /// Wrap an existing 32-byte value
    pub const fn new(bytes: B256) -> Self {
        Self(bytes)
    }

    /// Get the inner 32-byte value
    pub const fn as_b256(&self) -> B256 {
        self.0
    }

    /// Validate and canonicalize a raw address taken from `field`
    ///
    /// The input must start with `0x` followed by 1 to 64 hex digits (either
    /// case). Anything else fails with [`PayloadError::InvalidAddress`] naming
    /// `field`.
    pub fn parse(field: &str, raw: &str) -> Result<Self, PayloadError> {
        let body = raw
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or_else(|| PayloadError::invalid_address(field))?;

        if body.is_empty()
            || body.len() > CANONICAL_ADDRESS_HEX_WIDTH
            || !body.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(PayloadError::invalid_address(field));
        }

        let padded = format!("{body:0>width$}", width = CANONICAL_ADDRESS_HEX_WIDTH);
        let bytes = padded
            .parse::<B256>()
            .map_err(|_| PayloadError::invalid_address(field))?;

        Ok(Self(bytes))
    }
}

/// Canonicalize a raw address string, returning its canonical spelling
///
/// Equivalent to `CanonicalAddress::parse(field, raw)?.to_string()`. Applying
/// it to its own output returns the same string.
pub fn canonicalize_address(field: &str, raw: &str) -> Result<String, PayloadError> {
    CanonicalAddress::parse(field, raw).map(|address| address.to_string())
}

impl From<B256> for CanonicalAddress {
    fn from(bytes: B256) -> Self {
        Self(bytes)
    }
}

impl From<CanonicalAddress> for B256 {
    fn from(address: CanonicalAddress) -> Self {
        address.0
    }
}

impl FromStr for CanonicalAddress {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("address", s)
    }
}

/// Format: "0x" followed by 64 lowercase hex characters
impl fmt::Display for CanonicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ADDRESS_PREFIX}{}", hex::encode(self.0))
    }
}

impl Serialize for CanonicalAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
