// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for event payload validation.
//!
//! Every variant that concerns a single field carries that field's name so
//! callers can report exactly which part of a raw event was rejected.

/// Errors that can occur while normalizing a raw event payload.
///
/// Validation short-circuits: the error always describes the first field, in
/// declaration order, that failed its rule.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lendscan::{PayloadError, WithdrawalRecord};
///
/// let payload: HashMap<String, String> = [
///     ("user", "0x1"),
///     ("amount", "12.3"),
///     ("token", "0x2"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// match WithdrawalRecord::from_payload(&payload) {
///     Err(PayloadError::NonNumericAmount { field }) => assert_eq!(field, "amount"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// An address field does not start with `0x`, or its body is not 1 to 64
    /// hex digits.
    #[error("Invalid address provided for {field}")]
    InvalidAddress {
        /// Name of the offending field
        field: String,
    },

    /// A hexadecimal numeric field could not be parsed as an integer.
    #[error("{field} field is not a valid hexadecimal number")]
    InvalidNumber {
        /// Name of the offending field
        field: String,
    },

    /// A decimal-digit field contains something other than ASCII digits.
    #[error("{field} field is not numeric")]
    NonNumericAmount {
        /// Name of the offending field
        field: String,
    },

    /// A declared field is absent from the payload.
    #[error("Missing field: {field}")]
    MissingField {
        /// Name of the absent field
        field: String,
    },

    /// The event kind name is not one this crate knows how to normalize.
    #[error("Unknown event kind: {kind}")]
    UnknownEventKind {
        /// The name that was given
        kind: String,
    },
}

impl PayloadError {
    /// Create an `InvalidAddress` error for a specific field.
    pub fn invalid_address(field: impl Into<String>) -> Self {
        PayloadError::InvalidAddress {
            field: field.into(),
        }
    }

    /// Create an `InvalidNumber` error for a specific field.
    pub fn invalid_number(field: impl Into<String>) -> Self {
        PayloadError::InvalidNumber {
            field: field.into(),
        }
    }

    /// Create a `NonNumericAmount` error for a specific field.
    pub fn non_numeric_amount(field: impl Into<String>) -> Self {
        PayloadError::NonNumericAmount {
            field: field.into(),
        }
    }

    /// Create a `MissingField` error for a specific field.
    pub fn missing_field(field: impl Into<String>) -> Self {
        PayloadError::MissingField {
            field: field.into(),
        }
    }

    /// Create an `UnknownEventKind` error.
    pub fn unknown_event_kind(kind: impl Into<String>) -> Self {
        PayloadError::UnknownEventKind { kind: kind.into() }
    }

    /// Name of the field this error is about, if it concerns a field.
    pub fn field(&self) -> Option<&str> {
        match self {
            PayloadError::InvalidAddress { field }
            | PayloadError::InvalidNumber { field }
            | PayloadError::NonNumericAmount { field }
            | PayloadError::MissingField { field } => Some(field),
            PayloadError::UnknownEventKind { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            PayloadError::invalid_address("liquidator").to_string(),
            "Invalid address provided for liquidator"
        );
        assert_eq!(
            PayloadError::invalid_number("debt_raw_amount").to_string(),
            "debt_raw_amount field is not a valid hexadecimal number"
        );
        assert_eq!(
            PayloadError::non_numeric_amount("amount").to_string(),
            "amount field is not numeric"
        );
        assert_eq!(
            PayloadError::missing_field("token").to_string(),
            "Missing field: token"
        );
    }

    #[test]
    fn field_accessor() {
        assert_eq!(PayloadError::invalid_number("x").field(), Some("x"));
        assert_eq!(PayloadError::missing_field("y").field(), Some("y"));
        assert_eq!(PayloadError::unknown_event_kind("Borrow").field(), None);
    }
}
