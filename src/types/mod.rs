// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types and field-level conversion rules.
//!
//! - Canonical addresses (`0x` + 64 hex digits)
//! - Exact hex and decimal-digit conversions to `BigDecimal`

pub mod address;
pub mod numeric;

// Note: Public types are re-exported from lib.rs, not here
