//! Fixed constants for event normalization
//!
//! Centralizes the scale factors, widths and defaults used across the crate.

/// Power of ten that accumulator values are scaled by (`raw / 10^27`)
pub const ACCUMULATOR_SCALE: u32 = 27;

/// Number of hex digits in a canonical address, excluding the `0x` prefix
pub const CANONICAL_ADDRESS_HEX_WIDTH: usize = 64;

/// Prefix every raw address must carry
pub const ADDRESS_PREFIX: &str = "0x";

/// Message sent to each queued chat when no other text is configured
pub const DEFAULT_NOTIFICATION_TEXT: &str = "Test message";

/// Environment variables read by the `lendscan` binary
pub mod env {
    /// Overrides [`ACCUMULATOR_SCALE`](super::ACCUMULATOR_SCALE)
    pub const ACCUMULATOR_SCALE: &str = "LENDSCAN_ACCUMULATOR_SCALE";

    /// Overrides [`DEFAULT_NOTIFICATION_TEXT`](super::DEFAULT_NOTIFICATION_TEXT)
    pub const NOTIFICATION_TEXT: &str = "LENDSCAN_NOTIFICATION_TEXT";
}
