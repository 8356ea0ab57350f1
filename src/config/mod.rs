//! Configuration for lendscan operations
//!
//! # Example: Using defaults
//!
//! ```rust
//! use lendscan::LendscanConfig;
//!
//! // Accumulators scaled by 10^27, "Test message" for notifications
//! let config = LendscanConfig::default();
//! assert_eq!(config.accumulator_scale, 27);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use lendscan::LendscanConfigBuilder;
//!
//! let config = LendscanConfigBuilder::new()
//!     .accumulator_scale(18)
//!     .notification_text("Your position was liquidated")
//!     .build();
//! assert_eq!(config.accumulator_scale, 18);
//! ```

pub mod constants;

use constants::{ACCUMULATOR_SCALE, DEFAULT_NOTIFICATION_TEXT};

/// Configuration for lendscan operations
///
/// Use [`LendscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendscanConfig {
    /// Power of ten that raw accumulator integers are divided by
    /// Default: 27
    pub accumulator_scale: u32,

    /// Text sent to every chat drained from the notification queue
    /// Default: "Test message"
    pub notification_text: String,
}

impl Default for LendscanConfig {
    fn default() -> Self {
        Self {
            accumulator_scale: ACCUMULATOR_SCALE,
            notification_text: DEFAULT_NOTIFICATION_TEXT.to_string(),
        }
    }
}

/// Builder for [`LendscanConfig`]
///
/// # Example
///
/// ```rust
/// use lendscan::LendscanConfigBuilder;
///
/// let config = LendscanConfigBuilder::new()
///     .notification_text("Health factor below threshold")
///     .build();
/// assert_eq!(config.notification_text, "Health factor below threshold");
/// ```
pub struct LendscanConfigBuilder {
    config: LendscanConfig,
}

impl Default for LendscanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LendscanConfigBuilder {
    /// Create a new builder starting from [`LendscanConfig::default`]
    pub fn new() -> Self {
        Self {
            config: LendscanConfig::default(),
        }
    }

    /// Set the accumulator scale (accumulators become `raw / 10^scale`)
    pub fn accumulator_scale(mut self, scale: u32) -> Self {
        self.config.accumulator_scale = scale;
        self
    }

    /// Set the text sent to each queued chat
    pub fn notification_text(mut self, text: impl Into<String>) -> Self {
        self.config.notification_text = text.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> LendscanConfig {
        self.config
    }
}
