//! Span creation helpers for lendscan operations.
//!
//! Telemetry concerns are kept out of business logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a matching
//! span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

use crate::events::EventKind;
use crate::notifications::ChatId;

/// Create span for normalizing one raw event payload.
///
/// Parent: caller's span (e.g. process_input_line)
/// Children: None
#[inline]
pub(crate) fn normalize_event(kind: EventKind) -> Span {
    tracing::debug_span!("lendscan.normalize_event", event = kind.name())
}

/// Create span for the notification dispatcher loop.
///
/// Parent: None (root span for the lifetime of the queue)
/// Children: deliver_notification spans (one per queued chat id)
#[inline]
pub(crate) fn dispatch_notifications() -> Span {
    tracing::info_span!("lendscan.dispatch_notifications")
}

/// Create span for delivering one notification.
///
/// Parent: dispatch_notifications span
/// Children: None (the sink may add its own)
#[inline]
pub(crate) fn deliver_notification(chat_id: ChatId) -> Span {
    tracing::debug_span!("lendscan.deliver_notification", chat_id = chat_id)
}

/// Create span for handling one line of binary input.
///
/// Parent: None
/// Children: normalize_event span
#[inline]
pub(crate) fn process_input_line(line_number: usize) -> Span {
    tracing::trace_span!("lendscan.process_input_line", line_number = line_number)
}
