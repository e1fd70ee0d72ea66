//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], centralized settings for an [`EventEmitter`](crate::EventEmitter).
//!
//! Config is used in two ways:
//! 1. **Emitter creation**: `EventEmitter::with_config(config)` or `EventEmitter::builder()`
//! 2. **Registration defaults**: listeners registered without a priority get `default_priority`
//!
//! ## Sentinel values
//! - `error_event = ""` → clamped back to `"error"` by [`EmitterConfig::error_event_name`]

use std::borrow::Cow;

use crate::policies::UnhandledPolicy;

/// Name of the event that receives listener failures unless configured otherwise.
pub const DEFAULT_ERROR_EVENT: &str = "error";

/// Configuration for an emitter.
///
/// ## Field semantics
/// - `error_event`: event emitted with each listener failure as its sole argument
/// - `unhandled`: what happens when a listener of `error_event` fails
/// - `default_priority`: priority of listeners registered without one
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks across the codebase.
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Event that receives listener failures.
    pub error_event: Cow<'static, str>,

    /// Handling of failures raised by listeners of the error event.
    pub unhandled: UnhandledPolicy,

    /// Priority applied when `ListenerOptions::priority` is `None`.
    pub default_priority: i32,
}

impl EmitterConfig {
    /// Returns the error event name, falling back to `"error"` when empty.
    #[inline]
    pub fn error_event_name(&self) -> &str {
        if self.error_event.is_empty() {
            DEFAULT_ERROR_EVENT
        } else {
            &self.error_event
        }
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `error_event = "error"`
    /// - `unhandled = UnhandledPolicy::Propagate`
    /// - `default_priority = 0`
    fn default() -> Self {
        Self {
            error_event: Cow::Borrowed(DEFAULT_ERROR_EVENT),
            unhandled: UnhandledPolicy::default(),
            default_priority: 0,
        }
    }
}
