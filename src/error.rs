//! Error types used by the emitter and its handlers.
//!
//! This module defines two main error enums:
//!
//! - [`EmitterError`] — errors surfaced to callers of `on`/`emit`.
//! - [`HandlerError`] — failures raised by individual handlers during dispatch.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// # Errors surfaced by the emitter.
///
/// Registration errors are returned synchronously by `on`/`on_dyn`.
/// [`EmitterError::Unhandled`] is the only error `emit` can return.
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum EmitterError {
    /// The supplied handler value is not callable.
    #[error("event (named \"{event}\") listener must be callable")]
    InvalidHandler {
        /// Name of the event the registration targeted.
        event: String,
    },

    /// The event name was empty.
    #[error("event name must not be empty")]
    InvalidEventName,

    /// A listener of the error event failed and the emitter is configured to propagate it.
    #[error("unhandled failure in \"{event}\" listener: {source}")]
    Unhandled {
        /// Name of the error event whose listener failed.
        event: String,
        /// The failure raised by that listener.
        source: Arc<HandlerError>,
    },
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use prio_emitter::EmitterError;
    ///
    /// let err = EmitterError::InvalidHandler { event: "foo".into() };
    /// assert_eq!(err.as_label(), "emitter_invalid_handler");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::InvalidHandler { .. } => "emitter_invalid_handler",
            EmitterError::InvalidEventName => "emitter_invalid_event_name",
            EmitterError::Unhandled { .. } => "emitter_unhandled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::InvalidHandler { event } => {
                format!("invalid handler for event {event:?}")
            }
            EmitterError::InvalidEventName => "empty event name".to_string(),
            EmitterError::Unhandled { event, source } => {
                format!("unhandled in {event:?}: {}", source.as_message())
            }
        }
    }
}

/// # Failures produced by handler execution.
///
/// Handlers return these from their body; the dispatcher also produces
/// [`HandlerError::Panicked`] when a handler panics.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Handler reported a failure with a message.
    #[error("handler failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// Handler failed with an underlying error value.
    #[error("handler failed: {0}")]
    Source(#[source] Box<dyn StdError + Send + Sync>),

    /// Handler panicked; the panic was caught by the dispatcher.
    #[error("handler panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl HandlerError {
    /// Shorthand for [`HandlerError::Failed`].
    ///
    /// # Example
    /// ```
    /// use prio_emitter::HandlerError;
    ///
    /// let err = HandlerError::failed("boom");
    /// assert_eq!(err.to_string(), "handler failed: boom");
    /// ```
    pub fn failed(error: impl Into<String>) -> Self {
        HandlerError::Failed {
            error: error.into(),
        }
    }

    /// Wraps any error value as [`HandlerError::Source`].
    pub fn from_error(err: impl StdError + Send + Sync + 'static) -> Self {
        HandlerError::Source(Box::new(err))
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Failed { .. } => "handler_failed",
            HandlerError::Source(_) => "handler_source",
            HandlerError::Panicked { .. } => "handler_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::Failed { error } => format!("error: {error}"),
            HandlerError::Source(err) => format!("error: {err}"),
            HandlerError::Panicked { info } => format!("panic: {info}"),
        }
    }

    /// Builds a [`HandlerError::Panicked`] from a caught panic payload.
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let info = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        HandlerError::Panicked { info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_handler_message_names_event() {
        let err = EmitterError::InvalidHandler { event: "foo".into() };
        assert!(err.to_string().contains("foo"));
        assert_eq!(err.as_label(), "emitter_invalid_handler");
    }

    #[test]
    fn panic_payloads_are_rendered() {
        let err = HandlerError::from_panic(Box::new("static str"));
        assert_eq!(err.as_message(), "panic: static str");

        let err = HandlerError::from_panic(Box::new(String::from("owned")));
        assert_eq!(err.as_message(), "panic: owned");

        let err = HandlerError::from_panic(Box::new(42u8));
        assert_eq!(err.as_label(), "handler_panicked");
        assert_eq!(err.as_message(), "panic: unknown panic");
    }

    #[test]
    fn source_keeps_underlying_error() {
        let io = std::io::Error::other("disk");
        let err = HandlerError::from_error(io);
        assert_eq!(err.as_label(), "handler_source");
        assert!(StdError::source(&err).is_some());
    }
}
