use std::borrow::Cow;

use crate::core::EmitterConfig;
use crate::policies::UnhandledPolicy;

use super::emitter::EventEmitter;

/// Builder for constructing an [`EventEmitter`] with non-default settings.
///
/// ```rust
/// use prio_emitter::{EventEmitter, UnhandledPolicy};
///
/// let emitter = EventEmitter::builder()
///     .error_event("failure")
///     .unhandled(UnhandledPolicy::Log)
///     .default_priority(10)
///     .build();
///
/// assert_eq!(emitter.config().error_event_name(), "failure");
/// ```
#[derive(Debug, Default)]
pub struct EmitterBuilder {
    cfg: EmitterConfig,
}

impl EmitterBuilder {
    /// Creates a new builder starting from the given configuration.
    pub fn new(cfg: EmitterConfig) -> Self {
        Self { cfg }
    }

    /// Sets the event that receives listener failures.
    pub fn error_event(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.cfg.error_event = name.into();
        self
    }

    /// Sets the policy for failures of error-event listeners.
    pub fn unhandled(mut self, policy: UnhandledPolicy) -> Self {
        self.cfg.unhandled = policy;
        self
    }

    /// Sets the priority of listeners registered without one.
    pub fn default_priority(mut self, priority: i32) -> Self {
        self.cfg.default_priority = priority;
        self
    }

    /// Builds the emitter.
    pub fn build(self) -> EventEmitter {
        EventEmitter::with_config(self.cfg)
    }
}
