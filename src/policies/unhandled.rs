//! # Policy for failures of error-event listeners.
//!
//! A failing listener of an ordinary event is turned into an emission of the error event.
//! A failing listener **of the error event** is not re-emitted (cascades stop after one level);
//! [`UnhandledPolicy`] decides what happens to it instead.
//!
//! ```text
//! emit("foo") ──► listener fails ──► emit("error", failure)
//!                                         └─► error listener fails
//!                                               ├─ Propagate ─► emit("foo") returns Err(Unhandled)
//!                                               └─ Log       ─► tracing::error!, dispatch continues
//! ```

/// Policy controlling failures raised by listeners of the error event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnhandledPolicy {
    /// Return `EmitterError::Unhandled` from `emit` immediately (default).
    ///
    /// Remaining listeners of the interrupted emission do not run.
    #[default]
    Propagate,
    /// Log the failure and keep dispatching.
    Log,
}

impl UnhandledPolicy {
    /// Returns `true` if failures escape `emit`.
    #[inline]
    pub fn propagates(self) -> bool {
        matches!(self, UnhandledPolicy::Propagate)
    }
}
