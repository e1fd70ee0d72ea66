//! Failure-routing policies.
//!
//! ## Contents
//! - [`UnhandledPolicy`] what happens when a listener of the error event itself fails
//!
//! ## Quick wiring
//! ```text
//! EmitterConfig { error_event, unhandled: UnhandledPolicy, .. }
//!      └─► core::emitter uses:
//!           - error_event as the target of cascaded failures
//!           - unhandled to propagate or log failures of error-event listeners
//! ```

mod unhandled;

pub use unhandled::UnhandledPolicy;
