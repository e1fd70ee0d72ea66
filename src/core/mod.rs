//! Emitter core: registration, dispatch and configuration.
//!
//! The public API from this module is [`EventEmitter`], its [`EmitterBuilder`] and
//! [`EmitterConfig`].
//!
//! Internal modules:
//! - [`emitter`]: listener storage, ordered dispatch, failure routing;
//! - [`builder`]: fluent construction of a configured emitter;
//! - [`config`]: settings and defaults.

mod builder;
mod config;
mod emitter;

pub use builder::EmitterBuilder;
pub use config::{DEFAULT_ERROR_EVENT, EmitterConfig};
pub use emitter::EventEmitter;
