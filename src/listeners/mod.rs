//! # Listeners and handlers.
//!
//! This module provides the registration-side types:
//! - [`Handler`] tagged callable (synchronous or suspending)
//! - [`Listen`] trait for suspending listeners with their own state
//! - [`ListenFn`] function-backed [`Listen`] implementation
//! - `Listener` immutable (handler, priority) record, internal to the emitter
//! - [`ListenerOptions`] registration options
//!
//! ## Invocation model
//! ```text
//! emit(name, args)
//!     │
//!     ├──► Handler::Sync        ──► f(&emitter, &args)             ─┐
//!     │                                                             ├─► Ok / Err / panic
//!     └──► Handler::Suspending  ──► on_event(&emitter, args).await ─┘
//! ```

mod handler;
mod listener;

#[cfg(feature = "logging")]
mod embedded;

pub use handler::{Handler, HandlerResult, Listen, ListenFn, SyncFn};
pub use listener::ListenerOptions;
pub(crate) use listener::{Listener, insertion_point};

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
