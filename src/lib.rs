//! # prio-emitter
//!
//! **prio-emitter** is a minimal, priority-ordered event emitter for Rust.
//!
//! Components register named handlers; emitting an event invokes every handler registered
//! for that name, highest priority first, strictly one after another. A failing handler
//! never stops its siblings: its failure is re-emitted as the `"error"` event instead.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Handler    │   │   Handler    │   │   Handler    │
//!     │ (Sync, p=2)  │   │(Suspend, p=0)│   │ (Sync, p=-1) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼  on()            ▼  on()            ▼  on()
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventEmitter                                                     │
//! │  - listeners: name ─► Vec<Listener> (sorted by priority, stable)  │
//! │  - EmitterConfig (error event, unhandled policy, default prio)   │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼  emit(name, args)
//!                      snapshot ─► invoke(emitter, args) in order, awaiting each
//!                                   │
//!                       failure ────┴──► emit("error", failure)
//!                                               │
//!                                   error listener fails
//!                                               ▼
//!                                       UnhandledPolicy
//!                                  (Propagate │ Log)
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                         |
//! |-------------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Emitter**       | Register handlers and dispatch events in priority order.     | [`EventEmitter`]                           |
//! | **Handlers**      | Synchronous closures, suspending closures, step streams.     | [`Handler`], [`Listen`], [`ListenFn`]      |
//! | **Payloads**      | Positional arguments shared by every listener of one emit.   | [`Args`], [`Value`], [`args!`]             |
//! | **Policies**      | Decide what happens when an error listener fails.            | [`UnhandledPolicy`]                        |
//! | **Errors**        | Typed registration/dispatch errors and handler failures.     | [`EmitterError`], [`HandlerError`]         |
//! | **Configuration** | Centralize emitter settings.                                 | [`EmitterConfig`], [`EmitterBuilder`]      |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] error listener _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use prio_emitter::{args, EventEmitter, Handler, HandlerError, ListenerOptions, Value};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter = EventEmitter::new();
//!     let log = Arc::new(Mutex::new(Vec::<String>::new()));
//!
//!     let l = Arc::clone(&log);
//!     emitter.on("greet", Handler::sync(move |_, args| {
//!         let who = args.first().and_then(Value::as_str).unwrap_or("nobody");
//!         l.lock().unwrap().push(format!("hello {who}"));
//!         Ok(())
//!     }), None)?;
//!
//!     emitter.on("greet", Handler::suspending(|_, _| async {
//!         Err(HandlerError::failed("grumpy"))
//!     }), ListenerOptions::priority(1))?;
//!
//!     let l = Arc::clone(&log);
//!     emitter.on("error", Handler::sync(move |_, args| {
//!         let label = args[0].as_error().map(|e| e.as_label());
//!         l.lock().unwrap().push(format!("error: {label:?}"));
//!         Ok(())
//!     }), None)?;
//!
//!     emitter.emit("greet", args!["world"]).await?;
//!     assert_eq!(
//!         *log.lock().unwrap(),
//!         vec!["error: Some(\"handler_failed\")".to_string(), "hello world".to_string()],
//!     );
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod listeners;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{DEFAULT_ERROR_EVENT, EmitterBuilder, EmitterConfig, EventEmitter};
pub use error::{EmitterError, HandlerError};
pub use events::{Args, Value};
pub use listeners::{Handler, HandlerResult, Listen, ListenFn, ListenerOptions, SyncFn};
pub use policies::UnhandledPolicy;

// Optional: expose a simple built-in error listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
