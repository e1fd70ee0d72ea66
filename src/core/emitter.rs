//! # Priority-ordered event emitter.
//!
//! [`EventEmitter`] owns a map from event name to a sequence of `Listener`s kept sorted
//! by priority (descending, registration order among ties).
//!
//! ## Architecture
//! ```text
//! on(name, handler, opts)
//!     └─► write lock ─► entry(name) ─► insert at stable sorted position
//!
//! emit(name, args)
//!     ├─► read lock ─► snapshot Vec<Arc<Listener>> ─► unlock
//!     └─► for listener in snapshot (sequential):
//!           ├─ Ok            ─► next
//!           └─ Err / panic   ─► emit(error_event, failure)
//!                                  └─ error listener fails ─► UnhandledPolicy
//! ```
//!
//! ## Rules
//! - Listeners of one emission never run concurrently; suspending ones are awaited in turn.
//! - Every handler receives the emitter it was dispatched from; the handle lives only for
//!   the call, so handlers never need to capture the emitter.
//! - The lock is never held while a handler runs: handlers may call `on` and `emit` freely.
//! - Listeners registered during an emission run from the next emission on.
//! - A failing listener never stops its siblings.
//! - Failures of error-event listeners are never re-emitted.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, error, trace, warn};

use crate::core::{EmitterBuilder, EmitterConfig};
use crate::error::{EmitterError, HandlerError};
use crate::events::{Args, Value};
use crate::listeners::{Handler, Listen, Listener, ListenerOptions, insertion_point};

/// Priority-ordered, sequential event emitter.
///
/// A cheap, clonable handle: clones share the same listeners and configuration, and every
/// method takes `&self`. Handlers receive the emitter they were dispatched from as their
/// first argument, so capturing a clone inside a handler (which would keep the emitter
/// alive through its own listener table) is never needed.
///
/// ## Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use prio_emitter::{EventEmitter, Handler, ListenerOptions};
///
/// # futures::executor::block_on(async {
/// let emitter = EventEmitter::new();
/// let order = Arc::new(Mutex::new(Vec::new()));
///
/// let o = Arc::clone(&order);
/// emitter.on("foo", Handler::sync(move |_, _| { o.lock().unwrap().push("low"); Ok(()) }), None)?;
/// let o = Arc::clone(&order);
/// emitter.on(
///     "foo",
///     Handler::sync(move |_, _| { o.lock().unwrap().push("high"); Ok(()) }),
///     ListenerOptions::priority(2),
/// )?;
///
/// emitter.emit("foo", ()).await?;
/// assert_eq!(*order.lock().unwrap(), vec!["high", "low"]);
/// # Ok::<(), prio_emitter::EmitterError>(())
/// # }).unwrap();
/// ```
#[derive(Clone)]
pub struct EventEmitter {
    shared: Arc<Shared>,
}

/// State shared by every clone of one emitter.
struct Shared {
    listeners: RwLock<HashMap<String, Vec<Arc<Listener>>>>,
    next_seq: AtomicU64,
    cfg: EmitterConfig,
}

impl EventEmitter {
    /// Creates an emitter with the default configuration and no listeners.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter with the given configuration and no listeners.
    pub fn with_config(cfg: EmitterConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                listeners: RwLock::new(HashMap::new()),
                next_seq: AtomicU64::new(0),
                cfg,
            }),
        }
    }

    /// Returns a builder for non-default settings.
    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::default()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EmitterConfig {
        &self.shared.cfg
    }

    /// Registers `handler` to run whenever `name` is emitted.
    ///
    /// `options` may be `None` or a [`ListenerOptions`]; a missing priority falls back to
    /// `EmitterConfig::default_priority`.
    ///
    /// # Errors
    /// [`EmitterError::InvalidEventName`] if `name` is empty. Nothing is registered then.
    pub fn on(
        &self,
        name: &str,
        handler: Handler,
        options: impl Into<Option<ListenerOptions>>,
    ) -> Result<(), EmitterError> {
        if name.is_empty() {
            return Err(EmitterError::InvalidEventName);
        }
        let priority = options
            .into()
            .and_then(|o| o.priority)
            .unwrap_or(self.shared.cfg.default_priority);
        let seq = self.shared.next_seq.fetch_add(1, Ordering::Relaxed);
        let suspending = handler.is_suspending();
        let listener = Arc::new(Listener::new(handler, priority, seq));

        let mut map = self.shared.listeners.write();
        let sequence = map.entry(name.to_owned()).or_default();
        let at = insertion_point(sequence.as_slice(), priority);
        sequence.insert(at, listener);
        drop(map);

        debug!(
            event = name,
            priority,
            position = at,
            suspending,
            "listener registered"
        );
        Ok(())
    }

    /// Registers a dynamically typed handler value.
    ///
    /// Accepts a boxed [`Handler`] or `Arc<dyn Listen>`; anything else is not callable.
    ///
    /// # Errors
    /// [`EmitterError::InvalidHandler`] (naming the event) if `handler` is not callable,
    /// [`EmitterError::InvalidEventName`] if `name` is empty. Nothing is registered then.
    ///
    /// ```rust
    /// use prio_emitter::{EmitterError, EventEmitter};
    ///
    /// let emitter = EventEmitter::new();
    /// let err = emitter.on_dyn("foo", Box::new(42), None).unwrap_err();
    /// assert!(matches!(err, EmitterError::InvalidHandler { .. }));
    /// assert!(err.to_string().contains("foo"));
    /// assert_eq!(emitter.listener_count("foo"), 0);
    /// ```
    pub fn on_dyn(
        &self,
        name: &str,
        handler: Box<dyn Any + Send>,
        options: impl Into<Option<ListenerOptions>>,
    ) -> Result<(), EmitterError> {
        let handler = match handler.downcast::<Handler>() {
            Ok(h) => *h,
            Err(other) => match other.downcast::<Arc<dyn Listen>>() {
                Ok(l) => Handler::Suspending(*l),
                Err(_) => {
                    warn!(event = name, "rejected non-callable listener");
                    return Err(EmitterError::InvalidHandler {
                        event: name.to_owned(),
                    });
                }
            },
        };
        self.on(name, handler, options)
    }

    /// Delivers `args` to every listener of `name`, in priority order, one at a time.
    ///
    /// Completes once every listener (and every error-event listener triggered by a
    /// failure) has finished. Emitting a name without listeners is a no-op and does not
    /// register the name (see [`event_names`](Self::event_names)).
    ///
    /// Each handler is called with this emitter and `args`.
    ///
    /// # Errors
    /// Listener failures are never returned directly: each one is emitted as the error event.
    /// Only a failure of an error-event listener can escape, as [`EmitterError::Unhandled`],
    /// and only under [`UnhandledPolicy::Propagate`](crate::UnhandledPolicy::Propagate).
    pub async fn emit(&self, name: &str, args: impl Into<Args>) -> Result<(), EmitterError> {
        let args = args.into();
        let listeners = self.snapshot(name);
        if listeners.is_empty() {
            trace!(event = name, "no listeners");
            return Ok(());
        }

        let error_event = self.config().error_event_name();
        for listener in &listeners {
            trace!(
                event = name,
                priority = listener.priority(),
                seq = listener.seq(),
                "invoking listener"
            );
            let Err(failure) = listener.handler().invoke(self, &args).await else {
                continue;
            };
            if name == error_event {
                self.unhandled(name, failure)?;
            } else {
                self.emit_failure(name, failure).await?;
            }
        }
        Ok(())
    }

    /// Number of listeners registered under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.shared.listeners.read().get(name).map_or(0, Vec::len)
    }

    /// Names with at least one registered listener, in unspecified order.
    ///
    /// Entries are created by [`on`](Self::on) only. Emitting a name nobody listens to
    /// leaves no trace here, so the result never contains names that were merely emitted.
    pub fn event_names(&self) -> Vec<String> {
        self.shared.listeners.read().keys().cloned().collect()
    }

    /// Clones the current sequence for `name` so dispatch runs without the lock.
    fn snapshot(&self, name: &str) -> Vec<Arc<Listener>> {
        self.shared
            .listeners
            .read()
            .get(name)
            .map(|seq| seq.to_vec())
            .unwrap_or_default()
    }

    /// Emits `failure` of a listener of `origin` as the error event.
    async fn emit_failure(&self, origin: &str, failure: HandlerError) -> Result<(), EmitterError> {
        let error_event = self.config().error_event_name();
        let listeners = self.snapshot(error_event);
        if listeners.is_empty() {
            warn!(
                event = origin,
                label = failure.as_label(),
                error = %failure,
                "listener failed; no error listener registered"
            );
            return Ok(());
        }

        debug!(
            event = origin,
            label = failure.as_label(),
            "routing listener failure to {error_event:?}"
        );
        let args = Args::from(Value::from(failure));
        for listener in &listeners {
            if let Err(nested) = listener.handler().invoke(self, &args).await {
                self.unhandled(error_event, nested)?;
            }
        }
        Ok(())
    }

    /// Applies the configured policy to a failure of an error-event listener.
    fn unhandled(&self, event: &str, failure: HandlerError) -> Result<(), EmitterError> {
        if self.config().unhandled.propagates() {
            return Err(EmitterError::Unhandled {
                event: event.to_owned(),
                source: Arc::new(failure),
            });
        }
        error!(
            event,
            label = failure.as_label(),
            error = %failure,
            "error listener failed"
        );
        Ok(())
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<String, usize> = self
            .shared
            .listeners
            .read()
            .iter()
            .map(|(name, seq)| (name.clone(), seq.len()))
            .collect();
        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .field("cfg", self.config())
            .finish()
    }
}
