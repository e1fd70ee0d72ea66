//! # Handlers: synchronous closures and suspending listeners.
//!
//! A [`Handler`] is tagged explicitly with one of two variants:
//! - [`Handler::Sync`] wraps `Fn(&EventEmitter, &[Value]) -> Result<(), HandlerError>`;
//!   it is complete when it returns.
//! - [`Handler::Suspending`] wraps an [`Listen`] implementation; the dispatcher polls its future
//!   to completion before the next listener runs.
//!
//! Both receive the emitter that dispatched them, so a handler can register listeners or
//! emit follow-up events without holding on to the emitter itself.
//!
//! Closures returning futures are adapted by [`ListenFn`]; step streams (one item per
//! suspension point) by [`Handler::steps`].
//!
//! ## Example
//! ```rust
//! use prio_emitter::{Args, EventEmitter, Handler, HandlerError};
//!
//! let sync = Handler::sync(|_emitter, args| {
//!     if args.is_empty() {
//!         return Err(HandlerError::failed("no args"));
//!     }
//!     Ok(())
//! });
//!
//! let suspending = Handler::suspending(|emitter: EventEmitter, args: Args| async move {
//!     emitter.emit("seen", args).await.map_err(HandlerError::from_error)
//! });
//!
//! assert!(!sync.is_suspending());
//! assert!(suspending.is_suspending());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::{FutureExt, Stream, TryStreamExt};

use crate::core::EventEmitter;
use crate::error::HandlerError;
use crate::events::{Args, Value};

/// Result returned by every handler.
pub type HandlerResult = Result<(), HandlerError>;

/// Closure type of synchronous handlers.
pub type SyncFn = dyn Fn(&EventEmitter, &[Value]) -> HandlerResult + Send + Sync;

/// # Suspending listener.
///
/// Implement this for handler types that carry their own state; closures are
/// usually simpler via [`Handler::suspending`].
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use prio_emitter::{Args, EventEmitter, HandlerError, Listen};
///
/// struct Audit;
///
/// #[async_trait]
/// impl Listen for Audit {
///     async fn on_event(&self, emitter: &EventEmitter, args: Args) -> Result<(), HandlerError> {
///         if args.is_empty() {
///             emitter.emit("audit-empty", ()).await.map_err(HandlerError::from_error)?;
///         }
///         Ok(())
///     }
///
///     fn name(&self) -> &str { "audit" }
/// }
/// ```
#[async_trait]
pub trait Listen: Send + Sync + 'static {
    /// Handles one emission of `emitter`.
    ///
    /// Runs to completion before the next listener of the same emission starts.
    /// Panics are caught and reported as [`HandlerError::Panicked`].
    async fn on_event(&self, emitter: &EventEmitter, args: Args) -> HandlerResult;

    /// Returns the listener name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Function-backed suspending listener.
///
/// Wraps a closure that creates a new future per emission. The closure gets its own
/// handle to the emitter, released when the future completes.
pub struct ListenFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenFn<F> {
    /// Creates a new function-backed listener.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Listen for ListenFn<F>
where
    F: Fn(EventEmitter, Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn on_event(&self, emitter: &EventEmitter, args: Args) -> HandlerResult {
        (self.f)(emitter.clone(), args).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A callable registered under an event name.
#[derive(Clone)]
pub enum Handler {
    /// Complete when the closure returns.
    Sync(Arc<SyncFn>),
    /// Driven to completion across its suspension points.
    Suspending(Arc<dyn Listen>),
}

impl Handler {
    /// Wraps a synchronous closure.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&EventEmitter, &[Value]) -> HandlerResult + Send + Sync + 'static,
    {
        Handler::Sync(Arc::new(f))
    }

    /// Wraps a closure returning a future.
    pub fn suspending<F, Fut>(f: F) -> Self
    where
        F: Fn(EventEmitter, Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Handler::Suspending(ListenFn::arc("suspending", f))
    }

    /// Wraps a closure producing a stream of steps.
    ///
    /// Each item marks a suspension point. The stream is drained to its end;
    /// the first `Err` item fails the handler and the remaining steps are not polled.
    ///
    /// ```rust
    /// use futures::stream;
    /// use prio_emitter::{Handler, HandlerError};
    ///
    /// let h = Handler::steps(|_, _| stream::iter(vec![Ok::<(), HandlerError>(()), Ok(())]));
    /// assert!(h.is_suspending());
    /// ```
    pub fn steps<F, S>(f: F) -> Self
    where
        F: Fn(EventEmitter, Args) -> S + Send + Sync + 'static,
        S: Stream<Item = HandlerResult> + Send + 'static,
    {
        Handler::Suspending(ListenFn::arc("steps", move |emitter, args| {
            let steps = f(emitter, args);
            async move { steps.try_collect::<()>().await }
        }))
    }

    /// Wraps an existing [`Listen`] implementation.
    pub fn listener(l: Arc<dyn Listen>) -> Self {
        Handler::Suspending(l)
    }

    /// Returns `true` for [`Handler::Suspending`].
    pub fn is_suspending(&self) -> bool {
        matches!(self, Handler::Suspending(_))
    }

    /// Runs the handler to completion, converting panics into [`HandlerError::Panicked`].
    pub(crate) async fn invoke(&self, emitter: &EventEmitter, args: &Args) -> HandlerResult {
        match self {
            Handler::Sync(f) => {
                std::panic::catch_unwind(AssertUnwindSafe(|| f(emitter, args.as_slice())))
                    .unwrap_or_else(|payload| Err(HandlerError::from_panic(payload)))
            }
            Handler::Suspending(l) => {
                let fut = l.on_event(emitter, args.clone());
                AssertUnwindSafe(fut)
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|payload| Err(HandlerError::from_panic(payload)))
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Sync(_) => f.write_str("Handler::Sync"),
            Handler::Suspending(l) => write!(f, "Handler::Suspending({})", l.name()),
        }
    }
}

impl From<Arc<dyn Listen>> for Handler {
    fn from(l: Arc<dyn Listen>) -> Self {
        Handler::Suspending(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::{StreamExt, stream};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn sync_handler_sees_arguments() {
        let seen = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&seen);
        let h = Handler::sync(move |_, args| {
            s.store(args.len(), Ordering::SeqCst);
            Ok(())
        });

        block_on(h.invoke(&EventEmitter::new(), &crate::args![1, 2, 3])).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn sync_panic_becomes_failure() {
        let h = Handler::sync(|_, _| panic!("sync boom"));
        let err = block_on(h.invoke(&EventEmitter::new(), &Args::empty())).unwrap_err();
        assert_eq!(err.as_message(), "panic: sync boom");
    }

    #[test]
    fn suspending_panic_becomes_failure() {
        let h = Handler::suspending(|_, _| async {
            futures::future::ready(()).await;
            if std::hint::black_box(true) {
                panic!("async boom");
            }
            Ok(())
        });
        let err = block_on(h.invoke(&EventEmitter::new(), &Args::empty())).unwrap_err();
        assert_eq!(err.as_label(), "handler_panicked");
    }

    #[test]
    fn steps_stop_at_first_failure() {
        let polled = Arc::new(AtomicUsize::new(0));
        let p = Arc::clone(&polled);
        let h = Handler::steps(move |_, _| {
            let p = Arc::clone(&p);
            stream::iter(vec![
                Ok(()),
                Err(HandlerError::failed("step two")),
                Ok(()),
            ])
            .inspect(move |_| {
                p.fetch_add(1, Ordering::SeqCst);
            })
        });

        let err = block_on(h.invoke(&EventEmitter::new(), &Args::empty())).unwrap_err();
        assert_eq!(err.as_message(), "error: step two");
        assert_eq!(polled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_names_the_variant() {
        let h = Handler::suspending(|_, _| async { Ok(()) });
        assert_eq!(format!("{h:?}"), "Handler::Suspending(suspending)");
        assert_eq!(format!("{:?}", Handler::sync(|_, _| Ok(()))), "Handler::Sync");
    }

    #[test]
    fn handlers_receive_the_dispatching_emitter() {
        let emitter = EventEmitter::new();
        emitter.on("marker", Handler::sync(|_, _| Ok(())), None).unwrap();

        let sync = Handler::sync(|em, _| {
            assert_eq!(em.listener_count("marker"), 1);
            Ok(())
        });
        block_on(sync.invoke(&emitter, &Args::empty())).unwrap();

        let suspending = Handler::suspending(|em, _| async move {
            assert_eq!(em.listener_count("marker"), 1);
            Ok(())
        });
        block_on(suspending.invoke(&emitter, &Args::empty())).unwrap();
    }
}
