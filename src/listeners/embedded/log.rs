//! # LogWriter — simple failure printer
//!
//! A minimal listener meant for the error event. It prints each carried failure to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [handler-failed] err="connection refused"
//! [handler-panicked] info="index out of bounds"
//! [error-event] args=[Str("not a failure")]
//! ```

use async_trait::async_trait;

use crate::core::EventEmitter;
use crate::error::HandlerError;
use crate::events::{Args, Value};
use crate::listeners::{HandlerResult, Listen};

/// Error-event writer.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn line(args: &[Value]) -> String {
        match args.first().and_then(Value::as_error) {
            Some(HandlerError::Panicked { info }) => format!("[handler-panicked] info={info:?}"),
            Some(err) => {
                let tag = err.as_label().replace('_', "-");
                format!("[{tag}] err={:?}", err.to_string())
            }
            None => format!("[error-event] args={args:?}"),
        }
    }
}

#[async_trait]
impl Listen for LogWriter {
    async fn on_event(&self, _emitter: &EventEmitter, args: Args) -> HandlerResult {
        println!("{}", Self::line(&args));
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
