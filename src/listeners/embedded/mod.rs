//! # Built-in listeners
//!
//! Small, self-contained implementations useful for demos and debugging.
//!
//! - [`LogWriter`]: prints error-event failures in a human-readable form.

mod log;

pub use log::LogWriter;
