//! Event payloads: argument values passed to listeners.
//!
//! ## Contents
//! - [`Value`] a single positional argument
//! - [`Args`]  the ordered, shared argument list handed to every listener of one `emit`
//! - [`args!`](crate::args) macro building [`Args`] from heterogeneous literals
//!
//! Every listener of a single `emit` receives the **same** [`Args`] (an `Arc`-backed slice),
//! so fan-out never clones the individual values.

mod args;
mod value;

pub use args::Args;
pub use value::Value;
