//! # Shared positional arguments.
//!
//! [`Args`] wraps an `Arc<[Value]>`: cloning it is a reference-count bump, which lets
//! suspending listeners own their arguments across `.await` points.
//!
//! ## Example
//! ```rust
//! use prio_emitter::{args, Args, Value};
//!
//! let a: Args = args!["a", 42, true];
//! assert_eq!(a.len(), 3);
//! assert_eq!(a[1], Value::Int(42));
//!
//! let empty = Args::empty();
//! assert!(empty.is_empty());
//! ```

use std::ops::Deref;
use std::sync::Arc;

use super::value::Value;

/// Ordered argument list passed identically to every listener of one emission.
#[derive(Clone, Debug, PartialEq)]
pub struct Args(Arc<[Value]>);

impl Args {
    /// Returns an empty argument list.
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Returns the arguments as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Returns the argument at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Args {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(Arc::from(values))
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Self::from(vec![value])
    }
}

impl<const N: usize> From<[Value; N]> for Args {
    fn from(values: [Value; N]) -> Self {
        Self(Arc::from(Vec::from(values)))
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds [`Args`] from a list of expressions convertible into [`Value`].
///
/// ```rust
/// use prio_emitter::{args, Value};
///
/// let a = prio_emitter::args!["x", 1.5, Value::Null];
/// assert_eq!(a.as_slice(), &[Value::from("x"), Value::Float(1.5), Value::Null]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from(vec![$($crate::Value::from($value)),+])
    };
}
