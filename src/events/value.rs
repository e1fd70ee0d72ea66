//! # Argument values.
//!
//! [`Value`] is the unit of payload passed to listeners. It covers the common scalar
//! shapes, nested lists, handler failures (carried by the error event) and opaque
//! payloads of any type.
//!
//! ## Equality
//! Scalars and lists compare structurally. [`Value::Error`] and [`Value::Any`] compare
//! by identity (`Arc::ptr_eq`): two distinct payloads are never equal, a clone is.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::HandlerError;

/// A single positional argument.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 string.
    Str(Arc<str>),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Failure of a listener; the sole argument of the error event.
    Error(Arc<HandlerError>),
    /// Opaque payload, compared by identity.
    Any(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wraps an arbitrary payload as [`Value::Any`].
    pub fn any<T: Any + Send + Sync>(payload: T) -> Self {
        Value::Any(Arc::new(payload))
    }

    /// Returns the string slice if this is [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean if this is [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the carried failure if this is [`Value::Error`].
    pub fn as_error(&self) -> Option<&HandlerError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Downcasts an opaque payload to `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Any(payload) => payload.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => Arc::ptr_eq(a, b),
            (Value::Any(a), Value::Any(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Value::Any(_) => f.write_str("Any(..)"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<HandlerError> for Value {
    fn from(err: HandlerError) -> Self {
        Value::Error(Arc::new(err))
    }
}

impl From<Arc<HandlerError>> for Value {
    fn from(err: Arc<HandlerError>) -> Self {
        Value::Error(err)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
