//! Dynamically-shaped values flowing through contexts and combinators.
//!
//! Curried accumulators, partial applications and lifted functions accept
//! arguments of any shape and count, so everything they touch is a [`Value`].
//! A value is either plain data, a [`Context`] or a [`Function`].
//!
//! # Examples
//!
//! ```rust
//! use bindery::value::{Value, ValueKind};
//!
//! let number = Value::from(42);
//! assert_eq!(number.kind(), ValueKind::Integer);
//! assert_eq!(number.as_integer(), Some(42));
//!
//! let text = Value::from("hello");
//! assert_eq!(text.to_string(), "hello");
//! ```

mod function;

use std::fmt;

pub use function::{Arity, Callable, Function};

use crate::context::Context;
use crate::error::{Error, Result};

/// A dynamically-shaped value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Real(f64),
    /// A string.
    Text(String),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// A boxed computation context.
    Context(Box<Context>),
    /// A callable value.
    Function(Function),
}

/// The kind of a [`Value`], used for typed contexts and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Real`]
    Real,
    /// [`Value::Text`]
    Text,
    /// [`Value::List`]
    List,
    /// [`Value::Context`]
    Context,
    /// [`Value::Function`]
    Function,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Text => "text",
            Self::List => "list",
            Self::Context => "context",
            Self::Function => "function",
        };
        formatter.write_str(name)
    }
}

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
            Self::Context(_) => ValueKind::Context,
            Self::Function(_) => ValueKind::Function,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Loose truthiness: null, `false`, zero, and empty text or lists are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Integer(number) => *number != 0,
            Self::Real(number) => *number != 0.0,
            Self::Text(text) => !text.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Context(_) | Self::Function(_) => true,
        }
    }

    /// Returns the boolean payload, if any.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the numeric payload as a real; integers are widened.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Integer(number) => Some(*number as f64),
            Self::Real(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the list payload, if any.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the boxed context, if any.
    pub fn as_context(&self) -> Option<&Context> {
        match self {
            Self::Context(context) => Some(context),
            _ => None,
        }
    }

    /// Consumes the value and returns the boxed context, if any.
    pub fn into_context(self) -> Option<Context> {
        match self {
            Self::Context(context) => Some(*context),
            _ => None,
        }
    }

    /// Returns the function payload, if any.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Calls the value as a function.
    ///
    /// Curried accumulators return their next step as a `Value::Function`, so
    /// this keeps chained calls short.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when the value is not a function, and
    /// whatever the function itself returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::compose::curry_n;
    /// use bindery::value::{Function, Value};
    ///
    /// let add = Function::ternary("add", |a, b, c| {
    ///     Ok(Value::from(a.as_integer().unwrap_or(0) + b.as_integer().unwrap_or(0) + c.as_integer().unwrap_or(0)))
    /// });
    /// let curried = curry_n(3, add);
    /// let result = curried
    ///     .call(&[Value::from(1)])?
    ///     .call(&[Value::from(2)])?
    ///     .call(&[Value::from(3)])?;
    /// assert_eq!(result, Value::from(6));
    /// # Ok::<(), bindery::Error>(())
    /// ```
    pub fn call(&self, arguments: &[Self]) -> Result<Self> {
        match self {
            Self::Function(function) => function.call(arguments),
            other => Err(Error::type_mismatch(
                "Value::call",
                ValueKind::Function,
                other.kind(),
            )),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Real(number) => write!(formatter, "{number}"),
            Self::Text(text) => formatter.write_str(text),
            Self::List(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Context(context) => write!(formatter, "{context:?}"),
            Self::Function(function) => write!(formatter, "<function {}>", function.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Real(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Context> for Value {
    fn from(context: Context) -> Self {
        Self::Context(Box::new(context))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}
