//! Maybe context - an optional value.
//!
//! `Just(v)` holds a value, `Nothing` holds none. Once a chain reaches
//! `Nothing`, no further callback runs. `Maybe::just(Value::Null)` is still a
//! `Just`; use [`Maybe::from_value`] to treat null as absence.
//!
//! Failures raised by a callback are not captured and reach the caller.

use super::{deep_extract, expect_function, expect_variant};
use crate::error::Result;
use crate::value::{Function, Value};

/// The maybe context.
///
/// # Examples
///
/// ```rust
/// use bindery::context::Maybe;
/// use bindery::value::Value;
///
/// assert!(Maybe::from_value(Value::Null).is_nothing());
/// assert_eq!(Maybe::just(3).get_or_else(Value::from(0)), Value::from(3));
/// assert_eq!(Maybe::nothing().get_or_else(Value::from(0)), Value::from(0));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Maybe {
    /// A present value.
    Just(Value),
    /// No value.
    #[default]
    Nothing,
}

impl Maybe {
    /// Wraps `value` as `Just`, even when it is null.
    pub fn just(value: impl Into<Value>) -> Self {
        Self::Just(value.into())
    }

    /// The empty instance.
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// `Nothing` for null, `Just` otherwise.
    pub fn from_value(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => Self::Nothing,
            present => Self::Just(present),
        }
    }

    /// Returns `true` for `Just`.
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Applies `function` to a `Just` value.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by `function`.
    pub fn map(&self, function: &Function) -> Result<Self> {
        match self {
            Self::Just(value) => function.call1(value.clone()).map(Self::Just),
            Self::Nothing => Ok(Self::Nothing),
        }
    }

    /// Applies a `Maybe`-returning `function` to a `Just` value.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `function` returns anything but a `Maybe`.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        match self {
            Self::Just(value) => expect_variant("Maybe::flat_map", function.call1(value.clone())?),
            Self::Nothing => Ok(Self::Nothing),
        }
    }

    /// Applies the boxed function to `argument`'s value when both are `Just`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `self` is `Just` but not a function.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        match (self, argument) {
            (Self::Just(function), Self::Just(value)) => expect_function("Maybe::ap", function)?
                .call1(value.clone())
                .map(Self::Just),
            _ => Ok(Self::Nothing),
        }
    }

    /// Applies the boxed `Maybe`-returning function when both are `Just`.
    ///
    /// # Errors
    ///
    /// As [`Maybe::ap`] and [`Maybe::flat_map`].
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        match (self, argument) {
            (Self::Just(function), Self::Just(value)) => {
                let function = expect_function("Maybe::flat_ap", function)?;
                expect_variant("Maybe::flat_ap", function.call1(value.clone())?)
            }
            _ => Ok(Self::Nothing),
        }
    }

    /// Keeps a `Just` only if `predicate` returns a truthy value for it.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by `predicate`.
    pub fn filter(&self, predicate: &Function) -> Result<Self> {
        match self {
            Self::Just(value) if predicate.call1(value.clone())?.is_truthy() => Ok(self.clone()),
            _ => Ok(Self::Nothing),
        }
    }

    /// The boxed value, or `default` for `Nothing`.
    pub fn get_or_else(&self, default: Value) -> Value {
        match self {
            Self::Just(value) => value.clone(),
            Self::Nothing => default,
        }
    }

    /// `self` if `Just`, otherwise `alternative`.
    #[must_use]
    pub fn or_else(&self, alternative: &Self) -> Self {
        match self {
            Self::Just(_) => self.clone(),
            Self::Nothing => alternative.clone(),
        }
    }

    /// Terminal inspection of both states.
    pub fn fold<T>(&self, on_nothing: impl FnOnce() -> T, on_just: impl FnOnce(&Value) -> T) -> T {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// The boxed value, recursively unwrapped, or null for `Nothing`.
    ///
    /// # Errors
    ///
    /// Propagates a failure from a nested IO effect.
    pub fn extract(&self) -> Result<Value> {
        match self {
            Self::Just(value) => deep_extract(value),
            Self::Nothing => Ok(Value::Null),
        }
    }
}
