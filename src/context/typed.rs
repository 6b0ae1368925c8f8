//! Typed context - a value constrained to a single [`ValueKind`].
//!
//! Construction validates the value and fails immediately on a mismatch; so
//! does every `map` whose result has the wrong kind. `flat_map` expects a
//! `Typed` of the same kind.

use super::{Family, deep_extract, expect_function, expect_variant};
use crate::error::{Error, Result};
use crate::value::{Function, Value, ValueKind};

/// The typed context.
///
/// # Examples
///
/// ```rust
/// use bindery::context::Typed;
/// use bindery::value::{Function, Value, ValueKind};
///
/// let typed = Typed::new(ValueKind::Integer, 4)?;
/// assert_eq!(typed.value(), &Value::from(4));
///
/// assert!(Typed::new(ValueKind::Integer, "four").is_err());
///
/// let stringify = Function::unary("stringify", |value| Ok(Value::from(value.to_string())));
/// assert!(typed.map(&stringify).is_err());
/// # Ok::<(), bindery::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Typed {
    kind: ValueKind,
    value: Value,
}

impl Typed {
    /// Wraps `value`, which must be of `kind`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when the kinds differ.
    pub fn new(kind: ValueKind, value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        Self::validate("Typed::new", kind, &value)?;
        Ok(Self { kind, value })
    }

    /// Wraps `value`, constrained to its own kind.
    pub fn infer(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            kind: value.kind(),
            value,
        }
    }

    fn validate(operation: &'static str, kind: ValueKind, value: &Value) -> Result<()> {
        if value.kind() == kind {
            Ok(())
        } else {
            Err(Error::invalid_argument(
                operation,
                format!("expected a {kind} value, found {}", value.kind()),
            ))
        }
    }

    /// The required kind.
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Borrows the value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Applies `function`; the result must keep the required kind.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by `function`, and rejects results of
    /// another kind.
    pub fn map(&self, function: &Function) -> Result<Self> {
        let value = function.call1(self.value.clone())?;
        Self::validate("Typed::map", self.kind, &value)?;
        Ok(Self {
            kind: self.kind,
            value,
        })
    }

    /// Applies a `Typed`-returning `function`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `function` returns anything but a `Typed`
    /// of the same kind.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        let next = expect_variant("Typed::flat_map", function.call1(self.value.clone())?)?;
        self.same_kind("Typed::flat_map", next)
    }

    fn same_kind(&self, operation: &'static str, next: Self) -> Result<Self> {
        if next.kind == self.kind {
            Ok(next)
        } else {
            Err(Error::type_mismatch(
                operation,
                format!("{} of {}", Family::Typed, self.kind),
                format!("{} of {}", Family::Typed, next.kind),
            ))
        }
    }

    /// Applies the boxed function to `argument`'s value; the result is
    /// constrained to `argument`'s kind.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the boxed value is not a function, and an
    /// invalid-argument error if the result has the wrong kind.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        let value = expect_function("Typed::ap", &self.value)?.call1(argument.value.clone())?;
        Self::validate("Typed::ap", argument.kind, &value)?;
        Ok(Self {
            kind: argument.kind,
            value,
        })
    }

    /// Applies the boxed `Typed`-returning function to `argument`'s value.
    ///
    /// # Errors
    ///
    /// As [`Typed::ap`] and [`Typed::flat_map`].
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        let function = expect_function("Typed::flat_ap", &self.value)?;
        let next = expect_variant("Typed::flat_ap", function.call1(argument.value.clone())?)?;
        argument.same_kind("Typed::flat_ap", next)
    }

    /// Unwraps the value, recursively.
    ///
    /// # Errors
    ///
    /// Propagates a failure from a nested IO effect.
    pub fn extract(&self) -> Result<Value> {
        deep_extract(&self.value)
    }
}
