//! Constant context - holds a value that no mapping can change.
//!
//! `map`, `flat_map` and `ap` never call their callback. This is what makes a
//! lens getter work: the focused value rides through the setter untouched.

use super::deep_extract;
use crate::error::Result;
use crate::value::{Function, Value};

/// The constant context.
///
/// # Examples
///
/// ```rust
/// use bindery::context::Constant;
/// use bindery::value::{Function, Value};
///
/// let never = Function::unary("never", |_| unreachable!());
/// let kept = Constant::new(10).map(&never);
/// assert_eq!(kept.value(), &Value::from(10));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Constant(Value);

impl Constant {
    /// Wraps `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Borrows the boxed value.
    pub const fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the context and returns the boxed value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Returns an equal instance without calling `function`.
    #[must_use]
    pub fn map(&self, _function: &Function) -> Self {
        self.clone()
    }

    /// Returns an equal instance without calling `function`.
    #[must_use]
    pub fn flat_map(&self, _function: &Function) -> Self {
        self.clone()
    }

    /// Returns an equal instance, ignoring `argument`.
    #[must_use]
    pub fn ap(&self, _argument: &Self) -> Self {
        self.clone()
    }

    /// Unwraps the boxed value, recursively.
    ///
    /// # Errors
    ///
    /// Propagates a failure from a nested IO effect.
    pub fn extract(&self) -> Result<Value> {
        deep_extract(&self.0)
    }
}
