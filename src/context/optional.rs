//! Optional context - an optional value with query helpers.
//!
//! Like [`Maybe`](super::Maybe), `map` keeps whatever the callback returns,
//! null included, as `Just`. Null is treated as absent only where asked for:
//! [`Optional::of_nullable`] at construction and [`Optional::filter`] on
//! demand. A chain of lookups that may miss returns `of_nullable` from
//! `flat_map`. Failures raised by callbacks reach the caller.

use super::{deep_extract, expect_function, expect_variant};
use crate::error::Result;
use crate::value::{Function, Value};

/// The optional context.
///
/// # Examples
///
/// ```rust
/// use bindery::context::Optional;
/// use bindery::value::{Function, Value};
///
/// let lookup = Function::unary("lookup", |key| {
///     let found = if key.as_text() == Some("known") { Value::from(1) } else { Value::Null };
///     Ok(Value::from(Optional::of_nullable(found)))
/// });
/// assert_eq!(Optional::just("known").flat_map(&lookup)?, Optional::just(1));
/// assert_eq!(Optional::just("other").flat_map(&lookup)?, Optional::nothing());
/// # Ok::<(), bindery::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Optional {
    /// A present value.
    Just(Value),
    /// No value.
    #[default]
    Nothing,
}

impl Optional {
    /// Wraps `value` as present.
    pub fn just(value: impl Into<Value>) -> Self {
        Self::Just(value.into())
    }

    /// The empty instance.
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// `Nothing` for null, `Just` otherwise.
    pub fn of_nullable(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => Self::Nothing,
            present => Self::Just(present),
        }
    }

    /// Returns `true` for `Just`.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Applies `function`, keeping its result as `Just`.
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

    /// Applies an `Optional`-returning `function`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `function` returns anything but an
    /// `Optional`.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        match self {
            Self::Just(value) => {
                expect_variant("Optional::flat_map", function.call1(value.clone())?)
            }
            Self::Nothing => Ok(Self::Nothing),
        }
    }

    /// Applies the boxed function to `argument`'s value when both are present.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `self` is present but not a function.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        match (self, argument) {
            (Self::Just(function), Self::Just(value)) => expect_function("Optional::ap", function)?
                .call1(value.clone())
                .map(Self::Just),
            _ => Ok(Self::Nothing),
        }
    }

    /// Applies the boxed `Optional`-returning function when both are present.
    ///
    /// # Errors
    ///
    /// As [`Optional::ap`] and [`Optional::flat_map`].
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        match (self, argument) {
            (Self::Just(function), Self::Just(value)) => {
                let function = expect_function("Optional::flat_ap", function)?;
                expect_variant("Optional::flat_ap", function.call1(value.clone())?)
            }
            _ => Ok(Self::Nothing),
        }
    }

    /// Keeps the value only if `predicate` returns a truthy value for it.
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

    /// The value, or `default` when empty.
    pub fn or_else(&self, default: Value) -> Value {
        match self {
            Self::Just(value) => value.clone(),
            Self::Nothing => default,
        }
    }

    /// The value, or the result of calling `supplier` with no arguments.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by `supplier`.
    pub fn or_else_get(&self, supplier: &Function) -> Result<Value> {
        match self {
            Self::Just(value) => Ok(value.clone()),
            Self::Nothing => supplier.call(&[]),
        }
    }

    /// Terminal inspection of both states.
    pub fn fold<T>(&self, on_nothing: impl FnOnce() -> T, on_just: impl FnOnce(&Value) -> T) -> T {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// The value, recursively unwrapped, or null when empty.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{compose, constant, identity};
    use crate::error::Error;
    use crate::test_support::{add_one, raise};
    use rstest::rstest;

    #[rstest]
    fn of_nullable_treats_null_as_absent() {
        assert_eq!(Optional::of_nullable(Value::Null), Optional::nothing());
        assert_eq!(Optional::of_nullable(0), Optional::just(0));
    }

    #[rstest]
    fn map_keeps_null_results_present() {
        let to_null = Function::unary("to_null", |_| Ok(Value::Null));
        assert_eq!(
            Optional::just(1).map(&to_null).unwrap(),
            Optional::just(Value::Null)
        );
        assert_eq!(Optional::just(1).map(&add_one()).unwrap(), Optional::just(2));
    }

    #[rstest]
    fn null_value_survives_identity_and_composition() {
        let present_null = Optional::just(Value::Null);
        assert_eq!(present_null.map(&identity()).unwrap(), present_null);

        let to_null = Function::unary("to_null", |_| Ok(Value::Null));
        let one = constant(1);
        let composed = Optional::just(5).map(&compose([one.clone(), to_null.clone()]));
        let chained = Optional::just(5)
            .map(&to_null)
            .and_then(|optional| optional.map(&one));
        assert_eq!(composed.unwrap(), Optional::just(1));
        assert_eq!(chained.unwrap(), Optional::just(1));
    }

    #[rstest]
    fn ap_keeps_null_results_present() {
        let function = Optional::just(Value::from(Function::unary("to_null", |_| Ok(Value::Null))));
        assert_eq!(
            function.ap(&Optional::just(1)).unwrap(),
            Optional::just(Value::Null)
        );
    }

    #[rstest]
    fn filter_treats_null_as_falsy() {
        let truthy = Function::unary("truthy", |value| Ok(Value::from(value.is_truthy())));
        assert!(Optional::just(Value::Null).filter(&truthy).unwrap().is_empty());
    }

    #[rstest]
    fn map_propagates_raised_failures() {
        assert_eq!(Optional::just(1).map(&raise("x")), Err(Error::raised("x")));
        assert_eq!(Optional::nothing().map(&raise("x")).unwrap(), Optional::nothing());
    }

    #[rstest]
    fn flat_map_requires_an_optional() {
        let wrap = Function::unary("wrap", |value| Ok(Value::from(Optional::just(value))));
        assert_eq!(Optional::just(2).flat_map(&wrap).unwrap(), Optional::just(2));
        assert!(matches!(
            Optional::just(2).flat_map(&add_one()),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[rstest]
    fn ap_applies_when_both_present() {
        let function = Optional::just(Value::from(add_one()));
        assert_eq!(function.ap(&Optional::just(1)).unwrap(), Optional::just(2));
        assert_eq!(function.ap(&Optional::nothing()).unwrap(), Optional::nothing());
    }

    #[rstest]
    fn defaults_apply_only_when_empty() {
        let supplier = Function::nullary("supplier", || Ok(Value::from("supplied")));
        assert_eq!(Optional::nothing().or_else(Value::from(5)), Value::from(5));
        assert_eq!(Optional::just(1).or_else(Value::from(5)), Value::from(1));
        assert_eq!(
            Optional::nothing().or_else_get(&supplier).unwrap(),
            Value::from("supplied")
        );
    }

    #[rstest]
    fn filter_drops_falsy_values() {
        let non_empty = Function::unary("non_empty", |value| Ok(Value::from(value.is_truthy())));
        assert!(Optional::just("").filter(&non_empty).unwrap().is_empty());
        assert!(Optional::just("a").filter(&non_empty).unwrap().is_present());
    }
}
