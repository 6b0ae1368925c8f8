//! Either context - success (`Right`) or failure (`Left`).
//!
//! Either is one of the two contexts that capture failures. When a callback
//! passed to `map`, `flat_map`, `ap` or `flat_ap` returns `Err`, the result is
//! a `Left` whose payload is the error's message. Once `Left`, a chain never
//! calls another callback; the state is observed only through [`Either::fold`],
//! [`Either::extract`] or a transform.
//!
//! A `flat_map` callback that returns something other than an `Either` is a
//! contract violation and is reported immediately as an error rather than
//! captured.

use super::{capture_failure, deep_extract, expect_function, expect_variant};
use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// The either context.
///
/// # Examples
///
/// ```rust
/// use bindery::Error;
/// use bindery::context::Either;
/// use bindery::value::{Function, Value};
///
/// let must_contain_at = Function::unary("must_contain_at", |value| {
///     if value.as_text().is_some_and(|text| text.contains('@')) {
///         Ok(value)
///     } else {
///         Err(Error::raised("missing @"))
///     }
/// });
///
/// assert!(Either::right("a@b.com").map(&must_contain_at).is_right());
/// assert_eq!(Either::right("ab.com").map(&must_contain_at), Either::left("missing @"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Either {
    /// The failure state.
    Left(Value),
    /// The success state.
    Right(Value),
}

impl Either {
    /// A success holding `value`.
    pub fn right(value: impl Into<Value>) -> Self {
        Self::Right(value.into())
    }

    /// A failure holding `value`.
    pub fn left(value: impl Into<Value>) -> Self {
        Self::Left(value.into())
    }

    /// Returns `true` for `Right`.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` for `Left`.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Builds a `Right` from `Ok` and a `Left` carrying the message from `Err`.
    pub fn from_result(result: Result<Value>, operation: &'static str) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::captured(operation, &error),
        }
    }

    fn captured(operation: &'static str, error: &Error) -> Self {
        Self::Left(Value::from(capture_failure(operation, error)))
    }

    /// Applies `function` to a `Right` value, capturing a failure as `Left`.
    #[must_use]
    pub fn map(&self, function: &Function) -> Self {
        match self {
            Self::Right(value) => Self::from_result(function.call1(value.clone()), "Either::map"),
            Self::Left(_) => self.clone(),
        }
    }

    /// Applies `function` to a `Left` payload.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by `function`; there is no state left to
    /// capture it into.
    pub fn map_left(&self, function: &Function) -> Result<Self> {
        match self {
            Self::Left(value) => function.call1(value.clone()).map(Self::Left),
            Self::Right(_) => Ok(self.clone()),
        }
    }

    /// Applies an `Either`-returning `function` to a `Right` value.
    ///
    /// A failure raised by `function` becomes a `Left`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `function` returns anything but an `Either`.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        match self {
            Self::Right(value) => match function.call1(value.clone()) {
                Ok(result) => expect_variant("Either::flat_map", result),
                Err(error) => Ok(Self::captured("Either::flat_map", &error)),
            },
            Self::Left(_) => Ok(self.clone()),
        }
    }

    /// Applies the function in a `Right` to the value in `argument`.
    ///
    /// The first `Left` among the two wins.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `self` is `Right` but not a function.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        match (self, argument) {
            (Self::Right(function), Self::Right(value)) => {
                let function = expect_function("Either::ap", function)?;
                Ok(Self::from_result(function.call1(value.clone()), "Either::ap"))
            }
            (Self::Left(_), _) => Ok(self.clone()),
            (_, Self::Left(_)) => Ok(argument.clone()),
        }
    }

    /// Applies the `Either`-returning function in a `Right` to `argument`.
    ///
    /// # Errors
    ///
    /// As [`Either::ap`] and [`Either::flat_map`].
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        match (self, argument) {
            (Self::Right(function), Self::Right(value)) => {
                let function = expect_function("Either::flat_ap", function)?;
                match function.call1(value.clone()) {
                    Ok(result) => expect_variant("Either::flat_ap", result),
                    Err(error) => Ok(Self::captured("Either::flat_ap", &error)),
                }
            }
            (Self::Left(_), _) => Ok(self.clone()),
            (_, Self::Left(_)) => Ok(argument.clone()),
        }
    }

    /// Terminal inspection of both states.
    pub fn fold<T>(&self, on_left: impl FnOnce(&Value) -> T, on_right: impl FnOnce(&Value) -> T) -> T {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// The `Right` value, or `default` for `Left`.
    pub fn get_or_else(&self, default: Value) -> Value {
        match self {
            Self::Right(value) => value.clone(),
            Self::Left(_) => default,
        }
    }

    /// `self` if `Right`, otherwise `alternative`.
    #[must_use]
    pub fn or_else(&self, alternative: &Self) -> Self {
        match self {
            Self::Right(_) => self.clone(),
            Self::Left(_) => alternative.clone(),
        }
    }

    /// Borrows the `Left` payload, if any.
    pub const fn left_value(&self) -> Option<&Value> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the `Right` value, if any.
    pub const fn right_value(&self) -> Option<&Value> {
        match self {
            Self::Right(value) => Some(value),
            Self::Left(_) => None,
        }
    }

    /// Unwraps either payload, recursively.
    ///
    /// # Errors
    ///
    /// Propagates a failure from a nested IO effect.
    pub fn extract(&self) -> Result<Value> {
        match self {
            Self::Left(value) | Self::Right(value) => deep_extract(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Maybe;
    use crate::test_support::{add_one, double, raise};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn map_chains_on_right() {
        assert_eq!(Either::right(5).map(&add_one()).map(&double()), Either::right(12));
    }

    #[rstest]
    fn left_never_invokes_callbacks() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let counting = Function::unary("counting", move |value| {
            counter.set(counter.get() + 1);
            Ok(value)
        });
        let left = Either::left("stop");
        assert_eq!(left.map(&counting), left);
        assert_eq!(left.flat_map(&counting).unwrap(), left);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn map_captures_the_raised_message() {
        assert_eq!(Either::right(1).map(&raise("went wrong")), Either::left("went wrong"));
    }

    #[rstest]
    fn captured_failures_stop_the_chain() {
        let result = Either::right(1).map(&raise("first")).map(&raise("second"));
        assert_eq!(result, Either::left("first"));
    }

    #[rstest]
    fn flat_map_captures_failures_but_reports_mismatches() {
        assert_eq!(
            Either::right(1).flat_map(&raise("inner")).unwrap(),
            Either::left("inner")
        );

        let wrong = Function::unary("wrong", |value| Ok(Value::from(Maybe::just(value))));
        assert_eq!(
            Either::right(1).flat_map(&wrong),
            Err(Error::type_mismatch(
                "Either::flat_map",
                crate::context::Family::Either,
                crate::context::Family::Maybe
            ))
        );
    }

    #[rstest]
    fn flat_map_passes_left_results_through() {
        let reject = Function::unary("reject", |_| Ok(Value::from(Either::left("rejected"))));
        assert_eq!(Either::right(1).flat_map(&reject).unwrap(), Either::left("rejected"));
    }

    #[rstest]
    #[case(Either::right(Value::from(add_one())), Either::right(1), Either::right(2))]
    #[case(Either::left("f"), Either::right(1), Either::left("f"))]
    #[case(Either::right(Value::from(add_one())), Either::left("x"), Either::left("x"))]
    #[case(Either::left("f"), Either::left("x"), Either::left("f"))]
    fn ap_short_circuits_on_the_first_left(
        #[case] function: Either,
        #[case] argument: Either,
        #[case] expected: Either,
    ) {
        assert_eq!(function.ap(&argument).unwrap(), expected);
    }

    #[rstest]
    fn ap_captures_failures() {
        let function = Either::right(Value::from(raise("ap failed")));
        assert_eq!(function.ap(&Either::right(1)).unwrap(), Either::left("ap failed"));
    }

    #[rstest]
    fn map_left_touches_only_left() {
        let shout = Function::unary("shout", |value| {
            Ok(Value::from(value.to_string().to_uppercase()))
        });
        assert_eq!(Either::left("no").map_left(&shout).unwrap(), Either::left("NO"));
        assert_eq!(Either::right("ok").map_left(&shout).unwrap(), Either::right("ok"));
    }

    #[rstest]
    fn fold_and_accessors() {
        assert_eq!(Either::right(1).fold(|_| "left", |_| "right"), "right");
        assert_eq!(Either::left(1).fold(|_| "left", |_| "right"), "left");
        assert_eq!(Either::left(1).get_or_else(Value::from(0)), Value::from(0));
        assert_eq!(Either::left(1).or_else(&Either::right(2)), Either::right(2));
        assert_eq!(Either::left(1).left_value(), Some(&Value::from(1)));
        assert_eq!(Either::left(1).right_value(), None);
    }

    #[rstest]
    fn extract_returns_either_payload() {
        assert_eq!(Either::left("e").extract().unwrap(), Value::from("e"));
        assert_eq!(Either::right(3).extract().unwrap(), Value::from(3));
    }
}
