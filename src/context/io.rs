//! IO context - a deferred, re-invokable effect.
//!
//! An `IO` describes a computation but does not perform it. `map`, `flat_map`,
//! `ap` and `flat_ap` compose new effects without running anything; only
//! [`IO::run`] (or [`IO::extract`]) executes the effect, and it may be run any
//! number of times. Failures raised while running are returned to the caller,
//! never captured.
//!
//! Because nothing runs until invocation, the family check performed by
//! `flat_map` happens when the composed effect runs, at the moment the
//! callback returns.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use bindery::context::IO;
//! use bindery::value::{Function, Value};
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//! let io = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     Ok(Value::from(20))
//! });
//! let add_one = Function::unary("add_one", |value| {
//!     Ok(Value::from(value.as_integer().unwrap_or(0) + 1))
//! });
//!
//! let composed = io.map(&add_one);
//! assert_eq!(runs.get(), 0);
//!
//! assert_eq!(composed.run()?, Value::from(21));
//! assert_eq!(composed.run()?, Value::from(21));
//! assert_eq!(runs.get(), 2);
//! # Ok::<(), bindery::Error>(())
//! ```

use super::{deep_extract, expect_function, expect_variant};
use crate::error::Result;
use crate::value::{Function, Value};

/// The IO context.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct IO {
    effect: Function,
}

impl IO {
    /// Wraps `effect`; it is not run here.
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn() -> Result<Value> + 'static,
    {
        Self {
            effect: Function::nullary("io", effect),
        }
    }

    /// An effect that always yields `value`.
    pub fn of(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move || Ok(value.clone()))
    }

    /// Uses `function`, invoked with no arguments, as the effect.
    pub const fn from_function(function: Function) -> Self {
        Self { effect: function }
    }

    /// The underlying effect.
    pub const fn effect(&self) -> &Function {
        &self.effect
    }

    /// Runs the effect.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by the effect.
    pub fn run(&self) -> Result<Value> {
        self.effect.call(&[])
    }

    /// Composes `function` after the effect without running either.
    #[must_use]
    pub fn map(&self, function: &Function) -> Self {
        let effect = self.effect.clone();
        let function = function.clone();
        Self::new(move || function.call1(effect.call(&[])?))
    }

    /// Composes an `IO`-returning `function` after the effect.
    ///
    /// When run, the result of `function` must be an `IO`, which is then run.
    #[must_use]
    pub fn flat_map(&self, function: &Function) -> Self {
        let effect = self.effect.clone();
        let function = function.clone();
        Self::new(move || {
            let next: Self = expect_variant("IO::flat_map", function.call1(effect.call(&[])?)?)?;
            next.run()
        })
    }

    /// When run, applies the function produced by `self` to the value
    /// produced by `argument`.
    #[must_use]
    pub fn ap(&self, argument: &Self) -> Self {
        let effect = self.effect.clone();
        let argument = argument.clone();
        Self::new(move || {
            let function = effect.call(&[])?;
            let value = argument.run()?;
            expect_function("IO::ap", &function)?.call1(value)
        })
    }

    /// As [`IO::ap`], running the `IO` the function returns.
    #[must_use]
    pub fn flat_ap(&self, argument: &Self) -> Self {
        let effect = self.effect.clone();
        let argument = argument.clone();
        Self::new(move || {
            let function = effect.call(&[])?;
            let value = argument.run()?;
            let next: Self =
                expect_variant("IO::flat_ap", expect_function("IO::flat_ap", &function)?.call1(value)?)?;
            next.run()
        })
    }

    /// Runs the effect and unwraps the result, recursively.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by the effect.
    pub fn extract(&self) -> Result<Value> {
        deep_extract(&self.run()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Maybe;
    use crate::error::Error;
    use crate::test_support::{add_one, double, raise};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn map_does_not_run_the_effect() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let io = IO::new(move || {
            counter.set(counter.get() + 1);
            Ok(Value::from(1))
        });
        let composed = io.map(&add_one()).map(&double());
        assert_eq!(runs.get(), 0);
        assert_eq!(composed.run().unwrap(), Value::from(4));
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn failures_propagate_when_run() {
        let io = IO::of(1).map(&raise("effect failed"));
        assert_eq!(io.run(), Err(Error::raised("effect failed")));
    }

    #[rstest]
    fn flat_map_runs_the_returned_io() {
        let next = Function::unary("next", |value| {
            Ok(Value::from(IO::of(value.as_integer().unwrap_or(0) * 10)))
        });
        assert_eq!(IO::of(4).flat_map(&next).run().unwrap(), Value::from(40));
    }

    #[rstest]
    fn flat_map_mismatch_surfaces_on_run() {
        let wrong = Function::unary("wrong", |value| Ok(Value::from(Maybe::just(value))));
        let io = IO::of(4).flat_map(&wrong);
        assert!(matches!(io.run(), Err(Error::TypeMismatch { .. })));
    }

    #[rstest]
    fn ap_combines_two_effects() {
        let function = IO::of(add_one());
        assert_eq!(function.ap(&IO::of(9)).run().unwrap(), Value::from(10));
    }

    #[rstest]
    fn flat_ap_runs_the_produced_io() {
        let lift = Function::unary("lift", |value| Ok(Value::from(IO::of(value))));
        assert_eq!(IO::of(lift).flat_ap(&IO::of(3)).run().unwrap(), Value::from(3));
    }

    #[rstest]
    fn from_function_uses_the_function_as_effect() {
        let effect = Function::nullary("seven", || Ok(Value::from(7)));
        let io = IO::from_function(effect.clone());
        assert_eq!(io.effect(), &effect);
        assert_eq!(io.extract().unwrap(), Value::from(7));
    }
}
