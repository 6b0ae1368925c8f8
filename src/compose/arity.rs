//! Arity introspection.
//!
//! Every [`Function`] carries its declared [`Arity`], whether it wraps a
//! closure, a bound method or an invokable object, so introspection is a read
//! of that metadata. The combinators in this crate declare accurate arity on
//! the functions they build: a curried accumulator reports the arguments it
//! still needs, a partial application reports the arity minus its bound
//! arguments, and a composition reports its innermost function's arity.
//!
//! When the arity of a function is unknown or wrong, skip introspection and
//! use the explicit entry point [`curry_n`](super::curry_n).

use crate::value::{Arity, Callable, Function};

/// The declared parameter count of `function`.
///
/// With `required_only`, parameters that have defaults are not counted.
///
/// # Examples
///
/// ```
/// use bindery::compose::arity;
/// use bindery::value::{Arity, Function, Value};
///
/// let greet = Function::new("greet", Arity::with_defaults(1, 2), |arguments| {
///     let name = arguments.first().cloned().unwrap_or_default();
///     let greeting = arguments.get(1).cloned().unwrap_or(Value::from("Hello"));
///     Ok(Value::from(format!("{greeting}, {name}")))
/// });
///
/// assert_eq!(arity(&greet, false), 2);
/// assert_eq!(arity(&greet, true), 1);
/// ```
pub fn arity(function: &Function, required_only: bool) -> usize {
    function.arity().count(required_only)
}

/// The declared parameter count of any [`Callable`], before it is wrapped.
pub fn arity_of<C: Callable + ?Sized>(callable: &C, required_only: bool) -> usize {
    callable.arity().count(required_only)
}

/// The full declared [`Arity`] of `function`.
pub fn signature(function: &Function) -> Arity {
    function.arity()
}
