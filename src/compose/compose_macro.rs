//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes [`Function`]
//! values from right to left, following the mathematical notation for
//! function composition.
//!
//! [`Function`]: crate::value::Function

/// Composes functions from right to left.
///
/// `compose!(f, g, h)` builds the same [`Function`](crate::value::Function)
/// as [`compose([f, g, h])`](crate::compose::compose): calling it with `x`
/// yields `f(g(h(x)))`. The rightmost function receives every call argument.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity(), f) == f`
/// - **Right Identity**: `compose!(f, identity()) == f`
///
/// # Syntax
///
/// - `compose!()` - The identity function
/// - `compose!(f)` - Behaves as `f`
/// - `compose!(f, g, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use bindery::compose;
/// use bindery::value::{Function, Value};
///
/// let add_one = Function::unary("add_one", |value| {
///     Ok(Value::from(value.as_integer().unwrap_or(0) + 1))
/// });
/// let double = Function::unary("double", |value| {
///     Ok(Value::from(value.as_integer().unwrap_or(0) * 2))
/// });
/// let square = Function::unary("square", |value| {
///     let number = value.as_integer().unwrap_or(0);
///     Ok(Value::from(number * number))
/// });
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.call(&[Value::from(3)])?, Value::from(19));
/// # Ok::<(), bindery::Error>(())
/// ```
#[macro_export]
macro_rules! compose {
    ($($function:expr),* $(,)?) => {
        $crate::compose::compose([$($crate::value::Function::from($function)),*])
    };
}
