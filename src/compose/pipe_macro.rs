//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which applies [`Function`]
//! values from left to right, following the data flow style of programming.
//!
//! [`Function`]: crate::value::Function

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))` immediately and returns a
/// [`Result`](crate::Result) with the final value. The first failure stops
/// the pipeline.
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f).call(&[x])`.
///
/// # Syntax
///
/// - `pipe!(x)` - `Ok(x)`
/// - `pipe!(x, f)` - `f(x)`
/// - `pipe!(x, f, g, ...)` - `...g(f(x))`
///
/// The value may be anything convertible into a [`Value`](crate::value::Value).
///
/// # Examples
///
/// ```
/// use bindery::pipe;
/// use bindery::value::{Function, Value};
///
/// let shout = Function::unary("shout", |value| {
///     Ok(Value::from(value.as_text().unwrap_or_default().to_uppercase()))
/// });
/// let exclaim = Function::unary("exclaim", |value| Ok(Value::from(format!("{value}!"))));
///
/// assert_eq!(pipe!("hello", shout, exclaim)?, Value::from("HELLO!"));
/// # Ok::<(), bindery::Error>(())
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $function:expr)* $(,)?) => {
        $crate::compose::pipe([$($crate::value::Function::from($function)),*])
            .call(&[$crate::value::Value::from($value)])
    };
}
