//! Partial application.
//!
//! - [`partial`]: binds arguments on the left
//! - [`partial_r`]: binds arguments on the right
//! - [`partial_p`]: binds arguments at explicit 1-based positions
//!
//! Each returns an ordinary [`Function`] whose arity is the wrapped
//! function's arity minus the bound arguments.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::value::{Arity, Function, Value};

/// Binds `bound` as the leading arguments of `function`.
///
/// `partial(f, [a, b])(c, d) == f(a, b, c, d)`
///
/// # Examples
///
/// ```
/// use bindery::compose::partial;
/// use bindery::value::{Function, Value};
///
/// let greet = Function::binary("greet", |greeting, name| {
///     Ok(Value::from(format!("{greeting}, {name}")))
/// });
/// let hello = partial(greet, [Value::from("Hello")]);
/// assert_eq!(hello.call(&[Value::from("Ada")])?, Value::from("Hello, Ada"));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn partial(function: Function, bound: impl IntoIterator<Item = Value>) -> Function {
    let bound: Vec<Value> = bound.into_iter().collect();
    let arity = function.arity().saturating_sub(bound.len());
    let name = format!("partial({})", function.name());
    Function::new(name, arity, move |arguments| {
        let mut all = Vec::with_capacity(bound.len() + arguments.len());
        all.extend_from_slice(&bound);
        all.extend_from_slice(arguments);
        function.call(&all)
    })
}

/// Binds `bound` as the trailing arguments of `function`.
///
/// `partial_r(f, [c, d])(a, b) == f(a, b, c, d)`
pub fn partial_r(function: Function, bound: impl IntoIterator<Item = Value>) -> Function {
    let bound: Vec<Value> = bound.into_iter().collect();
    let arity = function.arity().saturating_sub(bound.len());
    let name = format!("partial_r({})", function.name());
    Function::new(name, arity, move |arguments| {
        let mut all = Vec::with_capacity(bound.len() + arguments.len());
        all.extend_from_slice(arguments);
        all.extend_from_slice(&bound);
        function.call(&all)
    })
}

/// Binds arguments at 1-based positions of `function`.
///
/// The parameter list spans up to the highest fixed position or the
/// function's required arity, whichever is larger. On each call the open
/// positions are filled in ascending order from the call's arguments, and
/// any arguments left over are appended.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a position is zero. The returned
/// function fails with [`Error::InvalidArgument`] when a call supplies fewer
/// arguments than there are open positions.
///
/// # Examples
///
/// ```
/// use bindery::compose::partial_p;
/// use bindery::value::{Arity, Function, Value};
///
/// let join = Function::new("join", Arity::exact(3), |arguments| {
///     let parts: Vec<String> = arguments.iter().map(ToString::to_string).collect();
///     Ok(Value::from(parts.join("-")))
/// });
/// let middle_fixed = partial_p(join, [(2, Value::from("b"))])?;
/// assert_eq!(
///     middle_fixed.call(&[Value::from("a"), Value::from("c")])?,
///     Value::from("a-b-c")
/// );
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn partial_p(
    function: Function,
    positions: impl IntoIterator<Item = (usize, Value)>,
) -> Result<Function> {
    let fixed: BTreeMap<usize, Value> = positions.into_iter().collect();
    if fixed.contains_key(&0) {
        return Err(Error::invalid_argument("partial_p", "positions are 1-based"));
    }
    let highest = fixed.keys().next_back().copied().unwrap_or(0);
    let width = highest.max(function.arity().required());
    let open = width - fixed.len();
    let arity = if function.arity().is_variadic() {
        Arity::variadic(open)
    } else {
        Arity::exact(open)
    };
    let name = format!("partial_p({})", function.name());
    Ok(Function::new(name, arity, move |arguments| {
        if arguments.len() < open {
            return Err(Error::invalid_argument(
                "partial_p",
                format!("expected at least {open} arguments, got {}", arguments.len()),
            ));
        }
        let mut supplied = arguments.iter();
        let mut all = Vec::with_capacity(width.max(fixed.len() + arguments.len()));
        for position in 1..=width {
            match fixed.get(&position) {
                Some(value) => all.push(value.clone()),
                None => all.extend(supplied.next().cloned()),
            }
        }
        all.extend(supplied.cloned());
        function.call(&all)
    }))
}
