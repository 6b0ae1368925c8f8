//! Helper combinators as [`Function`] values.
//!
//! - [`identity`]: returns its first argument (I combinator)
//! - [`constant`]: ignores its arguments and returns a fixed value (K combinator)
//! - [`flip`]: swaps the first two arguments of a function (C combinator)

use crate::value::{Arity, Function, Value};

/// Returns its first argument unchanged; null when called with none.
///
/// The unit element of composition: `compose([identity(), f])` behaves as `f`.
///
/// # Examples
///
/// ```
/// use bindery::compose::identity;
/// use bindery::value::Value;
///
/// assert_eq!(identity().call(&[Value::from(42)])?, Value::from(42));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn identity() -> Function {
    Function::unary("identity", Ok)
}

/// Creates a function that always returns `value`, whatever it is given.
///
/// # Examples
///
/// ```
/// use bindery::compose::constant;
/// use bindery::value::Value;
///
/// let always_five = constant(5);
/// assert_eq!(always_five.call(&[Value::from("ignored")])?, Value::from(5));
/// assert_eq!(always_five.call(&[])?, Value::from(5));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn constant(value: impl Into<Value>) -> Function {
    let value = value.into();
    Function::new("constant", Arity::variadic(0), move |_| Ok(value.clone()))
}

/// Swaps the first two arguments of `function`; any further arguments follow
/// in their original order.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use bindery::compose::flip;
/// use bindery::value::{Function, Value};
///
/// let subtract = Function::binary("subtract", |left, right| {
///     Ok(Value::from(left.as_integer().unwrap_or(0) - right.as_integer().unwrap_or(0)))
/// });
/// let flipped = flip(subtract);
/// assert_eq!(flipped.call(&[Value::from(3), Value::from(10)])?, Value::from(7));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn flip(function: Function) -> Function {
    let arity = function.arity();
    let name = format!("flip({})", function.name());
    Function::new(name, arity, move |arguments| {
        let mut swapped = arguments.to_vec();
        if swapped.len() >= 2 {
            swapped.swap(0, 1);
        }
        function.call(&swapped)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::collect;
    use rstest::rstest;

    #[rstest]
    fn identity_with_no_arguments_is_null() {
        assert_eq!(identity().call(&[]).unwrap(), Value::Null);
    }

    #[rstest]
    fn constant_ignores_arguments() {
        let always = constant("x");
        assert_eq!(always.call(&[Value::from(1), Value::from(2)]).unwrap(), Value::from("x"));
    }

    #[rstest]
    fn flip_swaps_only_the_first_two() {
        let flipped = flip(collect());
        let result = flipped
            .call(&[Value::from(1), Value::from(2), Value::from(3)])
            .unwrap();
        assert_eq!(
            result,
            Value::from(vec![Value::from(2), Value::from(1), Value::from(3)])
        );
    }

    #[rstest]
    fn double_flip_is_identity() {
        let twice = flip(flip(collect()));
        let arguments = [Value::from("a"), Value::from("b")];
        assert_eq!(
            twice.call(&arguments).unwrap(),
            collect().call(&arguments).unwrap()
        );
    }

    #[rstest]
    fn flip_keeps_arity() {
        assert_eq!(flip(collect()).arity(), Arity::variadic(0));
    }
}
