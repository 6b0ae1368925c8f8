//! The `partial!` macro for partial function application.
//!
//! This module provides the [`partial!`] macro which fixes some arguments of
//! a [`Function`] while leaving others as parameters.
//!
//! [`Function`]: crate::value::Function

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that should
/// remain as parameters in the resulting function. Every other argument is
/// converted into a [`Value`](crate::value::Value) and fixed at its position.
///
/// **Important**: `__` is matched as a literal token; there is nothing to
/// import.
///
/// The macro expands to [`partial_p`](crate::compose::partial_p) with the
/// fixed positions, so it returns a [`Result`](crate::Result). Open
/// positions are filled from the call's arguments in order, and extra call
/// arguments are appended.
///
/// # Syntax
///
/// For a 3-argument function `f(a, b, c)`:
/// - `partial!(f, x, __, __)` behaves as `|b, c| f(x, b, c)`
/// - `partial!(f, __, y, __)` behaves as `|a, c| f(a, y, c)`
/// - `partial!(f, x, y, z)` behaves as `|| f(x, y, z)` (thunk)
///
/// # Examples
///
/// ```
/// use bindery::partial;
/// use bindery::value::{Arity, Function, Value};
///
/// let greeting = Function::new("greeting", Arity::exact(3), |arguments| {
///     Ok(Value::from(format!("{}, {}{}", arguments[0], arguments[1], arguments[2])))
/// });
///
/// let hello_with_exclamation = partial!(greeting, "Hello", __, "!")?;
/// assert_eq!(
///     hello_with_exclamation.call(&[Value::from("Alice")])?,
///     Value::from("Hello, Alice!")
/// );
/// # Ok::<(), bindery::Error>(())
/// ```
#[macro_export]
macro_rules! partial {
    (@slots $function:expr; [$($slot:expr),*];) => {
        $crate::compose::partial_p(
            $function,
            [$($slot),*]
                .into_iter()
                .enumerate()
                .filter_map(|(index, slot)| slot.map(|value| (index + 1, value))),
        )
    };

    (@slots $function:expr; [$($slot:expr),*]; __ $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @slots $function;
            [$($slot,)* ::core::option::Option::<$crate::value::Value>::None];
            $($($rest)*)?
        )
    };

    (@slots $function:expr; [$($slot:expr),*]; $argument:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @slots $function;
            [$($slot,)* ::core::option::Option::Some($crate::value::Value::from($argument))];
            $($($rest)*)?
        )
    };

    ($function:expr $(,)?) => {
        $crate::compose::partial_p($function, ::core::iter::empty())
    };

    ($function:expr, $($arguments:tt)+) => {
        $crate::partial!(@slots $function; []; $($arguments)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::test_support::{collect, ints, plus};
    use crate::value::Value;

    #[test]
    fn test_partial_first_fixed() {
        let add_five = partial!(plus(), 5, __).unwrap();
        assert_eq!(add_five.call(&ints(&[3])).unwrap(), Value::from(8));
    }

    #[test]
    fn test_partial_second_fixed() {
        let bound = partial!(collect(), __, 2, __).unwrap();
        assert_eq!(
            bound.call(&ints(&[1, 3])).unwrap(),
            Value::from(ints(&[1, 2, 3]))
        );
    }

    #[test]
    fn test_partial_expression_arguments() {
        let base = 4;
        let bound = partial!(plus(), base * 2, __).unwrap();
        assert_eq!(bound.call(&ints(&[1])).unwrap(), Value::from(9));
    }

    #[test]
    fn test_partial_thunk() {
        let thunk = partial!(plus(), 3, 5).unwrap();
        assert_eq!(thunk.call(&[]).unwrap(), Value::from(8));
    }

    #[test]
    fn test_partial_nothing_fixed() {
        let same = partial!(plus()).unwrap();
        assert_eq!(same.call(&ints(&[1, 2])).unwrap(), Value::from(3));
    }
}
