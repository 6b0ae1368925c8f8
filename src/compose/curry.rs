//! Currying and arity adaptation.
//!
//! [`curry_n`] turns a function into an accumulator: each call appends its
//! arguments to an immutable snapshot of the arguments seen so far. Once the
//! snapshot holds at least `n` arguments the original function runs with all
//! of them, extras included; otherwise the call returns a new accumulator as a
//! `Value::Function`.
//!
//! Calling an accumulator with no arguments supplies a single trigger value,
//! [`Value::Null`]. This is what lets [`thunkify`] produce a zero-argument
//! callable that performs the real call.
//!
//! [`ary`], [`unary`] and [`binary`] go the other way: they truncate the
//! arguments a function receives.
//!
//! # Examples
//!
//! ```
//! use bindery::compose::curry_n;
//! use bindery::value::{Function, Value};
//!
//! let add_three = Function::ternary("add_three", |a, b, c| {
//!     let total = [a, b, c].iter().filter_map(Value::as_integer).sum::<i64>();
//!     Ok(Value::from(total))
//! });
//! let curried = curry_n(3, add_three);
//!
//! let one_at_a_time = curried
//!     .call(&[Value::from(1)])?
//!     .call(&[Value::from(2)])?
//!     .call(&[Value::from(3)])?;
//! let two_then_one = curried
//!     .call(&[Value::from(1), Value::from(2)])?
//!     .call(&[Value::from(3)])?;
//!
//! assert_eq!(one_at_a_time, Value::from(6));
//! assert_eq!(two_then_one, Value::from(6));
//! # Ok::<(), bindery::Error>(())
//! ```

use smallvec::SmallVec;

use super::arity::arity;
use crate::error::{Error, Result};
use crate::value::{Arity, Function, Value};

/// Arguments collected by an accumulator. Copied on every extension.
type Collected = SmallVec<[Value; 4]>;

/// Curries `function` so that it runs once `count` arguments have arrived.
pub fn curry_n(count: usize, function: Function) -> Function {
    accumulator(count, function, Collected::new())
}

fn accumulator(count: usize, function: Function, collected: Collected) -> Function {
    let remaining = count.saturating_sub(collected.len());
    let name = format!("curry({})", function.name());
    Function::new(name, Arity::variadic(remaining), move |arguments| {
        let mut extended = collected.clone();
        if arguments.is_empty() {
            extended.push(Value::Null);
        } else {
            extended.extend(arguments.iter().cloned());
        }
        if extended.len() >= count {
            function.call(&extended)
        } else {
            Ok(Value::from(accumulator(count, function.clone(), extended)))
        }
    })
}

/// Curries `function` using its declared arity.
///
/// With `required_only`, defaulted parameters are not waited for.
pub fn curry(function: Function, required_only: bool) -> Function {
    curry_n(arity(&function, required_only), function)
}

/// Delays `function` until one argument beyond its arity arrives.
///
/// After the declared arguments are supplied, the result is a callable that
/// performs the real call when invoked, typically with no arguments. The
/// trigger value is forwarded to `function` as an extra trailing argument.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use bindery::compose::thunkify;
/// use bindery::value::{Function, Value};
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let record = Function::unary("record", move |value| {
///     counter.set(counter.get() + 1);
///     Ok(value)
/// });
///
/// let thunk = thunkify(record, false).call(&[Value::from("later")])?;
/// assert_eq!(calls.get(), 0);
/// assert_eq!(thunk.call(&[])?, Value::from("later"));
/// assert_eq!(calls.get(), 1);
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn thunkify(function: Function, required_only: bool) -> Function {
    curry_n(arity(&function, required_only) + 1, function)
}

/// Calls `function` with only the first `count` arguments (`count > 0`) or
/// the last `|count|` arguments (`count < 0`).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `count` is zero.
///
/// # Examples
///
/// ```
/// use bindery::compose::ary;
/// use bindery::value::{Arity, Function, Value};
///
/// let collect = Function::new("collect", Arity::variadic(0), |arguments| {
///     Ok(Value::from(arguments.to_vec()))
/// });
/// let arguments = [Value::from(1), Value::from(2), Value::from(3)];
///
/// let first_two = ary(collect.clone(), 2)?;
/// assert_eq!(first_two.call(&arguments)?, Value::from(vec![Value::from(1), Value::from(2)]));
///
/// let last_one = ary(collect.clone(), -1)?;
/// assert_eq!(last_one.call(&arguments)?, Value::from(vec![Value::from(3)]));
///
/// assert!(ary(collect, 0).is_err());
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn ary(function: Function, count: isize) -> Result<Function> {
    if count == 0 {
        return Err(Error::invalid_argument("ary", "arity must be non-zero"));
    }
    Ok(truncating(function, count))
}

/// Calls `function` with only its first argument.
pub fn unary(function: Function) -> Function {
    truncating(function, 1)
}

/// Calls `function` with only its first two arguments.
pub fn binary(function: Function) -> Function {
    truncating(function, 2)
}

fn truncating(function: Function, count: isize) -> Function {
    let width = count.unsigned_abs();
    let name = format!("ary({}, {count})", function.name());
    Function::new(name, Arity::exact(width), move |arguments| {
        let kept = if count > 0 {
            &arguments[..width.min(arguments.len())]
        } else {
            &arguments[arguments.len().saturating_sub(width)..]
        };
        function.call(kept)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{collect, ints, sum_all};
    use rstest::rstest;

    fn add_three() -> Function {
        Function::ternary("add_three", |a, b, c| {
            Ok(Value::from(
                a.as_integer().unwrap_or(0) + b.as_integer().unwrap_or(0) + c.as_integer().unwrap_or(0),
            ))
        })
    }

    #[rstest]
    #[case(vec![vec![1], vec![2], vec![3]])]
    #[case(vec![vec![1, 2], vec![3]])]
    #[case(vec![vec![1], vec![2, 3]])]
    #[case(vec![vec![1, 2, 3]])]
    fn every_split_reaches_the_same_result(#[case] splits: Vec<Vec<i64>>) {
        let mut step = Value::from(curry_n(3, add_three()));
        for arguments in splits {
            step = step.call(&ints(&arguments)).unwrap();
        }
        assert_eq!(step, Value::from(6));
    }

    #[rstest]
    fn extra_arguments_are_forwarded() {
        let curried = curry_n(2, collect());
        let result = curried
            .call(&ints(&[1]))
            .unwrap()
            .call(&ints(&[2, 3]))
            .unwrap();
        assert_eq!(result, Value::from(ints(&[1, 2, 3])));
    }

    #[rstest]
    fn accumulators_are_reusable() {
        let with_ten = curry_n(2, sum_all()).call(&ints(&[10])).unwrap();
        assert_eq!(with_ten.call(&ints(&[1])).unwrap(), Value::from(11));
        assert_eq!(with_ten.call(&ints(&[2])).unwrap(), Value::from(12));
    }

    #[rstest]
    fn empty_call_supplies_one_placeholder() {
        let curried = curry_n(2, collect());
        let result = curried.call(&[]).unwrap().call(&ints(&[5])).unwrap();
        assert_eq!(result, Value::from(vec![Value::Null, Value::from(5)]));
    }

    #[rstest]
    fn accumulator_reports_remaining_arity() {
        let curried = curry_n(3, add_three());
        assert_eq!(arity(&curried, false), 3);
        let step = curried.call(&ints(&[1])).unwrap();
        assert_eq!(arity(step.as_function().unwrap(), false), 2);
    }

    #[rstest]
    fn curry_reads_declared_arity() {
        let greet = Function::new("greet", Arity::with_defaults(1, 2), |arguments| {
            Ok(Value::from(arguments.len() as i64))
        });
        assert_eq!(curry(greet.clone(), true).call(&ints(&[1])).unwrap(), Value::from(1));
        assert!(curry(greet, false).call(&ints(&[1])).unwrap().as_function().is_some());
    }

    #[rstest]
    fn thunkify_waits_for_the_trigger() {
        let thunk = thunkify(add_three(), false)
            .call(&ints(&[1, 2, 3]))
            .unwrap();
        assert!(thunk.as_function().is_some());
        assert_eq!(thunk.call(&[]).unwrap(), Value::from(6));
    }

    #[rstest]
    #[case(1, vec![1])]
    #[case(2, vec![1, 2])]
    #[case(5, vec![1, 2, 3])]
    #[case(-1, vec![3])]
    #[case(-2, vec![2, 3])]
    #[case(-9, vec![1, 2, 3])]
    fn ary_truncates_from_the_requested_side(#[case] count: isize, #[case] expected: Vec<i64>) {
        let truncated = ary(collect(), count).unwrap();
        assert_eq!(truncated.call(&ints(&[1, 2, 3])).unwrap(), Value::from(ints(&expected)));
        assert_eq!(arity(&truncated, false), count.unsigned_abs());
    }

    #[rstest]
    fn ary_zero_is_rejected() {
        assert_eq!(
            ary(collect(), 0).unwrap_err(),
            Error::invalid_argument("ary", "arity must be non-zero")
        );
    }

    #[rstest]
    fn unary_and_binary_shorthands() {
        assert_eq!(unary(collect()).call(&ints(&[1, 2])).unwrap(), Value::from(ints(&[1])));
        assert_eq!(
            binary(collect()).call(&ints(&[1, 2, 3])).unwrap(),
            Value::from(ints(&[1, 2]))
        );
    }
}
