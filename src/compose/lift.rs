//! Lifting plain functions into a context family.
//!
//! A lifted function accepts any mix of plain values and contexts. Every
//! context argument is unwrapped with [`Context::extract`] before the plain
//! function runs, and the result is wrapped into the target family.
//!
//! # Inactive arguments
//!
//! When the target family has an inactive state (Maybe, Optional, Either,
//! `EitherWriter`) and any argument is an inactive context (`Nothing` or
//! `Left`), the plain function is not called. The first inactive argument is
//! converted into the target family instead:
//!
//! | target         | result                                        |
//! |----------------|-----------------------------------------------|
//! | Maybe          | `Nothing`                                     |
//! | Optional       | `Nothing`                                     |
//! | Either         | `Left` carrying the inactive payload          |
//! | `EitherWriter` | `Left` carrying the payload, empty aggregate  |
//!
//! A `Nothing` payload is the text `"Nothing"`. For every other target family
//! arguments are extracted as usual, so `Nothing` arrives as null.
//!
//! # Failures
//!
//! For Either and `EitherWriter` targets a failure raised by the plain
//! function becomes a `Left` carrying the failure message. An `EitherWriter`
//! also records that message in its aggregate, as its own `map` does; the
//! aggregate starts empty. For the other families the failure propagates.

use crate::context::{
    Aggregate, Context, Either, EitherWriter, Family, Maybe, Optional, capture_failure,
};
use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// Lifts `function` into `family`.
///
/// # Examples
///
/// ```
/// use bindery::compose::lift_to;
/// use bindery::context::{Family, Maybe};
/// use bindery::value::{Function, Value};
///
/// let plus = Function::binary("plus", |left, right| {
///     Ok(Value::from(left.as_integer().unwrap_or(0) + right.as_integer().unwrap_or(0)))
/// });
/// let lifted = lift_to(Family::Maybe, plus);
///
/// let present = lifted.call(&[Value::from(3), Value::from(Maybe::just(2))])?;
/// assert_eq!(present, Value::from(Maybe::just(5)));
///
/// let absent = lifted.call(&[Value::from(3), Value::from(Maybe::nothing())])?;
/// assert_eq!(absent, Value::from(Maybe::nothing()));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn lift_to(family: Family, function: Function) -> Function {
    let name = format!("lift_to({family}, {})", function.name());
    let arity = function.arity();
    Function::new(name, arity, move |arguments| {
        if let Some(inactive) = first_inactive(family, arguments) {
            return Ok(Value::from(inactive));
        }
        let unwrapped = arguments
            .iter()
            .map(|argument| match argument {
                Value::Context(context) => context.extract(),
                plain => Ok(plain.clone()),
            })
            .collect::<Result<Vec<Value>>>()?;
        let result = match family {
            Family::Either | Family::EitherWriter => match function.call(&unwrapped) {
                Ok(value) => value,
                Err(error) => return Ok(Value::from(captured(family, &error))),
            },
            _ => function.call(&unwrapped)?,
        };
        Ok(Value::from(wrap(family, result)))
    })
}

/// Lifts `function` into Maybe.
pub fn lift_m(function: Function) -> Function {
    lift_to(Family::Maybe, function)
}

/// Lifts `function` into Either.
///
/// # Examples
///
/// ```
/// use bindery::compose::lift_e;
/// use bindery::context::Either;
/// use bindery::value::{Function, Value};
///
/// let halve = Function::unary("halve", |value| match value.as_integer() {
///     Some(number) if number % 2 == 0 => Ok(Value::from(number / 2)),
///     _ => Err(bindery::Error::raised("odd")),
/// });
/// let lifted = lift_e(halve);
///
/// assert_eq!(lifted.call(&[Value::from(8)])?, Value::from(Either::right(4)));
/// assert_eq!(lifted.call(&[Value::from(7)])?, Value::from(Either::left("odd")));
/// assert_eq!(
///     lifted.call(&[Value::from(Either::left("earlier"))])?,
///     Value::from(Either::left("earlier"))
/// );
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn lift_e(function: Function) -> Function {
    lift_to(Family::Either, function)
}

fn first_inactive(family: Family, arguments: &[Value]) -> Option<Context> {
    if !matches!(
        family,
        Family::Maybe | Family::Optional | Family::Either | Family::EitherWriter
    ) {
        return None;
    }
    arguments
        .iter()
        .filter_map(Value::as_context)
        .find_map(Context::inactive_payload)
        .map(|payload| within(family, Either::Left(payload)))
}

/// Expresses an Either outcome in `family`; `Left` becomes its inactive state.
fn within(family: Family, outcome: Either) -> Context {
    match (family, outcome) {
        (Family::Maybe, Either::Left(_)) => Maybe::nothing().into(),
        (Family::Optional, Either::Left(_)) => Optional::nothing().into(),
        (Family::EitherWriter, outcome) => {
            EitherWriter::from_either(outcome, Aggregate::default()).into()
        }
        (Family::Either, outcome) => outcome.into(),
        (family, Either::Right(value) | Either::Left(value)) => Context::of(family, value),
    }
}

/// A failure of the lifted function as a `Left` in `family`.
fn captured(family: Family, error: &Error) -> Context {
    let message = capture_failure("lift_to", error);
    match family {
        Family::EitherWriter => {
            let output = Aggregate::default().record_failure(&message);
            EitherWriter::left(message, output).into()
        }
        _ => Either::left(message).into(),
    }
}

fn wrap(family: Family, result: Value) -> Context {
    match result {
        Value::Context(context) if context.family() == family => *context,
        other => Context::of(family, other),
    }
}
