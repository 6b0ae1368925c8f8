//! Composition combinators over [`Function`] values.
//!
//! # Laws
//!
//! - **Associativity**: `compose([f, compose([g, h])]) == compose([compose([f, g]), h])`
//! - **Left identity**: `compose([identity(), f]) == f`
//! - **Right identity**: `compose([f, identity()]) == f`
//! - **Mirror**: `pipe([f, g]) == compose([g, f])`

use crate::value::{Arity, Function, Value};

/// Composes `functions` right to left.
///
/// The rightmost function receives every call argument; each function to its
/// left receives the single previous result. With no functions the result is
/// the identity: the first call argument, or null.
///
/// # Examples
///
/// ```
/// use bindery::compose::compose;
/// use bindery::value::{Function, Value};
///
/// let add_one = Function::unary("add_one", |value| {
///     Ok(Value::from(value.as_integer().unwrap_or(0) + 1))
/// });
/// let double = Function::unary("double", |value| {
///     Ok(Value::from(value.as_integer().unwrap_or(0) * 2))
/// });
///
/// let composed = compose([add_one, double]);
/// assert_eq!(composed.call(&[Value::from(5)])?, Value::from(11));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn compose(functions: impl IntoIterator<Item = Function>) -> Function {
    let mut steps: Vec<Function> = functions.into_iter().collect();
    steps.reverse();
    chain("compose", steps)
}

/// Composes `functions` left to right: the mirror of [`compose`].
///
/// # Examples
///
/// ```
/// use bindery::compose::pipe;
/// use bindery::value::{Function, Value};
///
/// let add_one = Function::unary("add_one", |value| {
///     Ok(Value::from(value.as_integer().unwrap_or(0) + 1))
/// });
/// let double = Function::unary("double", |value| {
///     Ok(Value::from(value.as_integer().unwrap_or(0) * 2))
/// });
///
/// let piped = pipe([add_one, double]);
/// assert_eq!(piped.call(&[Value::from(5)])?, Value::from(12));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn pipe(functions: impl IntoIterator<Item = Function>) -> Function {
    chain("pipe", functions.into_iter().collect())
}

/// Runs `steps` in order; the first gets all arguments.
fn chain(label: &str, steps: Vec<Function>) -> Function {
    let arity = steps.first().map_or(Arity::variadic(0), Function::arity);
    let names: Vec<&str> = steps.iter().map(Function::name).collect();
    let name = format!("{label}({})", names.join(", "));
    Function::new(name, arity, move |arguments| {
        let Some((first, rest)) = steps.split_first() else {
            return Ok(arguments.first().cloned().unwrap_or_default());
        };
        rest.iter()
            .try_fold(first.call(arguments)?, |value, step| step.call1(value))
    })
}

/// Calls every branch with the same arguments, then `converging` with the
/// branch results in order.
///
/// The result's arity is the largest branch arity.
///
/// # Examples
///
/// ```
/// use bindery::compose::converge;
/// use bindery::value::{Arity, Function, Value};
///
/// let sum = Function::new("sum", Arity::variadic(0), |arguments| {
///     Ok(Value::from(arguments.iter().filter_map(Value::as_integer).sum::<i64>()))
/// });
/// let count = Function::new("count", Arity::variadic(0), |arguments| {
///     Ok(Value::from(arguments.len() as i64))
/// });
/// let average = Function::binary("average", |total, count| {
///     let count = count.as_integer().unwrap_or(1).max(1);
///     Ok(Value::from(total.as_integer().unwrap_or(0) / count))
/// });
///
/// let mean = converge(average, [sum, count]);
/// let arguments = [Value::from(2), Value::from(4), Value::from(6)];
/// assert_eq!(mean.call(&arguments)?, Value::from(4));
/// # Ok::<(), bindery::Error>(())
/// ```
pub fn converge(converging: Function, branches: impl IntoIterator<Item = Function>) -> Function {
    let branches: Vec<Function> = branches.into_iter().collect();
    let width = branches
        .iter()
        .map(|branch| branch.arity().total())
        .max()
        .unwrap_or(0);
    let name = format!("converge({})", converging.name());
    Function::new(name, Arity::exact(width), move |arguments| {
        let results = branches
            .iter()
            .map(|branch| branch.call(arguments))
            .collect::<crate::Result<Vec<Value>>>()?;
        converging.call(&results)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::identity;
    use crate::error::Error;
    use crate::test_support::{add_one, collect, double, ints, plus, raise};
    use rstest::rstest;

    #[rstest]
    fn compose_runs_right_to_left() {
        let composed = compose([add_one(), double()]);
        assert_eq!(composed.call(&ints(&[5])).unwrap(), Value::from(11));
    }

    #[rstest]
    fn pipe_runs_left_to_right() {
        let piped = pipe([add_one(), double()]);
        assert_eq!(piped.call(&ints(&[5])).unwrap(), Value::from(12));
    }

    #[rstest]
    fn innermost_receives_every_argument() {
        let composed = compose([double(), plus()]);
        assert_eq!(composed.call(&ints(&[2, 3])).unwrap(), Value::from(10));
        assert_eq!(composed.arity(), Arity::exact(2));

        let piped = pipe([plus(), double()]);
        assert_eq!(piped.call(&ints(&[2, 3])).unwrap(), Value::from(10));
    }

    #[rstest]
    fn empty_composition_is_identity() {
        assert_eq!(compose([]).call(&ints(&[7, 8])).unwrap(), Value::from(7));
        assert_eq!(pipe([]).call(&[]).unwrap(), Value::Null);
    }

    #[rstest]
    fn identity_is_a_unit() {
        let arguments = ints(&[4]);
        let plain = add_one().call(&arguments).unwrap();
        assert_eq!(compose([identity(), add_one()]).call(&arguments).unwrap(), plain);
        assert_eq!(compose([add_one(), identity()]).call(&arguments).unwrap(), plain);
    }

    #[rstest]
    fn failures_stop_the_chain() {
        let composed = compose([add_one(), raise("halt"), double()]);
        assert_eq!(composed.call(&ints(&[1])), Err(Error::raised("halt")));
    }

    #[rstest]
    fn converge_collects_branch_results() {
        let converged = converge(collect(), [add_one(), double(), plus()]);
        assert_eq!(converged.arity(), Arity::exact(2));
        assert_eq!(
            converged.call(&ints(&[3, 4])).unwrap(),
            Value::from(ints(&[4, 6, 7]))
        );
    }

    #[rstest]
    fn converge_propagates_branch_failures() {
        let converged = converge(collect(), [add_one(), raise("branch")]);
        assert_eq!(converged.call(&ints(&[1])), Err(Error::raised("branch")));
    }
}
