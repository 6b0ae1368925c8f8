//! Property-based tests for currying.
//!
//! - **Split invariance**: every grouping of `a1..an` into consecutive
//!   non-empty calls reaches `f(a1, ..., an)`
//! - **Partial agreement**: `partial(f, prefix)` agrees with feeding
//!   `prefix` to `curry_n` first

use bindery::compose::{curry_n, partial, partial_r};
use bindery::value::{Arity, Function, Value};
use proptest::prelude::*;

fn collect() -> Function {
    Function::new("collect", Arity::variadic(0), |arguments| {
        Ok(Value::from(arguments.to_vec()))
    })
}

fn values(numbers: &[i64]) -> Vec<Value> {
    numbers.iter().copied().map(Value::from).collect()
}

fn groups(numbers: &[i64], cuts: &[bool]) -> Vec<Vec<Value>> {
    let mut groups = vec![Vec::new()];
    for (index, number) in numbers.iter().enumerate() {
        if let Some(last) = groups.last_mut() {
            last.push(Value::from(*number));
        }
        if cuts.get(index).copied().unwrap_or(false) && index + 1 < numbers.len() {
            groups.push(Vec::new());
        }
    }
    groups
}

proptest! {
    #[test]
    fn prop_every_split_reaches_the_full_call(
        numbers in prop::collection::vec(any::<i64>(), 1..8),
        cuts in prop::collection::vec(any::<bool>(), 8),
    ) {
        let mut step = Value::from(curry_n(numbers.len(), collect()));
        for group in groups(&numbers, &cuts) {
            prop_assert!(step.as_function().is_some());
            step = step.call(&group).unwrap();
        }
        prop_assert_eq!(step, Value::from(values(&numbers)));
    }

    #[test]
    fn prop_partial_agrees_with_curry(
        prefix in prop::collection::vec(any::<i64>(), 0..4),
        suffix in prop::collection::vec(any::<i64>(), 1..4),
    ) {
        let total = prefix.len() + suffix.len();
        let mut expected = values(&prefix);
        expected.extend(values(&suffix));

        let bound = partial(collect(), values(&prefix)).call(&values(&suffix)).unwrap();
        let curried = if prefix.is_empty() {
            curry_n(total, collect()).call(&values(&suffix)).unwrap()
        } else {
            curry_n(total, collect())
                .call(&values(&prefix))
                .unwrap()
                .call(&values(&suffix))
                .unwrap()
        };

        prop_assert_eq!(&bound, &Value::from(expected));
        prop_assert_eq!(bound, curried);
    }

    #[test]
    fn prop_partial_r_appends_after_call_arguments(
        bound in prop::collection::vec(any::<i64>(), 0..4),
        supplied in prop::collection::vec(any::<i64>(), 0..4),
    ) {
        let mut expected = values(&supplied);
        expected.extend(values(&bound));
        let result = partial_r(collect(), values(&bound)).call(&values(&supplied)).unwrap();
        prop_assert_eq!(result, Value::from(expected));
    }
}
