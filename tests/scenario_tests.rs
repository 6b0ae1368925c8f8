//! End-to-end scenarios combining contexts and the binding engine.

use bindery::compose::{compose, curry_n, lift_to, partial};
use bindery::context::{Aggregate, AggregateKind, Either, EitherWriter, Family, Maybe, Writer};
use bindery::value::{Function, Value};
use bindery::Error;
use rstest::rstest;

fn must_contain(symbol: char) -> Function {
    Function::unary(format!("must_contain_{symbol}"), move |value| {
        if value.as_text().is_some_and(|text| text.contains(symbol)) {
            Ok(value)
        } else {
            Err(Error::raised(format!("missing {symbol}")))
        }
    })
}

fn plus() -> Function {
    Function::binary("plus", |left, right| {
        Ok(Value::from(
            left.as_integer().unwrap_or(0) + right.as_integer().unwrap_or(0),
        ))
    })
}

#[rstest]
fn scenario_a_either_chain() {
    let add_one = Function::unary("add_one", |value| {
        Ok(Value::from(value.as_integer().unwrap_or(0) + 1))
    });
    let double = Function::unary("double", |value| {
        Ok(Value::from(value.as_integer().unwrap_or(0) * 2))
    });
    assert_eq!(Either::right(5).map(&add_one).map(&double), Either::right(12));
}

#[rstest]
#[case("a@b.com", Either::right("a@b.com"))]
#[case("ab.com", Either::left("missing @"))]
#[case("a@bcom", Either::left("missing ."))]
fn scenario_b_validation_captures_the_first_failure(
    #[case] input: &str,
    #[case] expected: Either,
) {
    let result = Either::right(input)
        .map(&must_contain('@'))
        .map(&must_contain('.'));
    assert_eq!(result, expected);
}

#[rstest]
fn scenario_c_curried_sum() {
    let add_three = Function::ternary("add_three", |a, b, c| {
        Ok(Value::from(
            a.as_integer().unwrap_or(0) + b.as_integer().unwrap_or(0) + c.as_integer().unwrap_or(0),
        ))
    });
    let result = curry_n(3, add_three)
        .call(&[Value::from(1)])
        .and_then(|step| step.call(&[Value::from(2)]))
        .and_then(|step| step.call(&[Value::from(3)]))
        .unwrap();
    assert_eq!(result, Value::from(6));
}

#[rstest]
fn scenario_d_lift_into_maybe() {
    let lifted = lift_to(Family::Maybe, plus());
    assert_eq!(
        lifted
            .call(&[Value::from(3), Value::from(Maybe::just(2))])
            .unwrap(),
        Value::from(Maybe::just(5))
    );
    assert_eq!(
        lifted
            .call(&[Value::from(3), Value::from(Maybe::nothing())])
            .unwrap(),
        Value::from(Maybe::nothing())
    );
}

#[rstest]
fn validation_log_with_either_writer() {
    let checked = |symbol: char| {
        let check = must_contain(symbol);
        Function::unary(format!("checked_{symbol}"), move |value| {
            let outcome = check.call(&[value]);
            Ok(Value::from(match outcome {
                Ok(value) => EitherWriter::right(value, format!("has {symbol};")),
                Err(error) => EitherWriter::left(error.to_string(), format!("no {symbol};")),
            }))
        })
    };

    let valid = EitherWriter::right("a@b.com", Aggregate::default())
        .flat_map(&checked('@'))
        .and_then(|step| step.flat_map(&checked('.')))
        .unwrap();
    assert_eq!(valid, EitherWriter::right("a@b.com", "has @;has .;"));

    let invalid = EitherWriter::right("ab.com", Aggregate::default())
        .flat_map(&checked('@'))
        .and_then(|step| step.flat_map(&checked('.')))
        .unwrap();
    assert_eq!(invalid, EitherWriter::left("missing @", "no @;"));
}

#[rstest]
fn writer_counts_steps_with_an_integer_aggregate() {
    let counted = |function: Function| {
        Function::unary("counted", move |value| {
            let next = function.call(&[value])?;
            Ok(Value::from(Writer::new(next, 1_i64)))
        })
    };
    let start = Writer::pure(10, AggregateKind::Integer);
    let ten_plus = partial(plus(), [Value::from(10)]);
    let result = start
        .flat_map(&counted(ten_plus.clone()))
        .and_then(|writer| writer.flat_map(&counted(compose([ten_plus.clone(), ten_plus]))))
        .unwrap();
    assert_eq!(result.value(), &Value::from(40));
    assert_eq!(result.output(), &Aggregate::Integer(2));
}
