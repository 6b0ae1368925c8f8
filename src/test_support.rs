//! Functions shared by the unit tests.

use crate::error::Error;
use crate::value::{Function, Value};

fn integer(value: &Value) -> i64 {
    value.as_integer().unwrap_or(0)
}

pub fn add_one() -> Function {
    Function::unary("add_one", |value| Ok(Value::from(integer(&value) + 1)))
}

pub fn double() -> Function {
    Function::unary("double", |value| Ok(Value::from(integer(&value) * 2)))
}

pub fn plus() -> Function {
    Function::binary("plus", |left, right| {
        Ok(Value::from(integer(&left) + integer(&right)))
    })
}

pub fn sum_all() -> Function {
    Function::new("sum_all", crate::value::Arity::variadic(0), |arguments| {
        Ok(Value::from(arguments.iter().map(integer).sum::<i64>()))
    })
}

pub fn collect() -> Function {
    Function::new("collect", crate::value::Arity::variadic(0), |arguments| {
        Ok(Value::from(arguments.to_vec()))
    })
}

pub fn raise(message: &'static str) -> Function {
    Function::unary("raise", move |_| Err(Error::raised(message)))
}

pub fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}
