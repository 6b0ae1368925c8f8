//! `EitherWriter` context - [`Either`] semantics plus an [`Aggregate`].
//!
//! The outcome behaves like an `Either`: callbacks run only on `Right`, and a
//! failure raised by a callback flips the state to `Left`. On top of that the
//! failure message is recorded in the aggregate (see
//! [`Aggregate::record_failure`]), so the log of a failed chain explains what
//! went wrong.
//!
//! `flat_map` accepts either an `EitherWriter`, whose aggregate is combined
//! with the current one, or a plain `Either`, which contributes no output.

use super::{Aggregate, Either, Family, Variant, capture_failure, expect_function};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// The either-writer context.
///
/// # Examples
///
/// ```rust
/// use bindery::Error;
/// use bindery::context::{Aggregate, EitherWriter};
/// use bindery::value::{Function, Value};
///
/// let parse = Function::unary("parse", |value| {
///     let text = value.as_text().unwrap_or_default().to_owned();
///     match text.parse::<i64>() {
///         Ok(number) => Ok(Value::from(EitherWriter::right(number, format!("parsed {number};")))),
///         Err(_) => Err(Error::raised(format!("not a number: {text};"))),
///     }
/// });
///
/// let ok = EitherWriter::right("42", "start;").flat_map(&parse)?;
/// assert_eq!(ok, EitherWriter::right(42, "start;parsed 42;"));
///
/// let failed = EitherWriter::right("x", "start;").flat_map(&parse)?;
/// assert!(failed.is_left());
/// assert_eq!(failed.output(), &Aggregate::from("start;not a number: x;"));
/// # Ok::<(), bindery::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EitherWriter {
    outcome: Either,
    output: Aggregate,
}

impl EitherWriter {
    /// A success holding `value` with `output`.
    pub fn right(value: impl Into<Value>, output: impl Into<Aggregate>) -> Self {
        Self {
            outcome: Either::right(value),
            output: output.into(),
        }
    }

    /// A failure holding `error` with `output`.
    pub fn left(error: impl Into<Value>, output: impl Into<Aggregate>) -> Self {
        Self {
            outcome: Either::left(error),
            output: output.into(),
        }
    }

    /// Pairs an existing outcome with `output`.
    pub fn from_either(outcome: Either, output: impl Into<Aggregate>) -> Self {
        Self {
            outcome,
            output: output.into(),
        }
    }

    /// A success with a null value, recording `output`.
    pub fn tell(output: impl Into<Aggregate>) -> Self {
        Self::right(Value::Null, output)
    }

    /// Returns `true` for `Right`.
    pub const fn is_right(&self) -> bool {
        self.outcome.is_right()
    }

    /// Returns `true` for `Left`.
    pub const fn is_left(&self) -> bool {
        self.outcome.is_left()
    }

    /// Borrows the outcome.
    pub const fn outcome(&self) -> &Either {
        &self.outcome
    }

    /// Borrows the aggregate.
    pub const fn output(&self) -> &Aggregate {
        &self.output
    }

    /// Borrows the `Left` payload, if any.
    pub const fn left_value(&self) -> Option<&Value> {
        self.outcome.left_value()
    }

    /// Returns the outcome and the aggregate.
    pub fn run(&self) -> (Either, Aggregate) {
        (self.outcome.clone(), self.output.clone())
    }

    fn captured(&self, operation: &'static str, error: &Error) -> Self {
        let message = capture_failure(operation, error);
        Self {
            output: self.output.record_failure(&message),
            outcome: Either::Left(Value::from(message)),
        }
    }

    /// Applies `function` to a `Right` value, capturing a failure as `Left`.
    #[must_use]
    pub fn map(&self, function: &Function) -> Self {
        match &self.outcome {
            Either::Right(value) => match function.call1(value.clone()) {
                Ok(result) => Self {
                    outcome: Either::Right(result),
                    output: self.output.clone(),
                },
                Err(error) => self.captured("EitherWriter::map", &error),
            },
            Either::Left(_) => self.clone(),
        }
    }

    /// Applies a context-returning `function` to a `Right` value.
    ///
    /// An `EitherWriter` result has its aggregate combined with the current
    /// one; an `Either` result keeps the current aggregate. A failure raised by
    /// `function` becomes a `Left` and is recorded in the aggregate.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for any other result.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        match &self.outcome {
            Either::Right(value) => match function.call1(value.clone()) {
                Ok(result) => self.merge("EitherWriter::flat_map", result),
                Err(error) => Ok(self.captured("EitherWriter::flat_map", &error)),
            },
            Either::Left(_) => Ok(self.clone()),
        }
    }

    /// Applies the function in a `Right` to `argument`'s value, combining
    /// aggregates. The first `Left` wins, keeping both aggregates.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `self` is `Right` but not a function.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        let output = self.output.combine(&argument.output);
        match (&self.outcome, &argument.outcome) {
            (Either::Right(function), Either::Right(value)) => {
                let function = expect_function("EitherWriter::ap", function)?;
                let combined = Self {
                    outcome: self.outcome.clone(),
                    output,
                };
                Ok(match function.call1(value.clone()) {
                    Ok(result) => Self {
                        outcome: Either::Right(result),
                        output: combined.output,
                    },
                    Err(error) => combined.captured("EitherWriter::ap", &error),
                })
            }
            (Either::Left(_), _) => Ok(Self {
                outcome: self.outcome.clone(),
                output,
            }),
            (_, Either::Left(_)) => Ok(Self {
                outcome: argument.outcome.clone(),
                output,
            }),
        }
    }

    /// As [`EitherWriter::ap`], flattening the context the function returns.
    ///
    /// # Errors
    ///
    /// As [`EitherWriter::ap`] and [`EitherWriter::flat_map`].
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        let combined = Self {
            outcome: self.outcome.clone(),
            output: self.output.combine(&argument.output),
        };
        match (&self.outcome, &argument.outcome) {
            (Either::Right(function), Either::Right(value)) => {
                let function = expect_function("EitherWriter::flat_ap", function)?;
                match function.call1(value.clone()) {
                    Ok(result) => combined.merge("EitherWriter::flat_ap", result),
                    Err(error) => Ok(combined.captured("EitherWriter::flat_ap", &error)),
                }
            }
            (Either::Left(_), _) => Ok(combined),
            (_, Either::Left(_)) => Ok(Self {
                outcome: argument.outcome.clone(),
                output: combined.output,
            }),
        }
    }

    fn merge(&self, operation: &'static str, result: Value) -> Result<Self> {
        match result {
            Value::Context(context) => match *context {
                Context::EitherWriter(next) => Ok(Self {
                    outcome: next.outcome,
                    output: self.output.combine(&next.output),
                }),
                Context::Either(outcome) => Ok(Self {
                    outcome,
                    output: self.output.clone(),
                }),
                other => Err(Error::type_mismatch(operation, Self::FAMILY, other.family())),
            },
            other => Err(Error::type_mismatch(operation, Family::EitherWriter, other.kind())),
        }
    }

    /// Terminal inspection of both states; both callbacks see the aggregate.
    pub fn fold<T>(
        &self,
        on_left: impl FnOnce(&Value, &Aggregate) -> T,
        on_right: impl FnOnce(&Value, &Aggregate) -> T,
    ) -> T {
        match &self.outcome {
            Either::Left(error) => on_left(error, &self.output),
            Either::Right(value) => on_right(value, &self.output),
        }
    }

    /// Unwraps either payload, recursively.
    ///
    /// # Errors
    ///
    /// Propagates a failure from a nested IO effect.
    pub fn extract(&self) -> Result<Value> {
        self.outcome.extract()
    }
}
