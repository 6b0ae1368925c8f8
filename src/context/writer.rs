//! Writer context - a value paired with an accumulated [`Aggregate`].
//!
//! `map` keeps the aggregate as is; `flat_map` and `ap` combine the current
//! aggregate with the one produced by the next step using the kind-specific
//! rule of [`Aggregate::combine`]. Failures raised by callbacks reach the
//! caller.
//!
//! # Examples
//!
//! ```rust
//! use bindery::context::{Aggregate, Writer};
//! use bindery::value::{Function, Value};
//!
//! let step = Function::unary("step", |value| {
//!     let next = value.as_integer().unwrap_or(0) + 1;
//!     Ok(Value::from(Writer::new(next, format!("incremented to {next};"))))
//! });
//!
//! let writer = Writer::new(1, "start;").flat_map(&step)?.flat_map(&step)?;
//! assert_eq!(writer.value(), &Value::from(3));
//! assert_eq!(
//!     writer.output(),
//!     &Aggregate::from("start;incremented to 2;incremented to 3;")
//! );
//! # Ok::<(), bindery::Error>(())
//! ```

use super::{Aggregate, AggregateKind, deep_extract, expect_function, expect_variant};
use crate::error::Result;
use crate::value::{Function, Value};

/// The writer context.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Writer {
    value: Value,
    output: Aggregate,
}

impl Writer {
    /// Pairs `value` with `output`.
    pub fn new(value: impl Into<Value>, output: impl Into<Aggregate>) -> Self {
        Self {
            value: value.into(),
            output: output.into(),
        }
    }

    /// Pairs `value` with an empty text aggregate.
    pub fn of(value: impl Into<Value>) -> Self {
        Self::pure(value, AggregateKind::Text)
    }

    /// Pairs `value` with an empty aggregate of `kind`.
    pub fn pure(value: impl Into<Value>, kind: AggregateKind) -> Self {
        Self::new(value, Aggregate::empty(kind))
    }

    /// Records `output` with a null value.
    pub fn tell(output: impl Into<Aggregate>) -> Self {
        Self::new(Value::Null, output)
    }

    /// Borrows the value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Borrows the aggregate.
    pub const fn output(&self) -> &Aggregate {
        &self.output
    }

    /// Returns the value and the aggregate.
    pub fn run(&self) -> (Value, Aggregate) {
        (self.value.clone(), self.output.clone())
    }

    /// Applies `function` to the value, keeping the aggregate.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by `function`.
    pub fn map(&self, function: &Function) -> Result<Self> {
        Ok(Self {
            value: function.call1(self.value.clone())?,
            output: self.output.clone(),
        })
    }

    /// Applies a `Writer`-returning `function`, combining both aggregates.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `function` returns anything but a `Writer`.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        let next: Self = expect_variant("Writer::flat_map", function.call1(self.value.clone())?)?;
        Ok(self.followed_by(next))
    }

    /// Applies the boxed function to `argument`'s value, combining aggregates.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the boxed value is not a function.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        let function = expect_function("Writer::ap", &self.value)?;
        Ok(Self {
            value: function.call1(argument.value.clone())?,
            output: self.output.combine(&argument.output),
        })
    }

    /// Applies the boxed `Writer`-returning function to `argument`'s value.
    ///
    /// The three aggregates are combined in order: `self`, `argument`, result.
    ///
    /// # Errors
    ///
    /// As [`Writer::ap`] and [`Writer::flat_map`].
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        let function = expect_function("Writer::flat_ap", &self.value)?;
        let next: Self = expect_variant("Writer::flat_ap", function.call1(argument.value.clone())?)?;
        Ok(Self {
            value: next.value,
            output: self.output.combine(&argument.output).combine(&next.output),
        })
    }

    /// Appends `output` to the aggregate.
    #[must_use]
    pub fn tell_more(&self, output: impl Into<Aggregate>) -> Self {
        Self {
            value: self.value.clone(),
            output: self.output.combine(&output.into()),
        }
    }

    fn followed_by(&self, next: Self) -> Self {
        Self {
            value: next.value,
            output: self.output.combine(&next.output),
        }
    }

    /// Unwraps the value, recursively.
    ///
    /// # Errors
    ///
    /// Propagates a failure from a nested IO effect.
    pub fn extract(&self) -> Result<Value> {
        deep_extract(&self.value)
    }
}
