//! The aggregation channel carried by `Writer` and `EitherWriter`.
//!
//! An [`Aggregate`] is one of five closed kinds, each with its own combine
//! rule:
//!
//! | kind | combine |
//! |------|---------|
//! | `Text` | concatenation |
//! | `Sequence` | append |
//! | `Integer` | saturating sum |
//! | `Real` | sum |
//! | `Boolean` | logical OR |
//!
//! `Integer` and `Real` are both numeric and sum as `Real` when mixed. Every
//! other mixed pair falls back to concatenating both rendered forms as text.
//!
//! # Laws
//!
//! For aggregates of a single kind, `combine` is associative and
//! [`Aggregate::empty`] of that kind is its identity.
//!
//! # Examples
//!
//! ```rust
//! use bindery::context::Aggregate;
//!
//! let log = Aggregate::from("start;").combine(&Aggregate::from("end;"));
//! assert_eq!(log, Aggregate::from("start;end;"));
//!
//! let total = Aggregate::from(2_i64).combine(&Aggregate::from(3_i64));
//! assert_eq!(total, Aggregate::from(5_i64));
//!
//! let mixed = Aggregate::from("count=").combine(&Aggregate::from(3_i64));
//! assert_eq!(mixed, Aggregate::from("count=3"));
//! ```

use std::fmt;

use crate::value::Value;

/// The closed set of aggregation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AggregateKind {
    /// Accumulated text.
    Text,
    /// Accumulated list of values.
    Sequence,
    /// Integer running total.
    Integer,
    /// Real running total.
    Real,
    /// Running logical OR.
    Boolean,
}

/// An accumulated secondary value.
#[derive(Clone, Debug, PartialEq)]
pub enum Aggregate {
    /// Concatenated text.
    Text(String),
    /// Appended values.
    Sequence(Vec<Value>),
    /// Summed integers.
    Integer(i64),
    /// Summed reals.
    Real(f64),
    /// OR-ed flags.
    Boolean(bool),
}

impl Aggregate {
    /// The identity element of `kind`.
    pub const fn empty(kind: AggregateKind) -> Self {
        match kind {
            AggregateKind::Text => Self::Text(String::new()),
            AggregateKind::Sequence => Self::Sequence(Vec::new()),
            AggregateKind::Integer => Self::Integer(0),
            AggregateKind::Real => Self::Real(0.0),
            AggregateKind::Boolean => Self::Boolean(false),
        }
    }

    /// The kind of this aggregate.
    pub const fn kind(&self) -> AggregateKind {
        match self {
            Self::Text(_) => AggregateKind::Text,
            Self::Sequence(_) => AggregateKind::Sequence,
            Self::Integer(_) => AggregateKind::Integer,
            Self::Real(_) => AggregateKind::Real,
            Self::Boolean(_) => AggregateKind::Boolean,
        }
    }

    /// Combines two aggregates into a new one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => Self::Text(format!("{left}{right}")),
            (Self::Sequence(left), Self::Sequence(right)) => {
                Self::Sequence(left.iter().chain(right).cloned().collect())
            }
            (Self::Integer(left), Self::Integer(right)) => Self::Integer(left.saturating_add(*right)),
            (Self::Real(left), Self::Real(right)) => Self::Real(left + right),
            (Self::Integer(left), Self::Real(right)) => Self::Real(*left as f64 + right),
            (Self::Real(left), Self::Integer(right)) => Self::Real(left + *right as f64),
            (Self::Boolean(left), Self::Boolean(right)) => Self::Boolean(*left || *right),
            (left, right) => Self::Text(format!("{left}{right}")),
        }
    }

    /// Records a captured failure message.
    ///
    /// Sequences gain the message as a new element; every other kind combines
    /// with the message as text.
    #[must_use]
    pub fn record_failure(&self, message: &str) -> Self {
        match self {
            Self::Sequence(items) => {
                let mut extended = items.clone();
                extended.push(Value::from(message));
                Self::Sequence(extended)
            }
            other => other.combine(&Self::Text(message.to_owned())),
        }
    }

    /// Converts the aggregate into a plain value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(text) => Value::Text(text.clone()),
            Self::Sequence(items) => Value::List(items.clone()),
            Self::Integer(number) => Value::Integer(*number),
            Self::Real(number) => Value::Real(*number),
            Self::Boolean(flag) => Value::Bool(*flag),
        }
    }
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::empty(AggregateKind::Text)
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_value())
    }
}

impl From<&str> for Aggregate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Aggregate {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Value>> for Aggregate {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<i64> for Aggregate {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<f64> for Aggregate {
    fn from(number: f64) -> Self {
        Self::Real(number)
    }
}

impl From<bool> for Aggregate {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Aggregate::from("a"), Aggregate::from("b"), Aggregate::from("ab"))]
    #[case(
        Aggregate::from(vec![Value::from(1)]),
        Aggregate::from(vec![Value::from(2)]),
        Aggregate::from(vec![Value::from(1), Value::from(2)])
    )]
    #[case(Aggregate::from(2_i64), Aggregate::from(3_i64), Aggregate::from(5_i64))]
    #[case(Aggregate::from(1.5), Aggregate::from(2.0), Aggregate::from(3.5))]
    #[case(Aggregate::from(false), Aggregate::from(true), Aggregate::from(true))]
    #[case(Aggregate::from(false), Aggregate::from(false), Aggregate::from(false))]
    fn combine_follows_the_kind_rule(
        #[case] left: Aggregate,
        #[case] right: Aggregate,
        #[case] expected: Aggregate,
    ) {
        assert_eq!(left.combine(&right), expected);
    }

    #[rstest]
    fn integer_and_real_sum_as_real() {
        assert_eq!(
            Aggregate::from(1_i64).combine(&Aggregate::from(0.5)),
            Aggregate::from(1.5)
        );
        assert_eq!(
            Aggregate::from(0.5).combine(&Aggregate::from(1_i64)),
            Aggregate::from(1.5)
        );
    }

    #[rstest]
    #[case(Aggregate::from(true), Aggregate::from("x"), "truex")]
    #[case(Aggregate::from(vec![Value::from(1)]), Aggregate::from(7_i64), "[1]7")]
    #[case(Aggregate::from("n="), Aggregate::from(false), "n=false")]
    fn mismatched_kinds_fall_back_to_text(
        #[case] left: Aggregate,
        #[case] right: Aggregate,
        #[case] expected: &str,
    ) {
        assert_eq!(left.combine(&right), Aggregate::from(expected));
    }

    #[rstest]
    fn integer_sum_saturates() {
        assert_eq!(
            Aggregate::from(i64::MAX).combine(&Aggregate::from(1_i64)),
            Aggregate::from(i64::MAX)
        );
    }

    #[rstest]
    #[case(AggregateKind::Text)]
    #[case(AggregateKind::Sequence)]
    #[case(AggregateKind::Integer)]
    #[case(AggregateKind::Real)]
    #[case(AggregateKind::Boolean)]
    fn empty_is_the_identity_of_its_kind(#[case] kind: AggregateKind) {
        let sample = match kind {
            AggregateKind::Text => Aggregate::from("log"),
            AggregateKind::Sequence => Aggregate::from(vec![Value::from("x")]),
            AggregateKind::Integer => Aggregate::from(9_i64),
            AggregateKind::Real => Aggregate::from(2.5),
            AggregateKind::Boolean => Aggregate::from(true),
        };
        assert_eq!(Aggregate::empty(kind).combine(&sample), sample);
        assert_eq!(sample.combine(&Aggregate::empty(kind)), sample);
        assert_eq!(Aggregate::empty(kind).kind(), kind);
    }

    #[rstest]
    fn failures_are_pushed_onto_sequences() {
        let recorded = Aggregate::from(vec![Value::from("start")]).record_failure("boom");
        assert_eq!(
            recorded,
            Aggregate::from(vec![Value::from("start"), Value::from("boom")])
        );
    }

    #[rstest]
    fn failures_are_appended_to_text() {
        assert_eq!(
            Aggregate::from("start;").record_failure("boom"),
            Aggregate::from("start;boom")
        );
    }
}
