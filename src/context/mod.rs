//! Computation contexts.
//!
//! A context boxes exactly one [`Value`] and offers a uniform set of
//! composition operations: `map`, `flat_map`, `ap`, `flat_ap` and `extract`.
//! Contexts are immutable; every operation returns a fresh instance.
//!
//! # Variants
//!
//! - [`Identity`]: no additional behaviour
//! - [`Constant`]: ignores every mapping (the getter side of a lens)
//! - [`Maybe`]: `Just` / `Nothing`
//! - [`Optional`]: `Just` / `Nothing`, with `of_nullable`, `filter` and defaults
//! - [`Either`]: `Right` / `Left`, capturing callback failures as `Left`
//! - [`IO`]: a deferred, re-invokable effect
//! - [`Writer`]: a value plus an [`Aggregate`]
//! - [`EitherWriter`]: `Either` semantics plus an [`Aggregate`]
//! - [`Typed`]: a value constrained to one [`ValueKind`](crate::value::ValueKind)
//!
//! [`Context`] is the closed sum over all of them. Each variant is usable on its
//! own; the sum type is what flows through [`Value::Context`] and what the
//! combinators in [`crate::compose`] work with.
//!
//! # Failure capture
//!
//! A callback signals failure by returning `Err`. `Either` and `EitherWriter`
//! convert that failure into their `Left` state, using the error's message as
//! the payload. Every other variant hands the failure back to the caller.
//!
//! # Laws
//!
//! For every variant and every non-short-circuiting state:
//!
//! - **Identity**: `ctx.map(identity) == ctx`
//! - **Composition**: `ctx.map(compose([f, g])) == ctx.map(g).map(f)`
//!
//! # Examples
//!
//! ```rust
//! use bindery::context::Either;
//! use bindery::value::{Function, Value};
//!
//! let add_one = Function::unary("add_one", |value| {
//!     Ok(Value::from(value.as_integer().unwrap_or(0) + 1))
//! });
//! let double = Function::unary("double", |value| {
//!     Ok(Value::from(value.as_integer().unwrap_or(0) * 2))
//! });
//!
//! let result = Either::right(5).map(&add_one).map(&double);
//! assert_eq!(result, Either::right(12));
//! ```

mod aggregate;
mod constant;
mod either;
mod either_writer;
mod identity;
mod io;
mod maybe;
mod optional;
mod transform;
mod typed;
mod writer;

use std::fmt;

pub use aggregate::{Aggregate, AggregateKind};
pub use constant::Constant;
pub use either::Either;
pub use either_writer::EitherWriter;
pub use identity::Identity;
pub use io::IO;
pub use maybe::Maybe;
pub use optional::Optional;
pub use transform::supported_targets;
pub use typed::Typed;
pub use writer::Writer;

use crate::error::{Error, Result};
use crate::value::{Function, Value, ValueKind};

/// Names a context family; the targets of [`Context::transform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Family {
    /// [`Identity`]
    Identity,
    /// [`Constant`]
    Constant,
    /// [`Maybe`]
    Maybe,
    /// [`Optional`]
    Optional,
    /// [`Either`]
    Either,
    /// [`IO`]
    IO,
    /// [`Writer`]
    Writer,
    /// [`EitherWriter`]
    EitherWriter,
    /// [`Typed`]
    Typed,
}

impl fmt::Display for Family {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

/// Any computation context.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Context {
    /// See [`Identity`].
    Identity(Identity),
    /// See [`Constant`].
    Constant(Constant),
    /// See [`Maybe`].
    Maybe(Maybe),
    /// See [`Optional`].
    Optional(Optional),
    /// See [`Either`].
    Either(Either),
    /// See [`IO`].
    IO(IO),
    /// See [`Writer`].
    Writer(Writer),
    /// See [`EitherWriter`].
    EitherWriter(EitherWriter),
    /// See [`Typed`].
    Typed(Typed),
}

/// Implemented by every concrete context type.
///
/// Used to check that a `flat_map` callback returned the expected family.
pub trait Variant: Sized + Into<Context> {
    /// The family this type belongs to.
    const FAMILY: Family;

    /// Unwraps `context` if it belongs to this family, handing it back otherwise.
    ///
    /// # Errors
    ///
    /// Returns the original context when the family does not match.
    fn from_context(context: Context) -> std::result::Result<Self, Context>;
}

macro_rules! impl_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl Variant for $variant {
                const FAMILY: Family = Family::$variant;

                fn from_context(context: Context) -> std::result::Result<Self, Context> {
                    match context {
                        Context::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }

            impl From<$variant> for Context {
                fn from(inner: $variant) -> Self {
                    Self::$variant(inner)
                }
            }

            impl From<$variant> for Value {
                fn from(inner: $variant) -> Self {
                    Self::from(Context::from(inner))
                }
            }
        )*
    };
}

impl_variant!(
    Identity,
    Constant,
    Maybe,
    Optional,
    Either,
    IO,
    Writer,
    EitherWriter,
    Typed,
);

impl Context {
    /// Wraps a plain value in the unit instance of `family`.
    ///
    /// Maybe and Optional become `Just`, Either and `EitherWriter` become
    /// `Right`, Writer gets an empty text aggregate, IO always yields the value
    /// and Typed takes the value's own kind.
    pub fn of(family: Family, value: Value) -> Self {
        match family {
            Family::Identity => Identity::new(value).into(),
            Family::Constant => Constant::new(value).into(),
            Family::Maybe => Maybe::just(value).into(),
            Family::Optional => Optional::just(value).into(),
            Family::Either => Either::right(value).into(),
            Family::IO => IO::of(value).into(),
            Family::Writer => Writer::of(value).into(),
            Family::EitherWriter => EitherWriter::right(value, Aggregate::default()).into(),
            Family::Typed => Typed::infer(value).into(),
        }
    }

    /// The family of this context.
    pub const fn family(&self) -> Family {
        match self {
            Self::Identity(_) => Family::Identity,
            Self::Constant(_) => Family::Constant,
            Self::Maybe(_) => Family::Maybe,
            Self::Optional(_) => Family::Optional,
            Self::Either(_) => Family::Either,
            Self::IO(_) => Family::IO,
            Self::Writer(_) => Family::Writer,
            Self::EitherWriter(_) => Family::EitherWriter,
            Self::Typed(_) => Family::Typed,
        }
    }

    /// Returns `false` for `Nothing` and `Left` states.
    pub const fn is_active(&self) -> bool {
        match self {
            Self::Maybe(maybe) => maybe.is_just(),
            Self::Optional(optional) => optional.is_present(),
            Self::Either(either) => either.is_right(),
            Self::EitherWriter(either_writer) => either_writer.is_right(),
            Self::Identity(_) | Self::Constant(_) | Self::IO(_) | Self::Writer(_) | Self::Typed(_) => {
                true
            }
        }
    }

    /// The payload describing an inactive state, or `None` when active.
    ///
    /// `Left` yields its payload; `Nothing` yields the text `"Nothing"`.
    pub fn inactive_payload(&self) -> Option<Value> {
        match self {
            Self::Maybe(Maybe::Nothing) | Self::Optional(Optional::Nothing) => {
                Some(Value::from("Nothing"))
            }
            Self::Either(Either::Left(payload)) => Some(payload.clone()),
            Self::EitherWriter(either_writer) => either_writer.left_value().cloned(),
            _ => None,
        }
    }

    /// Applies `function` inside the context.
    ///
    /// # Errors
    ///
    /// Propagates a failure raised by `function` for every family except
    /// Either and `EitherWriter`, which capture it. Typed also fails when the
    /// result has the wrong kind.
    pub fn map(&self, function: &Function) -> Result<Self> {
        Ok(match self {
            Self::Identity(inner) => inner.map(function)?.into(),
            Self::Constant(inner) => inner.map(function).into(),
            Self::Maybe(inner) => inner.map(function)?.into(),
            Self::Optional(inner) => inner.map(function)?.into(),
            Self::Either(inner) => inner.map(function).into(),
            Self::IO(inner) => inner.map(function).into(),
            Self::Writer(inner) => inner.map(function)?.into(),
            Self::EitherWriter(inner) => inner.map(function).into(),
            Self::Typed(inner) => inner.map(function)?.into(),
        })
    }

    /// Applies a context-returning `function` and flattens the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when `function` does not return a
    /// context of the same family, and propagates uncaptured failures as
    /// [`Context::map`] does.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        Ok(match self {
            Self::Identity(inner) => inner.flat_map(function)?.into(),
            Self::Constant(inner) => inner.flat_map(function).into(),
            Self::Maybe(inner) => inner.flat_map(function)?.into(),
            Self::Optional(inner) => inner.flat_map(function)?.into(),
            Self::Either(inner) => inner.flat_map(function)?.into(),
            Self::IO(inner) => inner.flat_map(function).into(),
            Self::Writer(inner) => inner.flat_map(function)?.into(),
            Self::EitherWriter(inner) => inner.flat_map(function)?.into(),
            Self::Typed(inner) => inner.flat_map(function)?.into(),
        })
    }

    /// Applies the function held by `self` to the value held by `argument`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when the two contexts belong to
    /// different families or `self` does not hold a function.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        Ok(match (self, argument) {
            (Self::Identity(function), Self::Identity(value)) => function.ap(value)?.into(),
            (Self::Constant(function), Self::Constant(value)) => function.ap(value).into(),
            (Self::Maybe(function), Self::Maybe(value)) => function.ap(value)?.into(),
            (Self::Optional(function), Self::Optional(value)) => function.ap(value)?.into(),
            (Self::Either(function), Self::Either(value)) => function.ap(value)?.into(),
            (Self::IO(function), Self::IO(value)) => function.ap(value).into(),
            (Self::Writer(function), Self::Writer(value)) => function.ap(value)?.into(),
            (Self::EitherWriter(function), Self::EitherWriter(value)) => {
                function.ap(value)?.into()
            }
            (Self::Typed(function), Self::Typed(value)) => function.ap(value)?.into(),
            (function, value) => {
                return Err(Error::type_mismatch(
                    "Context::ap",
                    function.family(),
                    value.family(),
                ));
            }
        })
    }

    /// Like [`Context::ap`], but the held function returns a context which is
    /// flattened.
    ///
    /// # Errors
    ///
    /// As [`Context::ap`], plus [`Error::TypeMismatch`] when the function's
    /// result is not a context of the same family.
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        Ok(match (self, argument) {
            (Self::Identity(function), Self::Identity(value)) => function.flat_ap(value)?.into(),
            (Self::Constant(function), Self::Constant(value)) => function.ap(value).into(),
            (Self::Maybe(function), Self::Maybe(value)) => function.flat_ap(value)?.into(),
            (Self::Optional(function), Self::Optional(value)) => function.flat_ap(value)?.into(),
            (Self::Either(function), Self::Either(value)) => function.flat_ap(value)?.into(),
            (Self::IO(function), Self::IO(value)) => function.flat_ap(value).into(),
            (Self::Writer(function), Self::Writer(value)) => function.flat_ap(value)?.into(),
            (Self::EitherWriter(function), Self::EitherWriter(value)) => {
                function.flat_ap(value)?.into()
            }
            (Self::Typed(function), Self::Typed(value)) => function.flat_ap(value)?.into(),
            (function, value) => {
                return Err(Error::type_mismatch(
                    "Context::flat_ap",
                    function.family(),
                    value.family(),
                ));
            }
        })
    }

    /// Unwraps the boxed value, recursively unwrapping nested contexts.
    ///
    /// `Nothing` extracts as null, `Left` as its payload, and IO runs its effect.
    ///
    /// # Errors
    ///
    /// Propagates a failure raised while running an IO effect.
    pub fn extract(&self) -> Result<Value> {
        match self {
            Self::Identity(inner) => inner.extract(),
            Self::Constant(inner) => inner.extract(),
            Self::Maybe(inner) => inner.extract(),
            Self::Optional(inner) => inner.extract(),
            Self::Either(inner) => inner.extract(),
            Self::IO(inner) => inner.extract(),
            Self::Writer(inner) => inner.extract(),
            Self::EitherWriter(inner) => inner.extract(),
            Self::Typed(inner) => inner.extract(),
        }
    }
}

/// Checks that `value` is a context of family `V` and unwraps it.
pub(crate) fn expect_variant<V: Variant>(operation: &'static str, value: Value) -> Result<V> {
    match value {
        Value::Context(context) => V::from_context(*context)
            .map_err(|other| Error::type_mismatch(operation, V::FAMILY, other.family())),
        other => Err(Error::type_mismatch(operation, V::FAMILY, other.kind())),
    }
}

/// Checks that `value` holds a function.
pub(crate) fn expect_function<'a>(operation: &'static str, value: &'a Value) -> Result<&'a Function> {
    value
        .as_function()
        .ok_or_else(|| Error::type_mismatch(operation, ValueKind::Function, value.kind()))
}

/// Unwraps nested contexts until a plain value remains.
pub(crate) fn deep_extract(value: &Value) -> Result<Value> {
    match value {
        Value::Context(context) => context.extract(),
        plain => Ok(plain.clone()),
    }
}

/// Turns a callback failure into the payload of a `Left`.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn capture_failure(operation: &'static str, error: &Error) -> String {
    let message = error.to_string();
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, %message, "callback failure captured");
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{add_one, double, raise};
    use rstest::rstest;

    #[rstest]
    #[case(Family::Identity)]
    #[case(Family::Constant)]
    #[case(Family::Maybe)]
    #[case(Family::Optional)]
    #[case(Family::Either)]
    #[case(Family::IO)]
    #[case(Family::Writer)]
    #[case(Family::EitherWriter)]
    #[case(Family::Typed)]
    fn of_produces_an_active_instance_of_the_family(#[case] family: Family) {
        let context = Context::of(family, Value::from(3));
        assert_eq!(context.family(), family);
        assert!(context.is_active());
        assert_eq!(context.extract().unwrap(), Value::from(3));
    }

    #[rstest]
    fn map_dispatches_to_the_variant() {
        let context = Context::from(Maybe::just(4)).map(&double()).unwrap();
        assert_eq!(context, Context::from(Maybe::just(8)));
    }

    #[rstest]
    fn map_propagates_failures_outside_either() {
        let result = Context::from(Identity::new(1)).map(&raise("bad"));
        assert_eq!(result, Err(Error::raised("bad")));
    }

    #[rstest]
    fn map_captures_failures_inside_either() {
        let result = Context::from(Either::right(1)).map(&raise("bad")).unwrap();
        assert_eq!(result, Context::from(Either::left("bad")));
    }

    #[rstest]
    fn ap_across_families_is_a_type_mismatch() {
        let function = Context::from(Maybe::just(Value::from(add_one())));
        let argument = Context::from(Either::right(1));
        assert_eq!(
            function.ap(&argument),
            Err(Error::type_mismatch("Context::ap", Family::Maybe, Family::Either))
        );
    }

    #[rstest]
    fn ap_within_a_family_applies_the_function() {
        let function = Context::from(Identity::new(Value::from(add_one())));
        let argument = Context::from(Identity::new(41));
        assert_eq!(
            function.ap(&argument).unwrap(),
            Context::from(Identity::new(42))
        );
    }

    #[rstest]
    fn extract_unwraps_nested_contexts() {
        let nested = Identity::new(Value::from(Maybe::just(Value::from(Either::right(7)))));
        assert_eq!(Context::from(nested).extract().unwrap(), Value::from(7));
    }

    #[rstest]
    fn inactive_payloads_describe_the_state() {
        assert_eq!(
            Context::from(Maybe::nothing()).inactive_payload(),
            Some(Value::from("Nothing"))
        );
        assert_eq!(
            Context::from(Either::left("oops")).inactive_payload(),
            Some(Value::from("oops"))
        );
        assert_eq!(Context::from(Either::right(1)).inactive_payload(), None);
    }

    #[rstest]
    fn expect_variant_rejects_plain_values() {
        let error = expect_variant::<Maybe>("Maybe::flat_map", Value::from(1)).unwrap_err();
        assert_eq!(
            error,
            Error::type_mismatch("Maybe::flat_map", Family::Maybe, ValueKind::Integer)
        );
    }
}
