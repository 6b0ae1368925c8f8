//! Explicit conversion between context families.
//!
//! Each source family declares the finite list of families it converts into
//! ([`supported_targets`]) and one mapping per entry. Nothing is inferred:
//! a pair missing from the table, or a state the mapping does not cover (for
//! example a `Left` into `Identity`), fails with
//! [`Error::TransformUnsupported`]. Converting into the source's own family
//! returns an equal instance.
//!
//! | source | targets |
//! |--------|---------|
//! | Identity | Constant, Maybe, Optional, Either, IO, Writer |
//! | Constant | Identity, Maybe, Either, IO |
//! | Maybe | Optional, Either, Identity, Constant, IO |
//! | Optional | Maybe, Either, Constant, Identity, IO |
//! | Either | Maybe, Optional, `EitherWriter`, Identity (`Right` only) |
//! | IO | Identity, Constant, Maybe, Either |
//! | Writer | Identity, `EitherWriter`, Either |
//! | `EitherWriter` | Either, Writer (`Right` only), Maybe |
//! | Typed | Identity, Maybe, Either |
//!
//! `Nothing` becomes `Left("Nothing")` when the target is Either; `Left`
//! becomes `Nothing` when the target is Maybe or Optional. IO runs its effect
//! to convert; into Either a failure becomes `Left`, into any other target it
//! propagates.
//!
//! # Examples
//!
//! ```rust
//! use bindery::context::{Context, Either, Family, Optional};
//!
//! let present = Context::from(Optional::just(3)).transform(Family::Either)?;
//! assert_eq!(present, Context::from(Either::right(3)));
//!
//! let absent = Context::from(Optional::nothing()).transform(Family::Either)?;
//! assert_eq!(absent, Context::from(Either::left("Nothing")));
//!
//! assert!(Context::from(Optional::just(3)).transform(Family::Writer).is_err());
//! # Ok::<(), bindery::Error>(())
//! ```

use super::{
    Aggregate, Constant, Context, Either, EitherWriter, Family, IO, Identity, Maybe, Optional,
    Typed, Writer,
};
use crate::error::{Error, Result};
use crate::value::Value;

const IDENTITY_TARGETS: &[Family] = &[
    Family::Constant,
    Family::Maybe,
    Family::Optional,
    Family::Either,
    Family::IO,
    Family::Writer,
];
const CONSTANT_TARGETS: &[Family] = &[Family::Identity, Family::Maybe, Family::Either, Family::IO];
const MAYBE_TARGETS: &[Family] = &[
    Family::Optional,
    Family::Either,
    Family::Identity,
    Family::Constant,
    Family::IO,
];
const OPTIONAL_TARGETS: &[Family] = &[
    Family::Maybe,
    Family::Either,
    Family::Constant,
    Family::Identity,
    Family::IO,
];
const EITHER_TARGETS: &[Family] = &[
    Family::Maybe,
    Family::Optional,
    Family::EitherWriter,
    Family::Identity,
];
const IO_TARGETS: &[Family] = &[Family::Identity, Family::Constant, Family::Maybe, Family::Either];
const WRITER_TARGETS: &[Family] = &[Family::Identity, Family::EitherWriter, Family::Either];
const EITHER_WRITER_TARGETS: &[Family] = &[Family::Either, Family::Writer, Family::Maybe];
const TYPED_TARGETS: &[Family] = &[Family::Identity, Family::Maybe, Family::Either];

/// The families `source` declares a mapping into, besides itself.
///
/// # Examples
///
/// ```rust
/// use bindery::context::{Family, supported_targets};
///
/// assert!(supported_targets(Family::Optional).contains(&Family::Either));
/// assert!(!supported_targets(Family::Writer).contains(&Family::Maybe));
/// ```
pub const fn supported_targets(source: Family) -> &'static [Family] {
    match source {
        Family::Identity => IDENTITY_TARGETS,
        Family::Constant => CONSTANT_TARGETS,
        Family::Maybe => MAYBE_TARGETS,
        Family::Optional => OPTIONAL_TARGETS,
        Family::Either => EITHER_TARGETS,
        Family::IO => IO_TARGETS,
        Family::Writer => WRITER_TARGETS,
        Family::EitherWriter => EITHER_WRITER_TARGETS,
        Family::Typed => TYPED_TARGETS,
    }
}

fn nothing_as_left() -> Either {
    Either::left("Nothing")
}

impl Context {
    /// Converts this context into an equivalent instance of `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransformUnsupported`] when no mapping is declared for
    /// the pair or for the current state, and propagates a failure raised by
    /// an IO effect run during conversion.
    pub fn transform(&self, target: Family) -> Result<Self> {
        let origin = self.family();
        if origin == target {
            return Ok(self.clone());
        }
        let converted = match self {
            Self::Identity(identity) => identity.transform(target),
            Self::Constant(constant) => constant.transform(target),
            Self::Maybe(maybe) => maybe.transform(target),
            Self::Optional(optional) => optional.transform(target),
            Self::Either(either) => either.transform(target),
            Self::IO(io) => io.transform(target),
            Self::Writer(writer) => writer.transform(target),
            Self::EitherWriter(either_writer) => either_writer.transform(target),
            Self::Typed(typed) => typed.transform(target),
        };
        match converted {
            Ok(Some(context)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%origin, %target, "context transformed");
                Ok(context)
            }
            Ok(None) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%origin, %target, "no transform mapping");
                Err(Error::transform_unsupported(origin, target))
            }
            Err(error) => Err(error),
        }
    }
}

impl Identity {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        let value = self.value().clone();
        Ok(Some(match target {
            Family::Constant => Constant::new(value).into(),
            Family::Maybe => Maybe::just(value).into(),
            Family::Optional => Optional::just(value).into(),
            Family::Either => Either::right(value).into(),
            Family::IO => IO::of(value).into(),
            Family::Writer => Writer::of(value).into(),
            _ => return Ok(None),
        }))
    }
}

impl Constant {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        let value = self.value().clone();
        Ok(Some(match target {
            Family::Identity => Identity::new(value).into(),
            Family::Maybe => Maybe::just(value).into(),
            Family::Either => Either::right(value).into(),
            Family::IO => IO::of(value).into(),
            _ => return Ok(None),
        }))
    }
}

impl Maybe {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        Ok(Some(match (self, target) {
            (Self::Just(value), Family::Optional) => Optional::just(value.clone()).into(),
            (Self::Nothing, Family::Optional) => Optional::nothing().into(),
            (Self::Just(value), Family::Either) => Either::right(value.clone()).into(),
            (Self::Nothing, Family::Either) => nothing_as_left().into(),
            (Self::Just(value), Family::Identity) => Identity::new(value.clone()).into(),
            (Self::Nothing, Family::Identity) => Identity::new(Value::Null).into(),
            (Self::Just(value), Family::Constant) => Constant::new(value.clone()).into(),
            (Self::Nothing, Family::Constant) => Constant::new(Value::Null).into(),
            (Self::Just(value), Family::IO) => IO::of(value.clone()).into(),
            (Self::Nothing, Family::IO) => IO::of(Value::Null).into(),
            _ => return Ok(None),
        }))
    }
}

impl Optional {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        Ok(Some(match (self, target) {
            (Self::Just(value), Family::Maybe) => Maybe::just(value.clone()).into(),
            (Self::Nothing, Family::Maybe) => Maybe::nothing().into(),
            (Self::Just(value), Family::Either) => Either::right(value.clone()).into(),
            (Self::Nothing, Family::Either) => nothing_as_left().into(),
            (Self::Just(value), Family::Constant) => Constant::new(value.clone()).into(),
            (Self::Nothing, Family::Constant) => Constant::new(Value::Null).into(),
            (Self::Just(value), Family::Identity) => Identity::new(value.clone()).into(),
            (Self::Nothing, Family::Identity) => Identity::new(Value::Null).into(),
            (Self::Just(value), Family::IO) => IO::of(value.clone()).into(),
            (Self::Nothing, Family::IO) => IO::of(Value::Null).into(),
            _ => return Ok(None),
        }))
    }
}

impl Either {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        Ok(Some(match (self, target) {
            (Self::Right(value), Family::Maybe) => Maybe::just(value.clone()).into(),
            (Self::Left(_), Family::Maybe) => Maybe::nothing().into(),
            (Self::Right(value), Family::Optional) => Optional::just(value.clone()).into(),
            (Self::Left(_), Family::Optional) => Optional::nothing().into(),
            (_, Family::EitherWriter) => {
                EitherWriter::from_either(self.clone(), Aggregate::default()).into()
            }
            (Self::Right(value), Family::Identity) => Identity::new(value.clone()).into(),
            _ => return Ok(None),
        }))
    }
}

impl IO {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        Ok(Some(match target {
            Family::Identity => Identity::new(self.run()?).into(),
            Family::Constant => Constant::new(self.run()?).into(),
            Family::Maybe => Maybe::just(self.run()?).into(),
            Family::Either => Either::from_result(self.run(), "IO::transform").into(),
            _ => return Ok(None),
        }))
    }
}

impl Writer {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        let value = self.value().clone();
        Ok(Some(match target {
            Family::Identity => Identity::new(value).into(),
            Family::EitherWriter => EitherWriter::right(value, self.output().clone()).into(),
            Family::Either => Either::right(value).into(),
            _ => return Ok(None),
        }))
    }
}

impl EitherWriter {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        Ok(Some(match (self.outcome(), target) {
            (outcome, Family::Either) => outcome.clone().into(),
            (Either::Right(value), Family::Writer) => {
                Writer::new(value.clone(), self.output().clone()).into()
            }
            (Either::Right(value), Family::Maybe) => Maybe::just(value.clone()).into(),
            (Either::Left(_), Family::Maybe) => Maybe::nothing().into(),
            _ => return Ok(None),
        }))
    }
}

impl Typed {
    fn transform(&self, target: Family) -> Result<Option<Context>> {
        let value = self.value().clone();
        Ok(Some(match target {
            Family::Identity => Identity::new(value).into(),
            Family::Maybe => Maybe::just(value).into(),
            Family::Either => Either::right(value).into(),
            _ => return Ok(None),
        }))
    }
}
