//! # bindery
//!
//! Computation contexts and an argument-binding engine for dynamically
//! shaped values.
//!
//! ## Overview
//!
//! - **Values**: [`Value`](value::Value), a dynamic value, and
//!   [`Function`](value::Function), a callable carrying its declared arity
//! - **Contexts**: Identity, Constant, Maybe, Optional, Either, IO, Writer,
//!   `EitherWriter` and Typed, with uniform `map` / `flat_map` / `ap` /
//!   `flat_ap` / `extract`, plus a transform bridge between families
//! - **Binding engine**: arity introspection, currying, partial application,
//!   composition and lifting combinators, and the `compose!`, `pipe!` and
//!   `partial!` macros
//! - **Control**: a trampoline for stack-safe recursive function values
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for plain data types
//! - `tracing`: debug events for captured failures and transforms
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use bindery::prelude::*;
//!
//! let must_contain_at = Function::unary("must_contain_at", |value| {
//!     if value.as_text().is_some_and(|text| text.contains('@')) {
//!         Ok(value)
//!     } else {
//!         Err(Error::raised("missing @"))
//!     }
//! });
//!
//! let accepted = Either::right("a@b.com").map(&must_contain_at);
//! let rejected = Either::right("nobody").map(&must_contain_at);
//!
//! assert_eq!(accepted, Either::right("a@b.com"));
//! assert_eq!(rejected, Either::left("missing @"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use bindery::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::context::*;
    pub use crate::control::*;
    pub use crate::error::{Error, Result};
    pub use crate::value::*;
}

pub mod compose;
pub mod context;
pub mod control;
pub mod error;
pub mod value;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};

static_assertions::assert_impl_all!(value::Value: Clone, std::fmt::Debug, PartialEq, Default);
static_assertions::assert_impl_all!(context::Context: Clone, std::fmt::Debug, PartialEq);
static_assertions::assert_impl_all!(error::Error: std::error::Error, Clone, PartialEq);
static_assertions::assert_impl_all!(context::Family: Copy, Eq, std::hash::Hash, std::fmt::Display);
static_assertions::assert_not_impl_any!(value::Function: Send, Sync);
