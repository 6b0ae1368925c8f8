//! The argument-binding engine.
//!
//! Everything here consumes and produces [`Function`] values, so the results
//! can be fed straight into the [`context`](crate::context) operations.
//!
//! # Overview
//!
//! - Arity introspection: [`arity`], [`arity_of`], [`signature`]
//! - Currying: [`curry_n`], [`curry`], [`thunkify`]
//! - Arity adaptation: [`ary`], [`unary`], [`binary`]
//! - Partial application: [`partial`], [`partial_r`], [`partial_p`]
//! - Composition: [`compose`], [`pipe`], [`converge`]
//! - Lifting into a context: [`lift_to`], [`lift_m`], [`lift_e`]
//! - Helpers: [`identity`], [`constant`], [`flip`]
//!
//! The [`compose!`](crate::compose!), [`pipe!`](crate::pipe!) and
//! [`partial!`](crate::partial!) macros are shorthands for the functions of
//! the same name.
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use bindery::compose::compose;
//! use bindery::value::{Function, Value};
//!
//! let add_one = Function::unary("add_one", |value| {
//!     Ok(Value::from(value.as_integer().unwrap_or(0) + 1))
//! });
//! let double = Function::unary("double", |value| {
//!     Ok(Value::from(value.as_integer().unwrap_or(0) * 2))
//! });
//!
//! // compose([f, g])(x) = f(g(x))
//! let composed = compose([add_one, double]);
//! assert_eq!(composed.call(&[Value::from(5)])?, Value::from(11));
//! # Ok::<(), bindery::Error>(())
//! ```
//!
//! ## Currying
//!
//! ```
//! use bindery::compose::curry;
//! use bindery::value::{Function, Value};
//!
//! let add = Function::binary("add", |left, right| {
//!     Ok(Value::from(left.as_integer().unwrap_or(0) + right.as_integer().unwrap_or(0)))
//! });
//!
//! let add_five = curry(add, false).call(&[Value::from(5)])?;
//! assert_eq!(add_five.call(&[Value::from(3)])?, Value::from(8));
//! # Ok::<(), bindery::Error>(())
//! ```
//!
//! # Mathematical Background
//!
//! ```text
//! (f . g)(x)              = f(g(x))
//! x |> f |> g |> h        = h(g(f(x)))
//! partial(f, a)(b)        = f(a, b)
//! curry(f)(a)(b)(c)       = f(a, b, c)
//! converge(g, [b1, b2])(x) = g(b1(x), b2(x))
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity(), f) == f`
//! - **Right Identity**: `compose!(f, identity()) == f`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//!
//! ## Currying Laws
//!
//! - **Split invariance**: for any split of `a1..an` into consecutive
//!   non-empty groups, calling `curry_n(n, f)` group by group yields
//!   `f(a1, ..., an)`

mod arity;
mod combinators;
mod compose_macro;
mod curry;
mod lift;
mod partial;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use arity::{arity, arity_of, signature};
pub use combinators::{compose, converge, pipe};
pub use curry::{ary, binary, curry, curry_n, thunkify, unary};
pub use lift::{lift_e, lift_m, lift_to};
pub use partial::{partial, partial_p, partial_r};
pub use utils::{constant, flip, identity};
