//! Control structures.
//!
//! - [`Trampoline`]: stack-safe recursion as an explicit loop over a queue of
//!   pending calls
//! - [`tail_recursive`]: wraps a recursive body as an ordinary
//!   [`Function`](crate::value::Function)
//!
//! # Examples
//!
//! ```rust
//! use bindery::control::{Bounce, tail_recursive};
//! use bindery::value::{Arity, Value};
//!
//! let sum_to = tail_recursive("sum_to", Arity::exact(2), |arguments| {
//!     let n = arguments[0].as_integer().unwrap_or(0);
//!     let total = arguments[1].as_integer().unwrap_or(0);
//!     Ok(if n == 0 {
//!         Bounce::done(total)
//!     } else {
//!         Bounce::recur([Value::from(n - 1), Value::from(total + n)])
//!     })
//! });
//!
//! let result = sum_to.call(&[Value::from(100_000), Value::from(0)])?;
//! assert_eq!(result, Value::from(5_000_050_000_i64));
//! # Ok::<(), bindery::Error>(())
//! ```

mod trampoline;

pub use trampoline::{Bounce, Trampoline, tail_recursive};
