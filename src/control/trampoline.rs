//! Stack-safe recursion via trampolining.
//!
//! A recursive body does not call itself. It returns a [`Bounce`]:
//! `Done(value)` to finish, or `Recur(arguments)` to ask for another call.
//! The [`Trampoline`] keeps the requested calls in a queue and runs them in a
//! loop, so recursion depth never reaches the call stack.
//!
//! # Examples
//!
//! ## Factorial
//!
//! ```rust
//! use bindery::control::{Bounce, tail_recursive};
//! use bindery::value::{Arity, Value};
//!
//! let factorial = tail_recursive("factorial", Arity::exact(2), |arguments| {
//!     let n = arguments[0].as_integer().unwrap_or(0);
//!     let accumulator = arguments[1].as_integer().unwrap_or(1);
//!     Ok(if n <= 1 {
//!         Bounce::done(accumulator)
//!     } else {
//!         Bounce::recur([Value::from(n - 1), Value::from(n * accumulator)])
//!     })
//! });
//!
//! let result = factorial.call(&[Value::from(20), Value::from(1)])?;
//! assert_eq!(result, Value::from(2_432_902_008_176_640_000_i64));
//! # Ok::<(), bindery::Error>(())
//! ```
//!
//! ## Stepping by hand
//!
//! ```rust
//! use bindery::control::{Bounce, Trampoline};
//! use bindery::value::Value;
//!
//! let mut countdown = Trampoline::new(|arguments| {
//!     let n = arguments[0].as_integer().unwrap_or(0);
//!     Ok(if n == 0 { Bounce::done("liftoff") } else { Bounce::recur([Value::from(n - 1)]) })
//! });
//! countdown.push(vec![Value::from(2)]);
//!
//! assert_eq!(countdown.step()?, None);
//! assert_eq!(countdown.step()?, None);
//! assert_eq!(countdown.step()?, Some(Value::from("liftoff")));
//! assert_eq!(countdown.bounces(), 2);
//! # Ok::<(), bindery::Error>(())
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::value::{Arity, Function, Value};

/// One step of a trampolined computation.
#[derive(Clone, Debug, PartialEq)]
pub enum Bounce {
    /// The computation has finished with this value.
    Done(Value),
    /// The computation continues with a call on these arguments.
    Recur(Vec<Value>),
}

impl Bounce {
    /// Finishes with `value`.
    pub fn done(value: impl Into<Value>) -> Self {
        Self::Done(value.into())
    }

    /// Continues with a call on `arguments`.
    pub fn recur(arguments: impl IntoIterator<Item = Value>) -> Self {
        Self::Recur(arguments.into_iter().collect())
    }
}

type Body = Rc<dyn Fn(&[Value]) -> Result<Bounce>>;

/// A queue of pending calls to a recursive body.
pub struct Trampoline {
    body: Body,
    pending: VecDeque<Vec<Value>>,
    bounces: usize,
}

impl Trampoline {
    /// Creates an empty trampoline around `body`.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Bounce> + 'static,
    {
        Self::from_body(Rc::new(body))
    }

    fn from_body(body: Body) -> Self {
        Self {
            body,
            pending: VecDeque::new(),
            bounces: 0,
        }
    }

    /// Queues a call on `arguments`.
    pub fn push(&mut self, arguments: Vec<Value>) {
        self.pending.push_back(arguments);
    }

    /// Runs the oldest pending call.
    ///
    /// Returns the value when the body finishes, or `None` when it queued
    /// another call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when nothing is pending, and
    /// propagates any failure raised by the body.
    pub fn step(&mut self) -> Result<Option<Value>> {
        let arguments = self
            .pending
            .pop_front()
            .ok_or_else(|| Error::invalid_argument("Trampoline::step", "no pending call"))?;
        match (self.body)(&arguments)? {
            Bounce::Done(value) => Ok(Some(value)),
            Bounce::Recur(next) => {
                self.bounces += 1;
                self.pending.push_back(next);
                Ok(None)
            }
        }
    }

    /// Steps until the body finishes.
    ///
    /// # Errors
    ///
    /// As [`Trampoline::step`].
    pub fn drain(&mut self) -> Result<Value> {
        loop {
            if let Some(value) = self.step()? {
                #[cfg(feature = "tracing")]
                tracing::trace!(bounces = self.bounces, "trampoline finished");
                return Ok(value);
            }
        }
    }

    /// Number of calls waiting to run.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of `Recur` steps taken so far.
    pub const fn bounces(&self) -> usize {
        self.bounces
    }
}

impl fmt::Debug for Trampoline {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Trampoline")
            .field("pending", &self.pending)
            .field("bounces", &self.bounces)
            .finish_non_exhaustive()
    }
}

/// Turns a self-recursive `body` into a stack-safe [`Function`].
///
/// Every call of the returned function drains a fresh [`Trampoline`].
pub fn tail_recursive<F>(name: impl Into<String>, arity: Arity, body: F) -> Function
where
    F: Fn(&[Value]) -> Result<Bounce> + 'static,
{
    let body: Body = Rc::new(body);
    Function::new(name, arity, move |arguments| {
        let mut trampoline = Trampoline::from_body(Rc::clone(&body));
        trampoline.push(arguments.to_vec());
        trampoline.drain()
    })
}
