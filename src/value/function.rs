//! Callable values with declared arity.
//!
//! A [`Function`] is a cheaply clonable handle to anything implementing
//! [`Callable`]: a closure, a bound method reference or a user-defined
//! invokable object. Each carries its own [`Arity`], which is what arity
//! introspection reads. Wrappers built by this crate (curried accumulators,
//! partial applications, compositions) declare accurate arity themselves, so
//! the information survives higher-order plumbing.

use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::error::Result;

/// The declared parameter count of a function.
///
/// `required` parameters must be supplied; parameters between `required` and
/// `total` have defaults. A variadic function accepts any number of extra
/// arguments beyond `total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arity {
    required: usize,
    total: usize,
    variadic: bool,
}

impl Arity {
    /// A function taking exactly `count` parameters, none defaulted.
    pub const fn exact(count: usize) -> Self {
        Self {
            required: count,
            total: count,
            variadic: false,
        }
    }

    /// A function with `required` mandatory parameters out of `total`.
    ///
    /// `total` is raised to `required` if it is smaller.
    pub const fn with_defaults(required: usize, total: usize) -> Self {
        Self {
            required,
            total: if total < required { required } else { total },
            variadic: false,
        }
    }

    /// A function with `fixed` declared parameters accepting any extras.
    pub const fn variadic(fixed: usize) -> Self {
        Self {
            required: fixed,
            total: fixed,
            variadic: true,
        }
    }

    /// Number of parameters without a default.
    pub const fn required(self) -> usize {
        self.required
    }

    /// Number of declared parameters.
    pub const fn total(self) -> usize {
        self.total
    }

    /// Whether extra arguments are accepted.
    pub const fn is_variadic(self) -> bool {
        self.variadic
    }

    /// The count reported by introspection.
    pub const fn count(self, required_only: bool) -> usize {
        if required_only {
            self.required
        } else {
            self.total
        }
    }

    /// The arity left after `bound` leading or trailing arguments are fixed.
    pub const fn saturating_sub(self, bound: usize) -> Self {
        Self {
            required: self.required.saturating_sub(bound),
            total: self.total.saturating_sub(bound),
            variadic: self.variadic,
        }
    }
}

/// Something that can be invoked with a list of arguments.
///
/// Implement this for invokable objects that should take part in currying,
/// partial application and composition.
///
/// # Examples
///
/// ```rust
/// use bindery::compose::arity;
/// use bindery::value::{Arity, Callable, Function, Value};
///
/// struct Greeter {
///     greeting: String,
/// }
///
/// impl Callable for Greeter {
///     fn arity(&self) -> Arity {
///         Arity::exact(1)
///     }
///
///     fn call(&self, arguments: &[Value]) -> bindery::Result<Value> {
///         let name = arguments.first().cloned().unwrap_or_default();
///         Ok(Value::from(format!("{}, {name}", self.greeting)))
///     }
/// }
///
/// let greet = Function::from_callable(Greeter { greeting: "Hello".into() });
/// assert_eq!(arity(&greet, false), 1);
/// assert_eq!(greet.call(&[Value::from("Ada")])?, Value::from("Hello, Ada"));
/// # Ok::<(), bindery::Error>(())
/// ```
pub trait Callable {
    /// The declared parameter count.
    fn arity(&self) -> Arity;

    /// Invokes the callable.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the callable raises.
    fn call(&self, arguments: &[Value]) -> Result<Value>;

    /// A human-readable name used in diagnostics.
    fn name(&self) -> &str {
        "anonymous"
    }
}

struct NativeFunction<F> {
    name: String,
    arity: Arity,
    body: F,
}

impl<F> Callable for NativeFunction<F>
where
    F: Fn(&[Value]) -> Result<Value>,
{
    fn arity(&self) -> Arity {
        self.arity
    }

    fn call(&self, arguments: &[Value]) -> Result<Value> {
        (self.body)(arguments)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

struct BoundMethod<T, M> {
    receiver: Rc<T>,
    name: String,
    arity: Arity,
    method: M,
}

impl<T, M> Callable for BoundMethod<T, M>
where
    M: Fn(&T, &[Value]) -> Result<Value>,
{
    fn arity(&self) -> Arity {
        self.arity
    }

    fn call(&self, arguments: &[Value]) -> Result<Value> {
        (self.method)(&self.receiver, arguments)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A shared handle to a [`Callable`].
///
/// Cloning is cheap. Two functions compare equal only when they are clones of
/// the same handle.
#[derive(Clone)]
pub struct Function {
    inner: Rc<dyn Callable>,
}

impl Function {
    /// Creates a function from a closure over the raw argument slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::value::{Arity, Function, Value};
    ///
    /// let count = Function::new("count", Arity::variadic(0), |arguments| {
    ///     Ok(Value::from(arguments.len() as i64))
    /// });
    /// assert_eq!(count.call(&[Value::Null, Value::Null])?, Value::from(2));
    /// # Ok::<(), bindery::Error>(())
    /// ```
    pub fn new<F>(name: impl Into<String>, arity: Arity, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self::from_callable(NativeFunction {
            name: name.into(),
            arity,
            body,
        })
    }

    /// Creates a function taking no parameters.
    pub fn nullary<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> Result<Value> + 'static,
    {
        Self::new(name, Arity::exact(0), move |_| body())
    }

    /// Creates a one-parameter function. A missing argument reads as null.
    pub fn unary<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + 'static,
    {
        Self::new(name, Arity::exact(1), move |arguments| {
            body(argument_at(arguments, 0))
        })
    }

    /// Creates a two-parameter function. Missing arguments read as null.
    pub fn binary<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Value, Value) -> Result<Value> + 'static,
    {
        Self::new(name, Arity::exact(2), move |arguments| {
            body(argument_at(arguments, 0), argument_at(arguments, 1))
        })
    }

    /// Creates a three-parameter function. Missing arguments read as null.
    pub fn ternary<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Value, Value, Value) -> Result<Value> + 'static,
    {
        Self::new(name, Arity::exact(3), move |arguments| {
            body(
                argument_at(arguments, 0),
                argument_at(arguments, 1),
                argument_at(arguments, 2),
            )
        })
    }

    /// Wraps an invokable object.
    pub fn from_callable<C>(callable: C) -> Self
    where
        C: Callable + 'static,
    {
        Self {
            inner: Rc::new(callable),
        }
    }

    /// Binds `method` to `receiver`, producing a method reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use bindery::value::{Arity, Function, Value};
    ///
    /// struct Counter {
    ///     step: i64,
    /// }
    ///
    /// let counter = Rc::new(Counter { step: 5 });
    /// let advance = Function::method(counter, "advance", Arity::exact(1), |counter: &Counter, arguments| {
    ///     let start = arguments.first().and_then(Value::as_integer).unwrap_or(0);
    ///     Ok(Value::from(start + counter.step))
    /// });
    /// assert_eq!(advance.call(&[Value::from(1)])?, Value::from(6));
    /// # Ok::<(), bindery::Error>(())
    /// ```
    pub fn method<T, M>(receiver: Rc<T>, name: impl Into<String>, arity: Arity, method: M) -> Self
    where
        T: 'static,
        M: Fn(&T, &[Value]) -> Result<Value> + 'static,
    {
        Self::from_callable(BoundMethod {
            receiver,
            name: name.into(),
            arity,
            method,
        })
    }

    /// Invokes the function with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the function raises.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        self.inner.call(arguments)
    }

    /// Invokes the function with a single argument.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the function raises.
    pub fn call1(&self, argument: Value) -> Result<Value> {
        self.inner.call(std::slice::from_ref(&argument))
    }

    /// The declared arity.
    pub fn arity(&self) -> Arity {
        self.inner.arity()
    }

    /// The diagnostic name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns `true` if both handles point to the same callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

fn argument_at(arguments: &[Value], index: usize) -> Value {
    arguments.get(index).cloned().unwrap_or_default()
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    fn with_defaults_never_reports_fewer_total_than_required() {
        let arity = Arity::with_defaults(3, 1);
        assert_eq!(arity.required(), 3);
        assert_eq!(arity.total(), 3);
    }

    #[rstest]
    #[case(false, 4)]
    #[case(true, 2)]
    fn count_honours_required_only(#[case] required_only: bool, #[case] expected: usize) {
        assert_eq!(Arity::with_defaults(2, 4).count(required_only), expected);
    }

    #[rstest]
    fn saturating_sub_keeps_variadic_flag() {
        let remaining = Arity::variadic(2).saturating_sub(5);
        assert_eq!(remaining.total(), 0);
        assert!(remaining.is_variadic());
    }

    #[rstest]
    fn unary_reads_missing_argument_as_null() {
        let is_null = Function::unary("is_null", |value| Ok(Value::from(value.is_null())));
        assert_eq!(is_null.call(&[]).unwrap(), Value::from(true));
    }

    #[rstest]
    fn clones_are_equal_but_distinct_functions_are_not() {
        let first = Function::nullary("one", || Ok(Value::from(1)));
        let second = Function::nullary("one", || Ok(Value::from(1)));
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[rstest]
    fn failures_propagate_from_the_body() {
        let fail = Function::unary("fail", |_| Err(Error::raised("nope")));
        assert_eq!(fail.call1(Value::Null), Err(Error::raised("nope")));
    }

    #[rstest]
    fn debug_shows_name_and_arity() {
        let function = Function::binary("pair", |a, b| Ok(Value::from(vec![a, b])));
        let rendered = format!("{function:?}");
        assert!(rendered.contains("pair"));
        assert!(rendered.contains("required: 2"));
    }
}
