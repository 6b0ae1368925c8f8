//! Identity context - wraps a value without adding any behaviour.
//!
//! `Identity` is the simplest context: `map` applies the function, `flat_map`
//! expects another `Identity`, and a failure raised by a callback propagates
//! to the caller untouched. It is the setter side of a lens and the natural
//! target when code wants "a context, but no effect".

use super::{deep_extract, expect_function, expect_variant};
use crate::error::Result;
use crate::value::{Function, Value};

/// The identity context.
///
/// # Examples
///
/// ```rust
/// use bindery::context::Identity;
/// use bindery::value::{Function, Value};
///
/// let shout = Function::unary("shout", |value| {
///     Ok(Value::from(value.to_string().to_uppercase()))
/// });
/// let wrapped = Identity::new("hello").map(&shout)?;
/// assert_eq!(wrapped.value(), &Value::from("HELLO"));
/// # Ok::<(), bindery::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Identity(Value);

impl Identity {
    /// Wraps `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Borrows the boxed value.
    pub const fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the context and returns the boxed value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Applies `function` to the boxed value.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by `function`.
    pub fn map(&self, function: &Function) -> Result<Self> {
        function.call1(self.0.clone()).map(Self)
    }

    /// Applies an `Identity`-returning `function`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if `function` returns anything but an
    /// `Identity`, and propagates any failure it raises.
    pub fn flat_map(&self, function: &Function) -> Result<Self> {
        expect_variant("Identity::flat_map", function.call1(self.0.clone())?)
    }

    /// Applies the boxed function to the value in `argument`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the boxed value is not a function.
    pub fn ap(&self, argument: &Self) -> Result<Self> {
        expect_function("Identity::ap", &self.0)?
            .call1(argument.0.clone())
            .map(Self)
    }

    /// Applies the boxed `Identity`-returning function to `argument`.
    ///
    /// # Errors
    ///
    /// As [`Identity::ap`] and [`Identity::flat_map`].
    pub fn flat_ap(&self, argument: &Self) -> Result<Self> {
        let function = expect_function("Identity::flat_ap", &self.0)?;
        expect_variant("Identity::flat_ap", function.call1(argument.0.clone())?)
    }

    /// Unwraps the boxed value, recursively.
    ///
    /// # Errors
    ///
    /// Propagates a failure from a nested IO effect.
    pub fn extract(&self) -> Result<Value> {
        deep_extract(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::identity;
    use crate::context::Maybe;
    use crate::error::Error;
    use crate::test_support::{add_one, double, raise};
    use rstest::rstest;

    #[rstest]
    fn map_applies_the_function() {
        assert_eq!(Identity::new(2).map(&double()).unwrap(), Identity::new(4));
    }

    #[rstest]
    fn map_identity_is_a_no_op() {
        let original = Identity::new("same");
        assert_eq!(original.map(&identity()).unwrap(), original);
    }

    #[rstest]
    fn map_propagates_raised_failures() {
        assert_eq!(
            Identity::new(1).map(&raise("broken")),
            Err(Error::raised("broken"))
        );
    }

    #[rstest]
    fn flat_map_requires_an_identity() {
        let wrap = Function::unary("wrap", |value| Ok(Value::from(Identity::new(value))));
        assert_eq!(Identity::new(5).flat_map(&wrap).unwrap(), Identity::new(5));

        let wrong = Function::unary("wrong", |value| Ok(Value::from(Maybe::just(value))));
        assert!(matches!(
            Identity::new(5).flat_map(&wrong),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[rstest]
    fn flat_map_rejects_plain_results() {
        assert!(matches!(
            Identity::new(5).flat_map(&add_one()),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[rstest]
    fn ap_requires_a_boxed_function() {
        let result = Identity::new(3).ap(&Identity::new(4));
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }

    #[rstest]
    fn flat_ap_flattens_the_result() {
        let wrap = Function::unary("wrap", |value| Ok(Value::from(Identity::new(value))));
        let result = Identity::new(wrap).flat_ap(&Identity::new(9)).unwrap();
        assert_eq!(result, Identity::new(9));
    }

    #[rstest]
    fn into_inner_returns_the_value() {
        assert_eq!(Identity::new(1).into_inner(), Value::from(1));
    }
}
