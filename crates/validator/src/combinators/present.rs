//! PRESENT combinator - skips absent and null values

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Runs the inner validator only when the value is present.
///
/// The engine looks absent keys up as [`Value::Null`], so both "missing" and
/// "explicitly null" pass without evaluating the inner rule. Every built-in
/// rule except `required` is wrapped in this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present<V> {
    pub(crate) inner: V,
}

impl<V> Present<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Present<V>
where
    V: Validate<Input = Value>,
{
    type Input = Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_null() {
            return Ok(());
        }
        self.inner.validate(input)
    }
}

pub fn present<V>(validator: V) -> Present<V> {
    Present::new(validator)
}
