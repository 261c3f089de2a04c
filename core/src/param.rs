use std::borrow::Cow;

use crate::traits::SQLParam;

/// A bound SQL parameter.
///
/// Values are borrowed from the descriptor tree when possible so rendering
/// a large statement does not clone every literal.
#[derive(Debug, Clone)]
pub struct Param<'a, V: SQLParam> {
    /// The value to bind
    pub value: Cow<'a, V>,
}

impl<'a, V: SQLParam> Param<'a, V> {
    pub fn new(value: impl Into<Cow<'a, V>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl<'a, V: SQLParam + PartialEq> PartialEq for Param<'a, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value.as_ref() == other.value.as_ref()
    }
}
