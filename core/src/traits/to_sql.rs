use std::borrow::Cow;

use crate::{SQL, traits::SQLParam};

/// Conversion of a node into a SQL fragment that may borrow from it.
pub trait ToSQL<'a, V: SQLParam> {
    fn to_sql(&'a self) -> SQL<'a, V>;

    fn alias(&'a self, alias: impl Into<Cow<'a, str>>) -> SQL<'a, V> {
        self.to_sql().alias(alias)
    }
}
