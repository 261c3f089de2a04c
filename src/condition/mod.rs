//! Predicate nodes usable in WHERE, ON and CASE-when positions.

mod boolean;
mod group;
mod range;

pub use boolean::BoolOp;
pub use group::WhereGroup;
pub use range::RangeOp;

use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, ToSQL};

use crate::Value;

/// A node that reduces to a boolean predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Bool(BoolOp),
    Range(RangeOp),
    Group(WhereGroup),
}

impl Condition {
    /// The rendered predicate, or `None` when the node contributes nothing
    /// (a group whose children are all absent).
    pub fn predicate(&self) -> Option<SQL<'_, Value>> {
        match self {
            Condition::Bool(op) => Some(op.to_sql()),
            Condition::Range(op) => Some(op.to_sql()),
            Condition::Group(group) => group.predicate(),
        }
    }
}

impl<'a> ToSQL<'a, Value> for Condition {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        self.predicate().unwrap_or_default()
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Condition::Bool(op) => op.serialize(serializer),
            Condition::Range(op) => op.serialize(serializer),
            Condition::Group(group) => group.serialize(serializer),
        }
    }
}

impl From<BoolOp> for Condition {
    fn from(value: BoolOp) -> Self {
        Condition::Bool(value)
    }
}

impl From<RangeOp> for Condition {
    fn from(value: RangeOp) -> Self {
        Condition::Range(value)
    }
}

impl From<WhereGroup> for Condition {
    fn from(value: WhereGroup) -> Self {
        Condition::Group(value)
    }
}
