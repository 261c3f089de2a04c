use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, sqlshape_trace_skip};

use crate::{Condition, LogicalOperator, Value};

/// Conditions combined with `AND` or `OR`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WhereGroup {
    pub op: LogicalOperator,
    pub conditions: Vec<Condition>,
}

impl WhereGroup {
    pub fn new<I>(op: LogicalOperator, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        Self {
            op,
            conditions: conditions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Children that produce nothing are skipped. No children left yields
    /// `None`; a single child is returned as is; more are joined and
    /// parenthesized.
    pub fn predicate(&self) -> Option<SQL<'_, Value>> {
        let mut parts: Vec<SQL<'_, Value>> = self
            .conditions
            .iter()
            .filter_map(|condition| {
                let predicate = condition.predicate();
                if predicate.is_none() {
                    sqlshape_trace_skip!("empty where group");
                }
                predicate
            })
            .collect();

        match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => Some(SQL::join(parts, self.op.token()).parens()),
        }
    }
}

impl Serialize for WhereGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("op", &self.op)?;
        map.serialize_entry("conditions", &self.conditions)?;
        map.end()
    }
}
