use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, ToSQL, Token};

use crate::expression::column_ref;
use crate::{Operand, RangeOperator, Value, resolve};

/// `column [NOT] BETWEEN start AND end`
#[derive(Debug, Clone, PartialEq)]
pub struct RangeOp {
    pub op: RangeOperator,
    pub field_name: String,
    pub table_alias: Option<String>,
    pub start: Operand,
    pub end: Operand,
}

impl RangeOp {
    pub fn new(
        op: RangeOperator,
        field_name: impl Into<String>,
        table_alias: impl Into<String>,
        start: impl Into<Operand>,
        end: impl Into<Operand>,
    ) -> Self {
        let table_alias = table_alias.into();
        Self {
            op,
            field_name: field_name.into(),
            table_alias: (!table_alias.is_empty()).then_some(table_alias),
            start: start.into(),
            end: end.into(),
        }
    }
}

impl<'a> ToSQL<'a, Value> for RangeOp {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        column_ref(&self.field_name, self.table_alias.as_deref())
            .push(self.op.token())
            .append(resolve(&self.start, None))
            .push(Token::AND)
            .append(resolve(&self.end, None))
    }
}

impl Serialize for RangeOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("op", &self.op)?;
        map.serialize_entry("fieldName", &self.field_name)?;
        if let Some(table_alias) = &self.table_alias {
            map.serialize_entry("tableAlias", table_alias)?;
        }
        map.serialize_entry("start", &self.start)?;
        map.serialize_entry("end", &self.end)?;
        map.end()
    }
}
