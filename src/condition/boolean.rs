use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, ToSQL, Token};

use crate::expression::column_ref;
use crate::{BooleanOperator, Operand, Value, resolve};

/// `column <op> value`
#[derive(Debug, Clone, PartialEq)]
pub struct BoolOp {
    pub op: BooleanOperator,
    pub field_name: String,
    pub table_alias: Option<String>,
    pub value: Operand,
}

impl BoolOp {
    pub fn new(
        op: BooleanOperator,
        field_name: impl Into<String>,
        table_alias: impl Into<String>,
        value: impl Into<Operand>,
    ) -> Self {
        let table_alias = table_alias.into();
        Self {
            op,
            field_name: field_name.into(),
            table_alias: (!table_alias.is_empty()).then_some(table_alias),
            value: value.into(),
        }
    }

    pub fn column(&self) -> SQL<'_, Value> {
        column_ref(&self.field_name, self.table_alias.as_deref())
    }

    /// Right-hand side of `IN`/`NOT IN`. Lists and sub-queries already carry
    /// their parentheses; a lone value gets wrapped.
    fn membership(&self) -> SQL<'_, Value> {
        let sql = resolve(&self.value, None);
        match self.value.peel() {
            Operand::List(_) | Operand::Query(_) => sql,
            Operand::Sql(_) if !sql.is_subquery() => sql,
            _ => sql.parens(),
        }
    }
}

/// Membership in an empty list is decided without touching the column, so
/// the predicate never depends on the column's type.
fn is_empty_list(value: &Operand) -> bool {
    matches!(value, Operand::List(items) if items.is_empty())
}

impl<'a> ToSQL<'a, Value> for BoolOp {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        let column = self.column();
        let value = self.value.peel();
        match self.op {
            BooleanOperator::Eq if value.is_null() => column.push(Token::IS).push(Token::NULL),
            BooleanOperator::Neq if value.is_null() => {
                column.push(Token::IS_NOT).push(Token::NULL)
            }
            BooleanOperator::Is | BooleanOperator::IsNot
                if matches!(value, Operand::Scalar(Value::Bool(_))) =>
            {
                let literal = match value {
                    Operand::Scalar(Value::Bool(true)) => Token::TRUE,
                    _ => Token::FALSE,
                };
                column.push(self.op.token()).push(literal)
            }
            BooleanOperator::In if is_empty_list(value) => SQL::raw("1=0"),
            BooleanOperator::NotIn if is_empty_list(value) => SQL::raw("1=1"),
            op if op.is_membership() => column.push(op.token()).append(self.membership()),
            op => column.push(op.token()).append(resolve(&self.value, None)),
        }
    }
}

impl Serialize for BoolOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("op", &self.op)?;
        map.serialize_entry("fieldName", &self.field_name)?;
        if let Some(table_alias) = &self.table_alias {
            map.serialize_entry("tableAlias", table_alias)?;
        }
        map.serialize_entry("value", &self.value)?;
        map.end()
    }
}
