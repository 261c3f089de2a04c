//! Value-producing nodes: columns, raw templates, CASE and COALESCE.

mod case;
mod coalesce;
mod field;
mod literal;

pub use case::{Case, WhenThen};
pub use coalesce::Coalesce;
pub use field::{Field, column_ref};
pub(crate) use field::non_empty;
pub use literal::Literal;

use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, ToSQL};

use crate::Value;

/// Any node that resolves to a value
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Field(Field),
    Literal(Literal),
    Case(Case),
    Coalesce(Coalesce),
}

impl<'a> ToSQL<'a, Value> for Expression {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        match self {
            Expression::Field(field) => field.to_sql(),
            Expression::Literal(literal) => literal.to_sql(),
            Expression::Case(case) => case.to_sql(),
            Expression::Coalesce(coalesce) => coalesce.to_sql(),
        }
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expression::Field(field) => field.serialize(serializer),
            Expression::Literal(literal) => literal.serialize(serializer),
            Expression::Case(case) => case.serialize(serializer),
            Expression::Coalesce(coalesce) => coalesce.serialize(serializer),
        }
    }
}

impl From<Field> for Expression {
    fn from(value: Field) -> Self {
        Expression::Field(value)
    }
}

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Expression::Literal(value)
    }
}

impl From<Case> for Expression {
    fn from(value: Case) -> Self {
        Expression::Case(value)
    }
}

impl From<Coalesce> for Expression {
    fn from(value: Coalesce) -> Self {
        Expression::Coalesce(value)
    }
}
