//! The closed set of things that may stand in a value position.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use sqlshape_core::SQL;

use crate::{
    BoolOp, Case, Coalesce, Condition, Expression, Field, Literal, QueryDescriptor, RangeOp,
    Value, WhereGroup,
};

/// Anything the resolver accepts.
///
/// Expressions and conditions are boxed so the tree stays finite.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    #[default]
    Null,
    /// A nullable indirection; `None` renders `NULL`
    Optional(Option<Box<Operand>>),
    /// A nested select
    Query(Box<QueryDescriptor>),
    Expression(Box<Expression>),
    Condition(Box<Condition>),
    /// A fragment compiled elsewhere, spliced in unchanged
    Sql(SQL<'static, Value>),
    List(Vec<Operand>),
    Scalar(Value),
}

impl Operand {
    /// True for `Null`, `Scalar(Null)` and an empty or null `Optional`
    pub fn is_null(&self) -> bool {
        match self {
            Operand::Null | Operand::Scalar(Value::Null) => true,
            Operand::Optional(inner) => inner.as_deref().is_none_or(Operand::is_null),
            _ => false,
        }
    }

    /// Follows `Optional(Some(..))` down to the operand it wraps
    pub fn peel(&self) -> &Operand {
        match self {
            Operand::Optional(Some(inner)) => inner.peel(),
            other => other,
        }
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Operand::List(items.into_iter().map(Into::into).collect())
    }

    pub fn sql(sql: SQL<'static, Value>) -> Self {
        Operand::Sql(sql)
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Null | Operand::Optional(None) => serializer.serialize_unit(),
            Operand::Optional(Some(inner)) => inner.serialize(serializer),
            Operand::Query(query) => query.serialize(serializer),
            Operand::Expression(expression) => expression.serialize(serializer),
            Operand::Condition(condition) => condition.serialize(serializer),
            Operand::Sql(_) => Err(S::Error::custom(
                "compiled SQL fragments cannot be serialized",
            )),
            Operand::List(items) => items.serialize(serializer),
            Operand::Scalar(value) => value.serialize(serializer),
        }
    }
}

macro_rules! scalar_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Scalar(Value::from(value))
                }
            }
        )*
    };
}

scalar_operand!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, &str, String, Value,
    serde_json::Value
);

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        Operand::Optional(value.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(value: Vec<T>) -> Self {
        Operand::list(value)
    }
}

impl<T: Into<Operand>, const N: usize> From<[T; N]> for Operand {
    fn from(value: [T; N]) -> Self {
        Operand::list(value)
    }
}

impl From<Expression> for Operand {
    fn from(value: Expression) -> Self {
        Operand::Expression(Box::new(value))
    }
}

impl From<Condition> for Operand {
    fn from(value: Condition) -> Self {
        Operand::Condition(Box::new(value))
    }
}

impl From<QueryDescriptor> for Operand {
    fn from(value: QueryDescriptor) -> Self {
        Operand::Query(Box::new(value))
    }
}

impl From<SQL<'static, Value>> for Operand {
    fn from(value: SQL<'static, Value>) -> Self {
        Operand::Sql(value)
    }
}

macro_rules! node_operand {
    ($wrapper:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::from($wrapper::from(value))
                }
            }
        )*
    };
}

node_operand!(Expression: Field, Literal, Case, Coalesce);
node_operand!(Condition: BoolOp, RangeOp, WhereGroup);
