//! Short constructors for building descriptors in code.
//!
//! Comparison helpers take `(field_name, table_alias, value)`; an empty
//! alias leaves the column unqualified.

use crate::{
    BoolOp, BooleanOperator, Case, Coalesce, Condition, Field, Literal, LogicalOperator, Operand,
    RangeOp, RangeOperator, Sort, SortDirection, WhenThen, WhereGroup,
};

/// A plain or table-qualified column
pub fn field(name: impl Into<String>, table_alias: impl Into<String>) -> Field {
    Field::new(name, table_alias)
}

macro_rules! comparison {
    ($($(#[$doc:meta])* $name:ident => $op:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(
                field_name: impl Into<String>,
                table_alias: impl Into<String>,
                value: impl Into<Operand>,
            ) -> BoolOp {
                BoolOp::new(BooleanOperator::$op, field_name, table_alias, value)
            }
        )*
    };
}

comparison! {
    /// `column = value`, or `IS NULL` against null
    eq => Eq,
    /// `column <> value`, or `IS NOT NULL` against null
    neq => Neq,
    gt => Gt,
    gte => Gte,
    lt => Lt,
    lte => Lte,
    /// `column IN (...)`; an empty list matches nothing
    is_in => In,
    not_in => NotIn,
    like => Like,
    not_like => NotLike,
    /// Case-insensitive `LIKE`; plain `LIKE` outside PostgreSQL
    ilike => ILike,
    not_ilike => NotILike,
    regexp_like => RegexpLike,
    regexp_not_like => RegexpNotLike,
}

pub fn is_null(field_name: impl Into<String>, table_alias: impl Into<String>) -> BoolOp {
    BoolOp::new(BooleanOperator::Is, field_name, table_alias, Operand::Null)
}

pub fn is_not_null(field_name: impl Into<String>, table_alias: impl Into<String>) -> BoolOp {
    BoolOp::new(BooleanOperator::IsNot, field_name, table_alias, Operand::Null)
}

pub fn between(
    field_name: impl Into<String>,
    table_alias: impl Into<String>,
    start: impl Into<Operand>,
    end: impl Into<Operand>,
) -> RangeOp {
    RangeOp::new(RangeOperator::Between, field_name, table_alias, start, end)
}

pub fn not_between(
    field_name: impl Into<String>,
    table_alias: impl Into<String>,
    start: impl Into<Operand>,
    end: impl Into<Operand>,
) -> RangeOp {
    RangeOp::new(RangeOperator::NotBetween, field_name, table_alias, start, end)
}

pub fn and<I>(conditions: I) -> WhereGroup
where
    I: IntoIterator,
    I::Item: Into<Condition>,
{
    WhereGroup::new(LogicalOperator::And, conditions)
}

pub fn or<I>(conditions: I) -> WhereGroup
where
    I: IntoIterator,
    I::Item: Into<Condition>,
{
    WhereGroup::new(LogicalOperator::Or, conditions)
}

/// Raw SQL with `?` placeholders filled from `args`
pub fn literal<I>(template: impl Into<String>, args: I) -> Literal
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Literal::new(template).args(args)
}

pub fn case<I>(arms: I) -> Case
where
    I: IntoIterator<Item = WhenThen>,
{
    Case {
        arms: arms.into_iter().collect(),
        otherwise: None,
    }
}

pub fn when(when: impl Into<Operand>, then: impl Into<Operand>) -> WhenThen {
    WhenThen::new(when, then)
}

pub fn coalesce<I>(fields: I) -> Coalesce
where
    I: IntoIterator<Item = Field>,
{
    Coalesce::new(fields)
}

pub fn asc(name: impl Into<String>, table_alias: impl Into<String>) -> Sort {
    Sort::new(name, table_alias, SortDirection::Asc)
}

pub fn desc(name: impl Into<String>, table_alias: impl Into<String>) -> Sort {
    Sort::new(name, table_alias, SortDirection::Desc)
}
