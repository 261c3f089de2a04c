//! Turns any [`Operand`] into a single SQL fragment.

use sqlshape_core::{SQL, ToSQL, Token};

use crate::{Expression, Operand, Value};

/// Resolves `operand` into one fragment, applying `alias` where the operand
/// kind supports renaming.
///
/// Rules are tried in order and the first match wins:
///
/// 1. null renders `NULL`
/// 2. an `Optional` renders `NULL` when empty, otherwise its content
/// 3. a sub-query renders its parenthesized select, without limit or offset
/// 4. a [`Field`](crate::Field) renders by its own aliasing rules
/// 5. a condition renders its predicate, or `NULL` when it has none
/// 6. other expressions render themselves, `AS alias` when an alias is given
/// 7. a compiled fragment passes through unchanged
/// 8. an empty list renders an always-empty set so `IN ()` stays valid;
///    other lists render `(a, b, ...)`
/// 9. any remaining scalar is bound as a parameter
///
/// Resolution never fails.
pub fn resolve<'a>(operand: &'a Operand, alias: Option<&'a str>) -> SQL<'a, Value> {
    let alias = alias.filter(|a| !a.is_empty());
    match operand {
        Operand::Null | Operand::Scalar(Value::Null) | Operand::Optional(None) => {
            SQL::token(Token::NULL)
        }
        Operand::Optional(Some(inner)) => resolve(inner, alias),
        Operand::Query(query) => query.subquery(),
        Operand::Expression(expression) => match expression.as_ref() {
            Expression::Field(field) => field.to_sql(),
            other => match alias {
                Some(alias) => other.alias(alias),
                None => other.to_sql(),
            },
        },
        Operand::Condition(condition) => condition
            .predicate()
            .unwrap_or_else(|| SQL::token(Token::NULL)),
        Operand::Sql(sql) => sql.reborrow(),
        Operand::List(items) if items.is_empty() => SQL::token(Token::EMPTY_SET),
        Operand::List(items) => {
            SQL::join(items.iter().map(|item| resolve(item, None)), Token::COMMA).parens()
        }
        Operand::Scalar(value) => SQL::param(value),
    }
}
