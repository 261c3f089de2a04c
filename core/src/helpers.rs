//! Clause builders shared by every statement the descriptor compiles to.

use std::borrow::Cow;

use crate::{SQL, Token, traits::SQLParam};

/// Helper function to create a SELECT clause; no columns selects `*`
pub fn select<'a, V, T>(columns: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: IntoIterator<Item = SQL<'a, V>>,
{
    let columns = SQL::join(columns, Token::COMMA);
    let columns = if columns.is_empty() {
        SQL::token(Token::STAR)
    } else {
        columns
    };
    SQL::token(Token::SELECT).append(columns)
}

/// Helper function to create a `SELECT COUNT(*)` clause
pub fn select_count<'a, V>() -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::token(Token::SELECT).append(SQL::func(Token::COUNT, SQL::token(Token::STAR)))
}

/// Helper function to create a FROM clause
pub fn from<'a, V>(table: SQL<'a, V>) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::token(Token::FROM).append(table)
}

/// Helper function to create a JOIN clause; the ON part is omitted when
/// `condition` is empty
pub fn join<'a, V>(join: Token, table: SQL<'a, V>, condition: SQL<'a, V>) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    let sql = SQL::token(join).append(table);
    if condition.is_empty() {
        sql
    } else {
        sql.push(Token::ON).append(condition)
    }
}

/// Helper function to create a WHERE clause; empty conditions yield nothing
pub fn where_clause<'a, V>(condition: SQL<'a, V>) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    if condition.is_empty() {
        return SQL::empty();
    }
    SQL::token(Token::WHERE).append(condition)
}

/// Helper function to create a GROUP BY clause
pub fn group_by<'a, V>(expressions: Vec<SQL<'a, V>>) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    if expressions.is_empty() {
        return SQL::empty();
    }
    SQL::token(Token::GROUP_BY).append(SQL::join(expressions, Token::COMMA))
}

/// Helper function to create an ORDER BY clause from `(expression, ASC|DESC)` pairs
pub fn order_by<'a, V, T>(expressions: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: IntoIterator<Item = (SQL<'a, V>, Token)>,
{
    let terms = SQL::join(
        expressions
            .into_iter()
            .map(|(expr, direction)| expr.push(direction)),
        Token::COMMA,
    );
    if terms.is_empty() {
        return SQL::empty();
    }
    SQL::token(Token::ORDER_BY).append(terms)
}

/// Helper function to create a LIMIT clause with a bound value
pub fn limit<'a, V>(value: impl Into<Cow<'a, V>>) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::token(Token::LIMIT).append(SQL::param(value))
}

/// Helper function to create an OFFSET clause with a bound value
pub fn offset<'a, V>(value: impl Into<Cow<'a, V>>) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::token(Token::OFFSET).append(SQL::param(value))
}

/// Helper function to create an INSERT statement from column/value pairs.
/// No pairs inserts a row of defaults.
pub fn insert<'a, V, T>(table: SQL<'a, V>, values: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: IntoIterator<Item = (Cow<'a, str>, SQL<'a, V>)>,
{
    let (columns, values): (Vec<_>, Vec<_>) = values
        .into_iter()
        .map(|(column, value)| (SQL::ident(column), value))
        .unzip();
    let sql = SQL::token(Token::INSERT_INTO).append(table);
    if columns.is_empty() {
        return sql.push(Token::DEFAULT_VALUES);
    }
    sql.append(SQL::join(columns, Token::COMMA).parens())
        .push(Token::VALUES)
        .append(SQL::join(values, Token::COMMA).parens())
}

/// Helper function to create an UPDATE ... SET statement head
pub fn update<'a, V, T>(table: SQL<'a, V>, assignments: T) -> SQL<'a, V>
where
    V: SQLParam + 'a,
    T: IntoIterator<Item = (Cow<'a, str>, SQL<'a, V>)>,
{
    SQL::token(Token::UPDATE)
        .append(table)
        .push(Token::SET)
        .append(SQL::assignments(assignments))
}

/// Helper function to create a DELETE FROM statement head
pub fn delete<'a, V>(table: SQL<'a, V>) -> SQL<'a, V>
where
    V: SQLParam + 'a,
{
    SQL::token(Token::DELETE_FROM).append(table)
}
