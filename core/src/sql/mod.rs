mod chunk;
mod tokens;

use std::borrow::Cow;
use std::fmt::Write;

use smallvec::SmallVec;

use crate::dialect::{Dialect, DialectExt};
use crate::error::CompileError;
use crate::param::Param;
use crate::traits::{SQLParam, ToSQL};
pub use chunk::*;
pub use tokens::*;

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation. Fragments are dialect-agnostic until rendered
/// with [`SQL::build`].
#[derive(Debug, Clone)]
pub struct SQL<'a, V: SQLParam> {
    pub chunks: SmallVec<[SQLChunk<'a, V>; 8]>,
}

impl<'a, V: SQLParam> SQL<'a, V> {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates SQL with a quoted identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL with a table-qualified identifier: "table"."column"
    #[inline]
    pub fn qualified(table: impl Into<Cow<'a, str>>, column: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![
                SQLChunk::Ident(table.into()),
                SQLChunk::Token(Token::DOT),
                SQLChunk::Ident(column.into()),
            ],
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single parameter value
    #[inline]
    pub fn param(value: impl Into<Cow<'a, V>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(Param::new(value))],
        }
    }

    /// Creates SQL for a function call: NAME(args)
    /// Subqueries are automatically wrapped in parentheses: NAME((SELECT ...))
    #[inline]
    pub fn func(name: Token, args: SQL<'a, V>) -> Self {
        let args = if args.is_subquery() {
            args.parens()
        } else {
            args
        };
        SQL::token(name)
            .push(Token::LPAREN)
            .append(args)
            .push(Token::RPAREN)
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL<'a, V>>) -> Self {
        let other = other.into();

        if self.chunks.is_empty() {
            return other;
        }
        if other.chunks.is_empty() {
            return self;
        }

        self.chunks.extend(other.chunks);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL<'a, V>>) {
        let other = other.into();

        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        if other.chunks.is_empty() {
            return;
        }

        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk<'a, V>>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk<'a, V>>) {
        self.chunks.push(chunk.into());
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator.
    ///
    /// Empty fragments are skipped so a separator is never doubled.
    pub fn join<T>(sqls: T, separator: Token) -> SQL<'a, V>
    where
        T: IntoIterator,
        T::Item: Into<SQL<'a, V>>,
    {
        let mut result = SQL::empty();
        for item in sqls {
            let other = item.into();
            if other.chunks.is_empty() {
                continue;
            }
            if !result.chunks.is_empty() {
                result.chunks.push(SQLChunk::Token(separator));
            }
            result.chunks.extend(other.chunks);
        }
        result
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    /// Check if this SQL fragment is a subquery (starts with SELECT)
    #[inline]
    pub fn is_subquery(&self) -> bool {
        matches!(self.chunks.first(), Some(SQLChunk::Token(Token::SELECT)))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Creates an aliased version: self AS "name"
    pub fn alias(self, name: impl Into<Cow<'a, str>>) -> SQL<'a, V> {
        self.push(Token::AS).push(SQLChunk::Ident(name.into()))
    }

    /// Creates a comma-separated list of column assignments: "col" = <sql>
    pub fn assignments<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, SQL<'a, V>)>,
    {
        let iter = pairs.into_iter();
        let (lower, _) = iter.size_hint();
        let mut chunks = SmallVec::with_capacity(lower.saturating_mul(4));
        for (i, (col, sql)) in iter.enumerate() {
            if i > 0 {
                chunks.push(SQLChunk::Token(Token::COMMA));
            }
            chunks.push(SQLChunk::Ident(col));
            chunks.push(SQLChunk::Token(Token::EQ));
            chunks.extend(sql.chunks);
        }
        SQL { chunks }
    }

    /// Re-borrows a fragment for a shorter lifetime.
    ///
    /// Used when a long-lived fragment (usually `SQL<'static, V>` stored in a
    /// tree) is spliced into one that borrows from that tree.
    pub fn reborrow<'b>(&self) -> SQL<'b, V>
    where
        'a: 'b,
    {
        let chunks = self
            .chunks
            .iter()
            .map(|chunk| -> SQLChunk<'b, V> { chunk.clone() })
            .collect();
        SQL { chunks }
    }

    // ==================== output methods ====================

    /// Returns the SQL string with dialect-appropriate placeholders.
    /// Uses `$1, $2, ...` for PostgreSQL and `?` for SQLite and MySQL.
    pub fn sql(&self, dialect: Dialect) -> Result<String, CompileError> {
        let sql_cap = self.chunks.len().saturating_mul(8).max(128);
        let mut buf = String::with_capacity(sql_cap);
        self.write_to(&mut buf, dialect)?;
        Ok(buf)
    }

    /// Generates the SQL string and collects parameter references in a single pass.
    pub fn build(&self, dialect: Dialect) -> Result<(String, SmallVec<[&V; 8]>), CompileError> {
        let sql_cap = self.chunks.len().saturating_mul(8).max(128);
        let param_cap = self.chunks.len().saturating_div(8).max(8);
        let mut buf = String::with_capacity(sql_cap);
        let mut params: SmallVec<[&V; 8]> = SmallVec::with_capacity(param_cap);
        let mut param_index = 1usize;

        for (i, chunk) in self.chunks.iter().enumerate() {
            match chunk {
                SQLChunk::Param(param) => {
                    let _ = buf.write_str(&dialect.render_placeholder(param_index));
                    param_index += 1;
                    params.push(param.value.as_ref());
                }
                _ => chunk.write(&mut buf, dialect)?,
            }

            if self.needs_space(i) {
                let _ = buf.write_char(' ');
            }
        }

        Ok((buf, params))
    }

    /// Write SQL to a buffer with dialect-appropriate placeholders.
    pub fn write_to(&self, buf: &mut impl Write, dialect: Dialect) -> Result<(), CompileError> {
        let mut param_index = 1usize;
        for (i, chunk) in self.chunks.iter().enumerate() {
            match chunk {
                SQLChunk::Param(_) => {
                    let _ = buf.write_str(&dialect.render_placeholder(param_index));
                    param_index += 1;
                }
                _ => chunk.write(buf, dialect)?,
            }

            if self.needs_space(i) {
                let _ = buf.write_char(' ');
            }
        }
        Ok(())
    }

    fn needs_space(&self, index: usize) -> bool {
        let Some(next) = self.chunks.get(index + 1) else {
            return false;
        };

        let current = &self.chunks[index];
        chunk_needs_space(current, next)
    }

    /// Returns an iterator over references to parameter values
    pub fn params(&self) -> impl Iterator<Item = &V> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            SQLChunk::Param(param) => Some(param.value.as_ref()),
            _ => None,
        })
    }
}

/// Canonical spacing logic for SQL chunk rendering.
pub(crate) fn chunk_needs_space<V: SQLParam>(
    current: &SQLChunk<'_, V>,
    next: &SQLChunk<'_, V>,
) -> bool {
    // No space if current raw text ends with space
    if let SQLChunk::Raw(text) = current
        && text.ends_with(' ')
    {
        return false;
    }

    // No space if next raw text starts with space
    if let SQLChunk::Raw(text) = next
        && text.starts_with(' ')
    {
        return false;
    }

    match (current, next) {
        (SQLChunk::Glue, _) | (_, SQLChunk::Glue) => false,
        // No space before closing/separator punctuation
        (_, SQLChunk::Token(Token::RPAREN | Token::COMMA | Token::DOT)) => false,
        // No space after opening punctuation
        (SQLChunk::Token(Token::LPAREN | Token::DOT), _) => false,
        // Space after comma
        (SQLChunk::Token(Token::COMMA), _) => true,
        // Space after closing paren if next is word-like (e.g., ") FROM")
        (SQLChunk::Token(Token::RPAREN), next) => {
            next.is_word_like() || matches!(next, SQLChunk::Token(t) if t.is_operator())
        }
        // COUNT(, COALESCE(
        (SQLChunk::Token(t), SQLChunk::Token(Token::LPAREN)) if t.is_function() => false,
        // Space around comparison operators
        (SQLChunk::Token(t), _) if t.is_operator() => true,
        (_, SQLChunk::Token(t)) if t.is_operator() => true,
        // Space before opening paren if preceded by word-like (e.g., "IN (")
        (current, SQLChunk::Token(Token::LPAREN)) => current.is_word_like(),
        // Space between all word-like chunks
        _ => current.is_word_like() && next.is_word_like(),
    }
}

// ==================== trait implementations ====================

impl<'a, V: SQLParam> Default for SQL<'a, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V: SQLParam + PartialEq> PartialEq for SQL<'a, V> {
    fn eq(&self, other: &Self) -> bool {
        self.chunks == other.chunks
    }
}

impl<'a, V: SQLParam + 'a> From<&'a str> for SQL<'a, V> {
    fn from(s: &'a str) -> Self {
        SQL::raw(s)
    }
}

impl<'a, V: SQLParam> From<Token> for SQL<'a, V> {
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl<'a, V: SQLParam> From<SQLChunk<'a, V>> for SQL<'a, V> {
    fn from(value: SQLChunk<'a, V>) -> Self {
        Self {
            chunks: smallvec::smallvec![value],
        }
    }
}

impl<'a, V: SQLParam + 'a> ToSQL<'a, V> for SQL<'a, V> {
    fn to_sql(&'a self) -> SQL<'a, V> {
        self.clone()
    }
}

impl<'a, V: SQLParam, T> FromIterator<T> for SQL<'a, V>
where
    SQLChunk<'a, V>: From<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let chunks = SmallVec::from_iter(iter.into_iter().map(SQLChunk::from));
        Self { chunks }
    }
}

impl<'a, V: SQLParam> IntoIterator for SQL<'a, V> {
    type Item = SQLChunk<'a, V>;
    type IntoIter = smallvec::IntoIter<[SQLChunk<'a, V>; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
