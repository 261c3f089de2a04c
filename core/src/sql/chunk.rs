use std::borrow::Cow;
use std::fmt::Write;

use crate::dialect::Dialect;
use crate::error::CompileError;
use crate::param::Param;
use crate::sql::tokens::Token;
use crate::traits::SQLParam;

/// A SQL chunk represents a part of an SQL statement.
///
/// - `Token` - SQL keywords and operators (SELECT, FROM, =, etc.)
/// - `Ident` - Quoted identifiers, quoted per dialect
/// - `Raw` - Unquoted raw SQL text (templates, expressions)
/// - `Param` - Bound parameter, rendered as `?` or `$n`
/// - `Glue` - Zero-width marker that suppresses spacing on both sides
#[derive(Clone)]
pub enum SQLChunk<'a, V: SQLParam> {
    /// SQL keywords and operators: SELECT, FROM, WHERE, =, AND, etc.
    /// Renders as: keyword with automatic spacing rules
    Token(Token),

    /// Quoted identifier for user-provided names
    /// Renders as: "name" or `name` (embedded quotes doubled)
    Ident(Cow<'a, str>),

    /// Raw SQL text (unquoted)
    /// Renders as: text (no quotes, as-is)
    Raw(Cow<'a, str>),

    /// Parameter with its bound value
    Param(Param<'a, V>),

    /// Renders nothing; neighbours are written back to back
    Glue,
}

impl<'a, V: SQLParam> SQLChunk<'a, V> {
    /// Creates a token chunk - const
    #[inline]
    pub const fn token(t: Token) -> Self {
        Self::Token(t)
    }

    /// Creates a quoted identifier from a runtime string
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates raw SQL text from a runtime string
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Raw(text.into())
    }

    /// Creates a parameter chunk
    #[inline]
    pub fn param(value: impl Into<Cow<'a, V>>) -> Self {
        Self::Param(Param::new(value))
    }

    /// Write chunk content to buffer. Parameters are written by the caller,
    /// which owns the placeholder counter.
    pub(crate) fn write(
        &self,
        buf: &mut impl Write,
        dialect: Dialect,
    ) -> Result<(), CompileError> {
        match self {
            SQLChunk::Token(token) => {
                let _ = buf.write_str(token.render(dialect)?);
            }
            SQLChunk::Ident(name) => write_ident(buf, name, dialect),
            SQLChunk::Raw(text) => {
                let _ = buf.write_str(text);
            }
            SQLChunk::Param(_) | SQLChunk::Glue => {}
        }
        Ok(())
    }

    /// Check if this chunk is "word-like" (needs space separation from other word-like chunks)
    #[inline]
    pub(crate) const fn is_word_like(&self) -> bool {
        match self {
            SQLChunk::Token(t) => !t.is_punctuation() && !t.is_operator(),
            SQLChunk::Ident(_) | SQLChunk::Raw(_) | SQLChunk::Param(_) => true,
            SQLChunk::Glue => false,
        }
    }
}

/// Writes `name` wrapped in the dialect's identifier quote, doubling any
/// embedded quote character.
pub fn write_ident(buf: &mut impl Write, name: &str, dialect: Dialect) {
    let quote = dialect.identifier_quote();
    let _ = buf.write_char(quote);
    for ch in name.chars() {
        if ch == quote {
            let _ = buf.write_char(quote);
        }
        let _ = buf.write_char(ch);
    }
    let _ = buf.write_char(quote);
}

impl<'a, V: SQLParam> core::fmt::Debug for SQLChunk<'a, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SQLChunk::Token(token) => f.debug_tuple("Token").field(token).finish(),
            SQLChunk::Ident(name) => f.debug_tuple("Ident").field(name).finish(),
            SQLChunk::Raw(text) => f.debug_tuple("Raw").field(text).finish(),
            SQLChunk::Param(param) => f.debug_tuple("Param").field(param).finish(),
            SQLChunk::Glue => f.write_str("Glue"),
        }
    }
}

impl<'a, V: SQLParam + PartialEq> PartialEq for SQLChunk<'a, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SQLChunk::Token(a), SQLChunk::Token(b)) => a == b,
            (SQLChunk::Ident(a), SQLChunk::Ident(b)) => a == b,
            (SQLChunk::Raw(a), SQLChunk::Raw(b)) => a == b,
            (SQLChunk::Param(a), SQLChunk::Param(b)) => a == b,
            (SQLChunk::Glue, SQLChunk::Glue) => true,
            _ => false,
        }
    }
}

// ==================== From implementations ====================

impl<'a, V: SQLParam> From<Token> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: Token) -> Self {
        Self::Token(value)
    }
}

impl<'a, V: SQLParam> From<Param<'a, V>> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: Param<'a, V>) -> Self {
        Self::Param(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_quoted_per_dialect() {
        let mut buf = String::new();
        write_ident(&mut buf, "user\"name", Dialect::PostgreSQL);
        assert_eq!(buf, r#""user""name""#);

        let mut buf = String::new();
        write_ident(&mut buf, "order`s", Dialect::MySQL);
        assert_eq!(buf, "`order``s`");
    }
}
