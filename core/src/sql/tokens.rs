use crate::dialect::Dialect;
use crate::error::CompileError;

/// SQL keywords, punctuation and operators.
///
/// Most tokens render the same everywhere. Pattern and regular-expression
/// operators, `FULL JOIN` and the empty-set literal are spelled per dialect,
/// and a few have no spelling at all on some dialects.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // statements and clauses
    SELECT,
    FROM,
    WHERE,
    GROUP_BY,
    ORDER_BY,
    LIMIT,
    OFFSET,
    INSERT_INTO,
    VALUES,
    DEFAULT_VALUES,
    UPDATE,
    SET,
    DELETE_FROM,
    AS,
    ON,

    // joins
    INNER_JOIN,
    LEFT_JOIN,
    RIGHT_JOIN,
    FULL_JOIN,
    CROSS_JOIN,

    // logic and predicates
    AND,
    OR,
    NOT,
    IN,
    NOT_IN,
    IS,
    IS_NOT,
    BETWEEN,
    NOT_BETWEEN,
    NULL,
    TRUE,
    FALSE,
    ASC,
    DESC,

    // CASE
    CASE,
    WHEN,
    THEN,
    ELSE,
    END,

    // functions
    COUNT,
    COALESCE,

    // punctuation
    LPAREN,
    RPAREN,
    COMMA,
    DOT,
    STAR,

    // comparison
    EQ,
    NE,
    GT,
    GE,
    LT,
    LE,

    // pattern matching
    LIKE,
    NOT_LIKE,
    ILIKE,
    NOT_ILIKE,
    REGEXP,
    NOT_REGEXP,
    IREGEXP,
    NOT_IREGEXP,

    /// Sub-select that yields no rows, used as the right side of `IN ()`
    EMPTY_SET,
}

impl Token {
    /// Render this token for `dialect`.
    ///
    /// Fails with [`CompileError::Unsupported`] when the dialect has no
    /// spelling for it (case-insensitive regex on SQLite, `FULL JOIN` on
    /// MySQL).
    pub fn render(self, dialect: Dialect) -> Result<&'static str, CompileError> {
        use Dialect::*;
        let text = match (self, dialect) {
            (Token::SELECT, _) => "SELECT",
            (Token::FROM, _) => "FROM",
            (Token::WHERE, _) => "WHERE",
            (Token::GROUP_BY, _) => "GROUP BY",
            (Token::ORDER_BY, _) => "ORDER BY",
            (Token::LIMIT, _) => "LIMIT",
            (Token::OFFSET, _) => "OFFSET",
            (Token::INSERT_INTO, _) => "INSERT INTO",
            (Token::VALUES, _) => "VALUES",
            (Token::DEFAULT_VALUES, MySQL) => "() VALUES ()",
            (Token::DEFAULT_VALUES, _) => "DEFAULT VALUES",
            (Token::UPDATE, _) => "UPDATE",
            (Token::SET, _) => "SET",
            (Token::DELETE_FROM, _) => "DELETE FROM",
            (Token::AS, _) => "AS",
            (Token::ON, _) => "ON",

            (Token::INNER_JOIN, _) => "INNER JOIN",
            (Token::LEFT_JOIN, _) => "LEFT JOIN",
            (Token::RIGHT_JOIN, _) => "RIGHT JOIN",
            (Token::FULL_JOIN, MySQL) => return Err(self.unsupported(dialect)),
            (Token::FULL_JOIN, _) => "FULL OUTER JOIN",
            (Token::CROSS_JOIN, _) => "CROSS JOIN",

            (Token::AND, _) => "AND",
            (Token::OR, _) => "OR",
            (Token::NOT, _) => "NOT",
            (Token::IN, _) => "IN",
            (Token::NOT_IN, _) => "NOT IN",
            (Token::IS, _) => "IS",
            (Token::IS_NOT, _) => "IS NOT",
            (Token::BETWEEN, _) => "BETWEEN",
            (Token::NOT_BETWEEN, _) => "NOT BETWEEN",
            (Token::NULL, _) => "NULL",
            (Token::TRUE, _) => "TRUE",
            (Token::FALSE, _) => "FALSE",
            (Token::ASC, _) => "ASC",
            (Token::DESC, _) => "DESC",

            (Token::CASE, _) => "CASE",
            (Token::WHEN, _) => "WHEN",
            (Token::THEN, _) => "THEN",
            (Token::ELSE, _) => "ELSE",
            (Token::END, _) => "END",

            (Token::COUNT, _) => "COUNT",
            (Token::COALESCE, _) => "COALESCE",

            (Token::LPAREN, _) => "(",
            (Token::RPAREN, _) => ")",
            (Token::COMMA, _) => ",",
            (Token::DOT, _) => ".",
            (Token::STAR, _) => "*",

            (Token::EQ, _) => "=",
            (Token::NE, _) => "!=",
            (Token::GT, _) => ">",
            (Token::GE, _) => ">=",
            (Token::LT, _) => "<",
            (Token::LE, _) => "<=",

            // MySQL compares case-insensitively unless told otherwise.
            (Token::LIKE, MySQL) => "LIKE BINARY",
            (Token::LIKE, _) => "LIKE",
            (Token::NOT_LIKE, MySQL) => "NOT LIKE BINARY",
            (Token::NOT_LIKE, _) => "NOT LIKE",
            (Token::ILIKE, PostgreSQL) => "ILIKE",
            (Token::ILIKE, _) => "LIKE",
            (Token::NOT_ILIKE, PostgreSQL) => "NOT ILIKE",
            (Token::NOT_ILIKE, _) => "NOT LIKE",

            (Token::REGEXP, PostgreSQL) => "~",
            (Token::REGEXP, MySQL) => "REGEXP BINARY",
            (Token::REGEXP, SQLite) => "REGEXP",
            (Token::NOT_REGEXP, PostgreSQL) => "!~",
            (Token::NOT_REGEXP, MySQL) => "NOT REGEXP BINARY",
            (Token::NOT_REGEXP, SQLite) => "NOT REGEXP",
            (Token::IREGEXP, PostgreSQL) => "~*",
            (Token::IREGEXP, MySQL) => "REGEXP",
            (Token::NOT_IREGEXP, PostgreSQL) => "!~*",
            (Token::NOT_IREGEXP, MySQL) => "NOT REGEXP",
            (Token::IREGEXP | Token::NOT_IREGEXP, SQLite) => {
                return Err(self.unsupported(dialect));
            }

            (Token::EMPTY_SET, MySQL) => "(SELECT NULL FROM DUAL WHERE 1=0)",
            (Token::EMPTY_SET, _) => "(SELECT NULL WHERE 1=0)",
        };
        Ok(text)
    }

    /// Human-readable name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Token::FULL_JOIN => "FULL OUTER JOIN",
            Token::IREGEXP => "case-insensitive regexp match",
            Token::NOT_IREGEXP => "case-insensitive regexp non-match",
            Token::REGEXP => "regexp match",
            Token::NOT_REGEXP => "regexp non-match",
            Token::ILIKE => "ILIKE",
            Token::NOT_ILIKE => "NOT ILIKE",
            _ => "token",
        }
    }

    fn unsupported(self, dialect: Dialect) -> CompileError {
        CompileError::Unsupported {
            feature: self.name(),
            dialect,
        }
    }

    /// Comparison operators, rendered with a space on both sides
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Token::EQ | Token::NE | Token::GT | Token::GE | Token::LT | Token::LE
        )
    }

    /// Function names, rendered directly against their opening paren
    #[inline]
    pub const fn is_function(self) -> bool {
        matches!(self, Token::COUNT | Token::COALESCE)
    }

    /// Punctuation that never takes surrounding whitespace on its own
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            Token::LPAREN | Token::RPAREN | Token::COMMA | Token::DOT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_operators_per_dialect() {
        assert_eq!(Token::ILIKE.render(Dialect::PostgreSQL), Ok("ILIKE"));
        assert_eq!(Token::ILIKE.render(Dialect::SQLite), Ok("LIKE"));
        assert_eq!(Token::LIKE.render(Dialect::MySQL), Ok("LIKE BINARY"));
        assert_eq!(Token::REGEXP.render(Dialect::PostgreSQL), Ok("~"));
        assert_eq!(Token::NOT_IREGEXP.render(Dialect::PostgreSQL), Ok("!~*"));
        assert_eq!(Token::IREGEXP.render(Dialect::MySQL), Ok("REGEXP"));
    }

    #[test]
    fn unsupported_tokens() {
        assert_eq!(
            Token::IREGEXP.render(Dialect::SQLite),
            Err(CompileError::Unsupported {
                feature: "case-insensitive regexp match",
                dialect: Dialect::SQLite,
            })
        );
        assert!(Token::FULL_JOIN.render(Dialect::MySQL).is_err());
        assert_eq!(
            Token::FULL_JOIN.render(Dialect::PostgreSQL),
            Ok("FULL OUTER JOIN")
        );
    }

    #[test]
    fn empty_set_per_dialect() {
        assert_eq!(
            Token::EMPTY_SET.render(Dialect::SQLite),
            Ok("(SELECT NULL WHERE 1=0)")
        );
        assert_eq!(
            Token::EMPTY_SET.render(Dialect::MySQL),
            Ok("(SELECT NULL FROM DUAL WHERE 1=0)")
        );
    }
}
