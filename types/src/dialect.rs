//! SQL dialect enum shared by the compiler and the descriptor model.

/// SQL dialect a descriptor is compiled for
///
/// Each dialect has different placeholder syntax, identifier quoting and
/// spellings for pattern and regular-expression operators.
///
/// # Examples
///
/// ```
/// use sqlshape_types::Dialect;
///
/// let dialect = Dialect::PostgreSQL;
/// assert!(dialect.uses_numbered_placeholders());
///
/// let sqlite = Dialect::SQLite;
/// assert!(!sqlite.uses_numbered_placeholders());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - uses `?` positional placeholders and `"` quoting
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "sqlite3", alias = "SQLite"))]
    SQLite,

    /// PostgreSQL - uses `$1, $2, ...` numbered placeholders and `"` quoting
    #[cfg_attr(
        feature = "serde",
        serde(rename = "postgres", alias = "postgresql", alias = "pg", alias = "PostgreSQL")
    )]
    PostgreSQL,

    /// MySQL - uses `?` positional placeholders and backtick quoting
    #[cfg_attr(feature = "serde", serde(alias = "MySQL"))]
    MySQL,
}

impl Dialect {
    /// Returns `true` if this dialect uses numbered placeholders (`$1, $2, ...`)
    ///
    /// Currently only PostgreSQL uses numbered placeholders.
    /// SQLite and MySQL use positional `?` placeholders.
    #[inline]
    #[must_use]
    pub const fn uses_numbered_placeholders(&self) -> bool {
        matches!(self, Dialect::PostgreSQL)
    }

    /// Quote character wrapped around identifiers
    #[inline]
    #[must_use]
    pub const fn identifier_quote(&self) -> char {
        match self {
            Dialect::MySQL => '`',
            Dialect::SQLite | Dialect::PostgreSQL => '"',
        }
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"sqlite3"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlshape_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
    /// assert_eq!(Dialect::parse("postgres"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("sqlite") || s.eq_ignore_ascii_case("sqlite3") {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") {
            Some(Dialect::MySQL)
        } else {
            None
        }
    }

    /// Canonical lowercase name, accepted back by [`Dialect::parse`]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgres",
            Dialect::MySQL => "mysql",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialectParseError {}
