use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, Token};

use crate::Value;
use crate::expression::{column_ref, non_empty};

/// ORDER BY direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// `asc` / `desc` in any case, surrounding whitespace ignored
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    /// Anything but `DESC` sorts ascending
    pub fn from_wire(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub(crate) const fn token(self) -> Token {
        match self {
            SortDirection::Asc => Token::ASC,
            SortDirection::Desc => Token::DESC,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ORDER BY term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub name: String,
    pub table_alias: Option<String>,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(
        name: impl Into<String>,
        table_alias: impl Into<String>,
        direction: SortDirection,
    ) -> Self {
        Self {
            name: name.into(),
            table_alias: non_empty(table_alias.into()),
            direction,
        }
    }

    pub(crate) fn term(&self) -> (SQL<'_, Value>, Token) {
        (
            column_ref(&self.name, self.table_alias.as_deref()),
            self.direction.token(),
        )
    }
}

impl Serialize for Sort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        if let Some(table_alias) = &self.table_alias {
            map.serialize_entry("tableAlias", table_alias)?;
        }
        map.serialize_entry("order", self.direction.as_str())?;
        map.end()
    }
}
