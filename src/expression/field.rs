use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, ToSQL, Token};

use crate::{Operand, Value, resolve};

/// A column reference, optionally renamed, or a named wrapper around any
/// operand.
///
/// With `inner` set the field renders the resolved operand, aliased by
/// `field_alias` or else by `name`. Without it the field is a plain or
/// table-qualified column, followed by `AS field_alias` when aliased.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub name: Option<String>,
    pub table_alias: Option<String>,
    pub field_alias: Option<String>,
    pub inner: Option<Box<Operand>>,
}

impl Field {
    /// Column `name`, qualified by `table_alias` when it is non-empty
    pub fn new(name: impl Into<String>, table_alias: impl Into<String>) -> Self {
        Self {
            name: non_empty(name.into()),
            table_alias: non_empty(table_alias.into()),
            ..Self::default()
        }
    }

    /// A computed column: `inner` rendered `AS alias`
    pub fn computed(alias: impl Into<String>, inner: impl Into<Operand>) -> Self {
        Self {
            field_alias: non_empty(alias.into()),
            inner: Some(Box::new(inner.into())),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.field_alias = non_empty(alias.into());
        self
    }

    pub fn with_inner(mut self, inner: impl Into<Operand>) -> Self {
        self.inner = Some(Box::new(inner.into()));
        self
    }

    /// True when the field carries a non-empty output alias
    pub fn aliased(&self) -> bool {
        self.field_alias.as_deref().is_some_and(|a| !a.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn table_alias(&self) -> Option<&str> {
        self.table_alias.as_deref().filter(|t| !t.is_empty())
    }

    pub fn field_alias(&self) -> Option<&str> {
        self.field_alias.as_deref().filter(|a| !a.is_empty())
    }

    /// Plain or qualified column, without any output alias
    pub fn column(&self) -> SQL<'_, Value> {
        column_ref(self.name().unwrap_or_default(), self.table_alias())
    }

    /// Name the field's output column goes by
    pub fn output_name(&self) -> Option<&str> {
        self.field_alias().or_else(|| self.name())
    }
}

/// `"table"."column"`, `"column"`, or the bare `*` wildcard
pub fn column_ref<'a>(name: &'a str, table_alias: Option<&'a str>) -> SQL<'a, Value> {
    let column = if name == "*" {
        SQL::token(Token::STAR)
    } else {
        SQL::ident(name)
    };
    match table_alias.filter(|t| !t.is_empty()) {
        Some(table) => SQL::ident(table).push(Token::DOT).append(column),
        None => column,
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl<'a> ToSQL<'a, Value> for Field {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        if let Some(inner) = &self.inner {
            return resolve(inner, self.output_name());
        }
        match self.field_alias() {
            Some(alias) => self.column().alias(alias),
            None => self.column(),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(name) = self.name() {
            map.serialize_entry("name", name)?;
        }
        if let Some(table_alias) = self.table_alias() {
            map.serialize_entry("tableAlias", table_alias)?;
        }
        if let Some(field_alias) = self.field_alias() {
            map.serialize_entry("fieldAlias", field_alias)?;
        }
        if let Some(inner) = &self.inner {
            map.serialize_entry("exp", inner)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlshape_core::Dialect;

    fn sql(field: &Field) -> String {
        field.to_sql().sql(Dialect::SQLite).unwrap()
    }

    #[test]
    fn test_plain_and_qualified_columns() {
        assert_eq!(sql(&Field::new("id", "")), r#""id""#);
        assert_eq!(sql(&Field::new("id", "u")), r#""u"."id""#);
        assert_eq!(sql(&Field::new("*", "u")), r#""u".*"#);
        assert_eq!(sql(&Field::new("*", "")), "*");
    }

    #[test]
    fn test_aliased_column() {
        let field = Field::new("email", "u").alias("contact");
        assert!(field.aliased());
        assert_eq!(sql(&field), r#""u"."email" AS "contact""#);
    }

    #[test]
    fn test_empty_alias_is_not_aliased() {
        let field = Field {
            name: Some("id".into()),
            field_alias: Some(String::new()),
            ..Field::default()
        };
        assert!(!field.aliased());
        assert_eq!(sql(&field), r#""id""#);
    }
}
