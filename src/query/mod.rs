//! The query descriptor and the statements it compiles to.

mod compile;
mod sort;
mod table;

pub use compile::{CompiledQuery, Operation, OperationKind, Record, compile};
pub use sort::{Sort, SortDirection};
pub use table::{JoinType, Relation, Table};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::decode::decode_descriptor;
use crate::error::DecodeError;
use crate::{Condition, Dialect, Field};

/// Limit applied by [`QueryDescriptor::new`]
pub const DEFAULT_LIMIT: u64 = 10;

/// A serializable description of a query against one base table.
///
/// Built incrementally with the consuming builder methods below, or read
/// from a JSON / YAML document. Nothing is rendered until one of the
/// statement methods ([`select`](Self::select), [`count`](Self::count),
/// [`insert`](Self::insert), [`update`](Self::update),
/// [`delete`](Self::delete)) is called.
///
/// ```
/// use sqlshape::prelude::*;
///
/// let query = QueryDescriptor::new(Dialect::PostgreSQL, "users", "u")
///     .with_fields([field("id", "u"), field("email", "u")])
///     .r#where([gte("age", "u", 18)])
///     .order_by([desc("created_at", "u")])
///     .select()
///     .unwrap();
///
/// assert_eq!(
///     query.sql,
///     r#"SELECT "u"."id", "u"."email" FROM "users" AS "u" WHERE "u"."age" >= $1 ORDER BY "u"."created_at" DESC LIMIT $2"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryDescriptor {
    pub dialect: Dialect,
    pub table: Table,
    pub fields: Vec<Field>,
    pub wheres: Vec<Condition>,
    pub sorts: Vec<Sort>,
    pub group_by: Vec<Field>,
    /// `None` or `Some(0)` means no LIMIT
    pub limit: Option<u64>,
    /// `None` or `Some(0)` means no OFFSET
    pub offset: Option<u64>,
}

impl QueryDescriptor {
    /// A descriptor over `table_name`, aliased when `table_alias` is
    /// non-empty, limited to [`DEFAULT_LIMIT`] rows
    pub fn new(
        dialect: Dialect,
        table_name: impl Into<String>,
        table_alias: impl Into<String>,
    ) -> Self {
        Self {
            dialect,
            table: Table::new(table_name, table_alias),
            limit: Some(DEFAULT_LIMIT),
            ..Self::default()
        }
    }

    pub fn with_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields.extend(fields);
        self
    }

    /// Appends WHERE conditions; all of them must hold
    pub fn r#where<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        self.wheres.extend(conditions.into_iter().map(Into::into));
        self
    }

    pub fn order_by<I>(mut self, sorts: I) -> Self
    where
        I: IntoIterator<Item = Sort>,
    {
        self.sorts.extend(sorts);
        self
    }

    pub fn group_by<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.group_by.extend(fields);
        self
    }

    /// Joins `table` to the base table
    pub fn join<I>(mut self, join_type: JoinType, table: Table, on: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        self.table.relations.push(Relation::new(join_type, table, on));
        self
    }

    pub fn inner_join<I>(
        self,
        table_name: impl Into<String>,
        table_alias: impl Into<String>,
        on: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        self.join(JoinType::Inner, Table::new(table_name, table_alias), on)
    }

    pub fn left_join<I>(
        self,
        table_name: impl Into<String>,
        table_alias: impl Into<String>,
        on: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        self.join(JoinType::Left, Table::new(table_name, table_alias), on)
    }

    pub fn right_join<I>(
        self,
        table_name: impl Into<String>,
        table_alias: impl Into<String>,
        on: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        self.join(JoinType::Right, Table::new(table_name, table_alias), on)
    }

    /// Sets the row limit; `0` removes it
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the row offset; `0` removes it
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn from_json_value(node: &serde_json::Value) -> Result<Self, DecodeError> {
        decode_descriptor(node)
    }

    pub fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        let node: serde_json::Value = serde_json::from_str(text)?;
        decode_descriptor(&node)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self, DecodeError> {
        let node: serde_json::Value = serde_yaml::from_str(text)?;
        decode_descriptor(&node)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[cfg(feature = "yaml")]
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Serialize for QueryDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("dialect", self.dialect.as_str())?;
        map.serialize_entry("table", &self.table)?;
        if !self.fields.is_empty() {
            map.serialize_entry("fields", &self.fields)?;
        }
        if !self.wheres.is_empty() {
            map.serialize_entry("wheres", &self.wheres)?;
        }
        if !self.sorts.is_empty() {
            map.serialize_entry("sorts", &self.sorts)?;
        }
        if !self.group_by.is_empty() {
            map.serialize_entry("groupBy", &self.group_by)?;
        }
        if let Some(limit) = self.limit {
            map.serialize_entry("limit", &limit)?;
        }
        if let Some(offset) = self.offset {
            map.serialize_entry("offset", &offset)?;
        }
        map.end()
    }
}
