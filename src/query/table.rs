use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, Token, helpers, sqlshape_trace_skip, sqlshape_warn};

use crate::expression::non_empty;
use crate::{Condition, Value};

/// How a related table is joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    FullOuter,
    Cross,
}

impl JoinType {
    pub const fn as_str(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::FullOuter => "FULL OUTER",
            JoinType::Cross => "CROSS",
        }
    }

    /// Case-insensitive; a trailing `JOIN` is accepted and `FULL` alone
    /// means `FULL OUTER`.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix("join").map_or(lower.as_str(), str::trim_end);
        match name {
            "inner" => Some(JoinType::Inner),
            "left" | "left outer" => Some(JoinType::Left),
            "right" | "right outer" => Some(JoinType::Right),
            "full" | "full outer" => Some(JoinType::FullOuter),
            "cross" => Some(JoinType::Cross),
            _ => None,
        }
    }

    /// Unknown join types join `INNER`
    pub fn from_wire(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub(crate) const fn token(self) -> Token {
        match self {
            JoinType::Inner => Token::INNER_JOIN,
            JoinType::Left => Token::LEFT_JOIN,
            JoinType::Right => Token::RIGHT_JOIN,
            JoinType::FullOuter => Token::FULL_JOIN,
            JoinType::Cross => Token::CROSS_JOIN,
        }
    }
}

impl std::fmt::Display for JoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table, its alias and the tables joined to it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
    pub relations: Vec<Relation>,
}

impl Table {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: non_empty(alias.into()),
            relations: Vec::new(),
        }
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// `"name"` or `"name" AS "alias"`
    pub fn reference(&self) -> SQL<'_, Value> {
        let sql = SQL::ident(self.name.as_str());
        match self.alias.as_deref() {
            Some(alias) => sql.alias(alias),
            None => sql,
        }
    }

    /// Appends every relation's JOIN, each followed by its own nested
    /// relations.
    pub(crate) fn write_joins<'a>(&'a self, sql: &mut SQL<'a, Value>) {
        for relation in &self.relations {
            sql.append_mut(relation.join_clause());
            relation.table.write_joins(sql);
        }
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        if let Some(alias) = &self.alias {
            map.serialize_entry("alias", alias)?;
        }
        if !self.relations.is_empty() {
            map.serialize_entry("relations", &self.relations)?;
        }
        map.end()
    }
}

/// A joined table and its ON conditions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relation {
    pub join_type: JoinType,
    pub table: Table,
    pub on: Vec<Condition>,
}

impl Relation {
    pub fn new<I>(join_type: JoinType, table: Table, on: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition>,
    {
        Self {
            join_type,
            table,
            on: on.into_iter().map(Into::into).collect(),
        }
    }

    fn join_clause(&self) -> SQL<'_, Value> {
        let on = if self.join_type == JoinType::Cross {
            if !self.on.is_empty() {
                sqlshape_warn!(table = %self.table.name, "ON conditions ignored for CROSS JOIN");
            }
            SQL::empty()
        } else {
            conjunction(&self.on)
        };
        helpers::join(self.join_type.token(), self.table.reference(), on)
    }
}

impl Serialize for Relation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("joinType", self.join_type.as_str())?;
        map.serialize_entry("table", &self.table)?;
        if !self.on.is_empty() {
            map.serialize_entry("on", &self.on)?;
        }
        map.end()
    }
}

/// Conditions joined with `AND`, skipping the ones that render nothing
pub(crate) fn conjunction(conditions: &[Condition]) -> SQL<'_, Value> {
    SQL::join(
        conditions.iter().filter_map(|condition| {
            let predicate = condition.predicate();
            if predicate.is_none() {
                sqlshape_trace_skip!("empty condition");
            }
            predicate
        }),
        Token::AND,
    )
}
