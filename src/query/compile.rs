//! Statement assembly: descriptor plus operation to SQL text and bound
//! parameters.

use std::borrow::Cow;
use std::collections::BTreeMap;

use sqlshape_core::{CompileError, SQL, ToSQL, helpers, sqlshape_trace_query};

use super::table::conjunction;
use crate::error::{PreconditionError, Result};
use crate::{Operand, QueryDescriptor, Value, resolve};

/// Column to value map for INSERT and UPDATE; columns render in key order
pub type Record = BTreeMap<String, Operand>;

/// The statement kinds a descriptor compiles to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Select,
    Count,
    Insert,
    Update,
    Delete,
}

impl OperationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationKind::Select => "select",
            OperationKind::Count => "count",
            OperationKind::Insert => "insert",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
        }
    }

    /// UPDATE and DELETE refuse to run without a WHERE clause
    pub const fn requires_non_empty_where(self) -> bool {
        matches!(self, OperationKind::Update | OperationKind::Delete)
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statement request, carrying the row data mutations need
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Select,
    Count,
    Insert(Record),
    Update(Record),
    Delete,
}

impl Operation {
    pub const fn kind(&self) -> OperationKind {
        match self {
            Operation::Select => OperationKind::Select,
            Operation::Count => OperationKind::Count,
            Operation::Insert(_) => OperationKind::Insert,
            Operation::Update(_) => OperationKind::Update,
            Operation::Delete => OperationKind::Delete,
        }
    }
}

/// Rendered statement text and its bound parameters, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Compiles `descriptor` into the statement `operation` asks for.
///
/// UPDATE and DELETE fail with
/// [`PreconditionError::MissingWhereClause`] when the descriptor has no
/// WHERE conditions, or when every one of them renders to nothing.
pub fn compile(descriptor: &QueryDescriptor, operation: &Operation) -> Result<CompiledQuery> {
    let kind = operation.kind();
    let predicate = conjunction(&descriptor.wheres);
    if kind.requires_non_empty_where() && predicate.is_empty() {
        return Err(PreconditionError::MissingWhereClause {
            operation: kind.as_str(),
        }
        .into());
    }

    let sql = match operation {
        Operation::Select => {
            descriptor.paged(descriptor.main_select(descriptor.columns(), predicate))
        }
        Operation::Count => {
            descriptor.paged(descriptor.main_select(helpers::select_count(), predicate))
        }
        Operation::Insert(record) => {
            helpers::insert(SQL::ident(descriptor.table.name.as_str()), assignments(record))
        }
        Operation::Update(record) => {
            if record.is_empty() {
                return Err(CompileError::EmptyUpdate.into());
            }
            helpers::update(descriptor.table.reference(), assignments(record))
                .append(helpers::where_clause(predicate))
        }
        Operation::Delete => {
            helpers::delete(descriptor.table.reference()).append(helpers::where_clause(predicate))
        }
    };

    let (text, params) = sql.build(descriptor.dialect)?;
    sqlshape_trace_query!(text, params.len(), kind.as_str());
    Ok(CompiledQuery {
        sql: text,
        params: params.into_iter().cloned().collect(),
    })
}

fn assignments(record: &Record) -> impl Iterator<Item = (Cow<'_, str>, SQL<'_, Value>)> {
    record
        .iter()
        .map(|(column, value)| (Cow::Borrowed(column.as_str()), resolve(value, None)))
}

impl QueryDescriptor {
    /// SELECT list; no fields selects `*`
    fn columns(&self) -> SQL<'_, Value> {
        helpers::select(self.fields.iter().map(|field| field.to_sql()))
    }

    /// Named fields group by their (qualified) column, unnamed aliased
    /// fields by their alias; anything else is skipped.
    fn group_terms(&self) -> Vec<SQL<'_, Value>> {
        self.group_by
            .iter()
            .filter_map(|field| match (field.name(), field.field_alias()) {
                (Some(_), _) => Some(field.column()),
                (None, Some(alias)) => Some(SQL::ident(alias)),
                (None, None) => None,
            })
            .collect()
    }

    /// `<head> FROM ... JOIN ... WHERE ... GROUP BY ... ORDER BY ...`
    fn main_select<'a>(
        &'a self,
        head: SQL<'a, Value>,
        predicate: SQL<'a, Value>,
    ) -> SQL<'a, Value> {
        let mut sql = head.append(helpers::from(self.table.reference()));
        self.table.write_joins(&mut sql);
        sql.append(helpers::where_clause(predicate))
            .append(helpers::group_by(self.group_terms()))
            .append(helpers::order_by(self.sorts.iter().map(|sort| sort.term())))
    }

    /// LIMIT and OFFSET, each only when positive. Counts past `i64::MAX`
    /// saturate so they bind as integers.
    fn paged<'a>(&self, sql: SQL<'a, Value>) -> SQL<'a, Value> {
        let count = |n: u64| Value::Integer(i64::try_from(n).unwrap_or(i64::MAX));
        let mut sql = sql;
        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            sql.append_mut(helpers::limit(count(limit)));
        }
        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            sql.append_mut(helpers::offset(count(offset)));
        }
        sql
    }

    /// The descriptor as a parenthesized sub-select, without LIMIT or OFFSET
    pub fn subquery(&self) -> SQL<'_, Value> {
        self.main_select(self.columns(), conjunction(&self.wheres))
            .parens()
    }

    pub fn compile(&self, operation: &Operation) -> Result<CompiledQuery> {
        compile(self, operation)
    }

    pub fn select(&self) -> Result<CompiledQuery> {
        compile(self, &Operation::Select)
    }

    /// `SELECT COUNT(*)` over the same FROM, WHERE, grouping, ordering and
    /// paging as [`select`](Self::select)
    pub fn count(&self) -> Result<CompiledQuery> {
        compile(self, &Operation::Count)
    }

    /// INSERT of one row into the base table; an empty record inserts
    /// defaults
    pub fn insert(&self, record: Record) -> Result<CompiledQuery> {
        compile(self, &Operation::Insert(record))
    }

    pub fn update(&self, record: Record) -> Result<CompiledQuery> {
        compile(self, &Operation::Update(record))
    }

    pub fn delete(&self) -> Result<CompiledQuery> {
        compile(self, &Operation::Delete)
    }
}
