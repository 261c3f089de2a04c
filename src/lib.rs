//! # sqlshape
//!
//! Relational queries described as data: filters, joins, sorting, grouping
//! and computed columns held in a typed, serializable descriptor, compiled
//! on demand into parameterized SQL for SQLite, PostgreSQL or MySQL.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlshape::prelude::*;
//!
//! # fn main() -> sqlshape::Result<()> {
//! let query = QueryDescriptor::new(Dialect::SQLite, "users", "u")
//!     .with_fields([field("id", "u"), field("name", "u").alias("display_name")])
//!     .r#where([
//!         Condition::from(eq("active", "u", true)),
//!         Condition::from(or([eq("role", "u", "admin"), eq("role", "u", "owner")])),
//!     ])
//!     .limit(0)
//!     .select()?;
//!
//! assert_eq!(
//!     query.sql,
//!     r#"SELECT "u"."id", "u"."name" AS "display_name" FROM "users" AS "u" WHERE "u"."active" = ? AND ("u"."role" = ? OR "u"."role" = ?)"#
//! );
//! assert_eq!(query.params.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Documents
//!
//! Descriptors round-trip through JSON (and YAML with the `yaml` feature).
//! The wire format has no type tags: each node's kind is inferred from the
//! keys it carries, see [`decode::shape`].
//!
//! ```rust
//! use sqlshape::QueryDescriptor;
//!
//! let query = QueryDescriptor::from_json_str(r#"{
//!     "dialect": "postgres",
//!     "table": {"name": "orders", "alias": "o"},
//!     "wheres": [{"op": "between", "fieldName": "total", "tableAlias": "o", "start": 10, "end": 20}]
//! }"#).unwrap();
//!
//! let compiled = query.select().unwrap();
//! assert_eq!(
//!     compiled.sql,
//!     r#"SELECT * FROM "orders" AS "o" WHERE "o"."total" BETWEEN $1 AND $2"#
//! );
//! ```
//!
//! ## Features
//!
//! | Feature   | Default | Enables                                   |
//! |-----------|---------|-------------------------------------------|
//! | `tracing` | ✅      | `tracing` events for compiles and decodes |
//! | `yaml`    | ✅      | `from_yaml_str` / `to_yaml_string`        |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod condition;
pub mod decode;
pub mod error;
pub mod expression;
pub mod helpers;
mod operand;
mod operators;
pub mod query;
mod resolve;
mod value;

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for sqlshape operations
pub use error::{Error, Result};

/// Database dialect enum
pub use sqlshape_types::Dialect;

pub use condition::{BoolOp, Condition, RangeOp, WhereGroup};
pub use expression::{Case, Coalesce, Expression, Field, Literal, WhenThen};
pub use operand::Operand;
pub use operators::{
    BOOLEAN_OPERATOR_STRINGS, BooleanOperator, LogicalOperator, RangeOperator, split_condition,
};
pub use query::{
    CompiledQuery, JoinType, Operation, OperationKind, QueryDescriptor, Record, Relation, Sort,
    SortDirection, Table, compile,
};
pub use resolve::resolve;
pub use value::Value;

/// The SQL fragment renderer the descriptor compiles through.
///
/// Useful for splicing hand-built fragments into a descriptor with
/// [`Operand::Sql`].
pub mod core {
    pub use sqlshape_core::{CompileError, DialectExt, Param, SQL, SQLChunk, ToSQL, Token};
}

/// Everything needed to build and compile descriptors in code
pub mod prelude {
    pub use crate::helpers::*;
    pub use crate::{
        BoolOp, Case, Coalesce, CompiledQuery, Condition, Dialect, Expression, Field, JoinType,
        Literal, Operand, QueryDescriptor, RangeOp, Record, Relation, Sort, SortDirection, Table,
        Value, WhereGroup,
    };
    pub use sqlshape_core::ToSQL;
}
