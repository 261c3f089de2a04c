//! # sqlshape-core
//!
//! The rendering layer behind sqlshape: SQL fragments built from tokens,
//! quoted identifiers, raw text and bound parameters, rendered for a
//! [`Dialect`] into query text plus the ordered parameter list.
//!
//! ```
//! use std::borrow::Cow;
//! use sqlshape_core::{Dialect, SQL, SQLParam, Token};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Int(i64);
//! impl SQLParam for Int {}
//! impl<'a> From<Int> for Cow<'a, Int> {
//!     fn from(value: Int) -> Self {
//!         Cow::Owned(value)
//!     }
//! }
//!
//! let sql: SQL<'_, Int> = SQL::ident("age").push(Token::GT).append(SQL::param(Int(18)));
//! let (text, params) = sql.build(Dialect::PostgreSQL).unwrap();
//! assert_eq!(text, r#""age" > $1"#);
//! assert_eq!(params.len(), 1);
//! ```

pub mod dialect;
pub mod error;
pub mod helpers;
pub mod param;
pub mod sql;
pub mod tracing;
pub mod traits;

pub use dialect::{Dialect, DialectExt};
pub use error::CompileError;
pub use param::Param;
pub use sql::{SQL, SQLChunk, Token, write_ident};
pub use traits::*;
