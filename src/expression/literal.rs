use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, SQLChunk, ToSQL};

use crate::{Operand, Value, resolve};

/// Raw SQL with `?` placeholders filled positionally from `args`.
///
/// Each `?` takes the next argument, resolved like any other operand. A `?`
/// with no argument left is kept verbatim; arguments beyond the last `?` are
/// ignored. The template text itself is emitted untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Literal {
    pub template: String,
    pub args: Vec<Operand>,
}

impl Literal {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Operand>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

fn glue<'a>(sql: &mut SQL<'a, Value>, part: SQL<'a, Value>) {
    if !sql.is_empty() {
        sql.push_mut(SQLChunk::Glue);
    }
    sql.append_mut(part);
}

impl<'a> ToSQL<'a, Value> for Literal {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        let mut sql = SQL::empty();
        let mut args = self.args.iter();
        for (i, piece) in self.template.split('?').enumerate() {
            if i > 0 {
                match args.next() {
                    Some(arg) => glue(&mut sql, resolve(arg, None)),
                    None => glue(&mut sql, SQL::raw("?")),
                }
            }
            if !piece.is_empty() {
                glue(&mut sql, SQL::raw(piece));
            }
        }
        sql
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("value", &self.template)?;
        if !self.args.is_empty() {
            map.serialize_entry("args", &self.args)?;
        }
        map.end()
    }
}
