use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, ToSQL, Token};

use crate::{Field, Operand, Value, resolve};

/// `COALESCE(field, ..., default)`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coalesce {
    pub fields: Vec<Field>,
    pub default: Option<Box<Operand>>,
}

impl Coalesce {
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self {
            fields: fields.into_iter().collect(),
            default: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<Operand>) -> Self {
        self.default = Some(Box::new(value.into()));
        self
    }
}

impl<'a> ToSQL<'a, Value> for Coalesce {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        let args = self
            .fields
            .iter()
            .map(|field| field.to_sql())
            .chain(self.default.iter().map(|d| resolve(d, None)));
        SQL::func(Token::COALESCE, SQL::join(args, Token::COMMA))
    }
}

impl Serialize for Coalesce {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("fields", &self.fields)?;
        if let Some(default) = &self.default {
            map.serialize_entry("defaultValue", default)?;
        }
        map.end()
    }
}
