use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlshape_core::{SQL, ToSQL, Token};

use crate::{Operand, Value, resolve};

/// One `WHEN ... THEN ...` arm
#[derive(Debug, Clone, PartialEq)]
pub struct WhenThen {
    pub when: Operand,
    pub then: Operand,
}

impl WhenThen {
    pub fn new(when: impl Into<Operand>, then: impl Into<Operand>) -> Self {
        Self {
            when: when.into(),
            then: then.into(),
        }
    }
}

/// `CASE WHEN ... THEN ... [ELSE ...] END`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Case {
    pub arms: Vec<WhenThen>,
    pub otherwise: Option<Box<Operand>>,
}

impl Case {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, when: impl Into<Operand>, then: impl Into<Operand>) -> Self {
        self.arms.push(WhenThen::new(when, then));
        self
    }

    pub fn otherwise(mut self, value: impl Into<Operand>) -> Self {
        self.otherwise = Some(Box::new(value.into()));
        self
    }
}

impl<'a> ToSQL<'a, Value> for Case {
    fn to_sql(&'a self) -> SQL<'a, Value> {
        let mut sql = SQL::token(Token::CASE);
        for arm in &self.arms {
            sql.push_mut(Token::WHEN);
            sql.append_mut(resolve(&arm.when, None));
            sql.push_mut(Token::THEN);
            sql.append_mut(resolve(&arm.then, None));
        }
        if let Some(otherwise) = &self.otherwise {
            sql.push_mut(Token::ELSE);
            sql.append_mut(resolve(otherwise, None));
        }
        sql.push(Token::END)
    }
}

impl Serialize for WhenThen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("when", &self.when)?;
        map.serialize_entry("then", &self.then)?;
        map.end()
    }
}

impl Serialize for Case {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("conditions", &self.arms)?;
        if let Some(otherwise) = &self.otherwise {
            map.serialize_entry("else", otherwise)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{eq, gt};
    use sqlshape_core::Dialect;

    #[test]
    fn test_case_with_else() {
        let case = Case::new()
            .when(gt("score", "s", 90), "A")
            .when(eq("passed", "s", true), "P")
            .otherwise("F");
        let binding = case.to_sql();
        let (sql, params) = binding.build(Dialect::SQLite).unwrap();
        assert_eq!(
            sql,
            r#"CASE WHEN "s"."score" > ? THEN ? WHEN "s"."passed" = ? THEN ? ELSE ? END"#
        );
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_case_without_else() {
        let case = Case::new().when(Value::Integer(1), Value::Text("one".into()));
        assert_eq!(
            case.to_sql().sql(Dialect::PostgreSQL).unwrap(),
            "CASE WHEN $1 THEN $2 END"
        );
    }
}
