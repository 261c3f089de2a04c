//! Operator enumerations and their string encodings.
//!
//! Each enum has two readers: `from_wire` for the camelCase names used in
//! descriptor documents (permissive, unknown names fall back to the default)
//! and `parse` for the SQL-ish spellings a person would type (`>=`, `not in`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlshape_core::Token;

/// Comparison applied by a [`BoolOp`](crate::BoolOp)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BooleanOperator {
    #[default]
    Eq,
    Neq,
    Is,
    IsNot,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
    RegexpLike,
    RegexpNotLike,
    RegexpILike,
    RegexpNotILike,
}

impl BooleanOperator {
    pub const ALL: [BooleanOperator; 18] = [
        BooleanOperator::Eq,
        BooleanOperator::Neq,
        BooleanOperator::Is,
        BooleanOperator::IsNot,
        BooleanOperator::Gt,
        BooleanOperator::Gte,
        BooleanOperator::Lt,
        BooleanOperator::Lte,
        BooleanOperator::In,
        BooleanOperator::NotIn,
        BooleanOperator::Like,
        BooleanOperator::NotLike,
        BooleanOperator::ILike,
        BooleanOperator::NotILike,
        BooleanOperator::RegexpLike,
        BooleanOperator::RegexpNotLike,
        BooleanOperator::RegexpILike,
        BooleanOperator::RegexpNotILike,
    ];

    /// Canonical document name
    pub const fn as_str(self) -> &'static str {
        match self {
            BooleanOperator::Eq => "eq",
            BooleanOperator::Neq => "neq",
            BooleanOperator::Is => "is",
            BooleanOperator::IsNot => "isNot",
            BooleanOperator::Gt => "gt",
            BooleanOperator::Gte => "gte",
            BooleanOperator::Lt => "lt",
            BooleanOperator::Lte => "lte",
            BooleanOperator::In => "in",
            BooleanOperator::NotIn => "notIn",
            BooleanOperator::Like => "like",
            BooleanOperator::NotLike => "notLike",
            BooleanOperator::ILike => "iLike",
            BooleanOperator::NotILike => "notILike",
            BooleanOperator::RegexpLike => "regexpLike",
            BooleanOperator::RegexpNotLike => "regexpNotLike",
            BooleanOperator::RegexpILike => "regexpILike",
            BooleanOperator::RegexpNotILike => "regexpNotILike",
        }
    }

    /// Reads a document name, ignoring case. Unknown names become `Eq`.
    pub fn from_wire(s: &str) -> Self {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .unwrap_or_default()
    }

    /// Parses an operator as written in SQL: `=`, `!=`, `<>`, `>`, `>=`,
    /// `<`, `<=`, `is`, `is not`, `in`, `not in`, `like`, `not like`,
    /// `ilike`, `not ilike`, `~`, `!~`, `~*`, `!~*`.
    ///
    /// Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        let op = match normalized.to_ascii_lowercase().as_str() {
            "=" | "==" => BooleanOperator::Eq,
            "!=" | "<>" => BooleanOperator::Neq,
            "is" => BooleanOperator::Is,
            "is not" => BooleanOperator::IsNot,
            ">" => BooleanOperator::Gt,
            ">=" => BooleanOperator::Gte,
            "<" => BooleanOperator::Lt,
            "<=" => BooleanOperator::Lte,
            "in" => BooleanOperator::In,
            "not in" => BooleanOperator::NotIn,
            "like" => BooleanOperator::Like,
            "not like" => BooleanOperator::NotLike,
            "ilike" => BooleanOperator::ILike,
            "not ilike" => BooleanOperator::NotILike,
            "~" => BooleanOperator::RegexpLike,
            "!~" => BooleanOperator::RegexpNotLike,
            "~*" => BooleanOperator::RegexpILike,
            "!~*" => BooleanOperator::RegexpNotILike,
            _ => return None,
        };
        Some(op)
    }

    /// Token emitted between the column and the operand
    pub(crate) const fn token(self) -> Token {
        match self {
            BooleanOperator::Eq => Token::EQ,
            BooleanOperator::Neq => Token::NE,
            BooleanOperator::Is => Token::IS,
            BooleanOperator::IsNot => Token::IS_NOT,
            BooleanOperator::Gt => Token::GT,
            BooleanOperator::Gte => Token::GE,
            BooleanOperator::Lt => Token::LT,
            BooleanOperator::Lte => Token::LE,
            BooleanOperator::In => Token::IN,
            BooleanOperator::NotIn => Token::NOT_IN,
            BooleanOperator::Like => Token::LIKE,
            BooleanOperator::NotLike => Token::NOT_LIKE,
            BooleanOperator::ILike => Token::ILIKE,
            BooleanOperator::NotILike => Token::NOT_ILIKE,
            BooleanOperator::RegexpLike => Token::REGEXP,
            BooleanOperator::RegexpNotLike => Token::NOT_REGEXP,
            BooleanOperator::RegexpILike => Token::IREGEXP,
            BooleanOperator::RegexpNotILike => Token::NOT_IREGEXP,
        }
    }

    pub const fn is_membership(self) -> bool {
        matches!(self, BooleanOperator::In | BooleanOperator::NotIn)
    }
}

/// Operator spellings recognized inside a free-text condition, longest first
/// so `not in` is found before `in`. Word operators carry surrounding spaces
/// to avoid matching inside column names.
pub const BOOLEAN_OPERATOR_STRINGS: [&str; 19] = [
    " not ilike ",
    " not like ",
    " not in ",
    " is not ",
    "!~*",
    "~*",
    "!~",
    "<>",
    ">=",
    "<=",
    "!=",
    " is ",
    " in ",
    " ilike ",
    " like ",
    "~",
    ">",
    "<",
    "=",
];

/// Splits `"age >= 18"` into `("age", Gte, "18")`.
///
/// Operators are matched case-insensitively and the leftmost one wins; when
/// several start at the same offset the earlier entry in
/// [`BOOLEAN_OPERATOR_STRINGS`] is taken. Both sides are trimmed; `None` if no
/// operator is found with non-empty sides.
pub fn split_condition(input: &str) -> Option<(&str, BooleanOperator, &str)> {
    let lowered = input.to_ascii_lowercase();
    BOOLEAN_OPERATOR_STRINGS
        .iter()
        .filter_map(|needle| {
            lowered.match_indices(needle).find_map(|(start, _)| {
                let end = start + needle.len();
                let left = input[..start].trim();
                let right = input[end..].trim();
                if left.is_empty() || right.is_empty() {
                    return None;
                }
                Some((start, left, BooleanOperator::parse(needle)?, right))
            })
        })
        .min_by_key(|(start, ..)| *start)
        .map(|(_, left, op, right)| (left, op, right))
}

/// `BETWEEN` or `NOT BETWEEN`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeOperator {
    #[default]
    Between,
    NotBetween,
}

impl RangeOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            RangeOperator::Between => "between",
            RangeOperator::NotBetween => "notBetween",
        }
    }

    /// Reads `between`, `notBetween`, `not between` or `not`, ignoring case.
    /// Anything else is `Between`.
    pub fn from_wire(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("between") {
            Some(RangeOperator::Between)
        } else if s.eq_ignore_ascii_case("notBetween")
            || s.eq_ignore_ascii_case("not between")
            || s.eq_ignore_ascii_case("not")
        {
            Some(RangeOperator::NotBetween)
        } else {
            None
        }
    }

    pub(crate) const fn token(self) -> Token {
        match self {
            RangeOperator::Between => Token::BETWEEN,
            RangeOperator::NotBetween => Token::NOT_BETWEEN,
        }
    }
}

/// Connective of a [`WhereGroup`](crate::WhereGroup)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }

    /// Reads `AND` or `OR`, ignoring case. Anything else is `And`.
    pub fn from_wire(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("or") {
            LogicalOperator::Or
        } else {
            LogicalOperator::And
        }
    }

    pub(crate) const fn token(self) -> Token {
        match self {
            LogicalOperator::And => Token::AND,
            LogicalOperator::Or => Token::OR,
        }
    }
}

macro_rules! wire_serde {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let s = String::deserialize(deserializer)?;
                    Ok(<$ty>::from_wire(&s))
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

wire_serde!(BooleanOperator, RangeOperator, LogicalOperator);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for op in BooleanOperator::ALL {
            assert_eq!(BooleanOperator::from_wire(op.as_str()), op);
        }
        assert_eq!(BooleanOperator::from_wire("NOTIN"), BooleanOperator::NotIn);
        assert_eq!(BooleanOperator::from_wire("ilike"), BooleanOperator::ILike);
    }

    #[test]
    fn test_unknown_wire_names_use_defaults() {
        assert_eq!(BooleanOperator::from_wire("approximately"), BooleanOperator::Eq);
        assert_eq!(RangeOperator::from_wire("within"), RangeOperator::Between);
        assert_eq!(LogicalOperator::from_wire("xor"), LogicalOperator::And);
        assert_eq!(LogicalOperator::from_wire("or"), LogicalOperator::Or);
    }

    #[test]
    fn test_parse_sql_spellings() {
        assert_eq!(BooleanOperator::parse("<>"), Some(BooleanOperator::Neq));
        assert_eq!(BooleanOperator::parse(" NOT  In "), Some(BooleanOperator::NotIn));
        assert_eq!(BooleanOperator::parse("!~*"), Some(BooleanOperator::RegexpNotILike));
        assert_eq!(BooleanOperator::parse("between"), None);
        assert_eq!(RangeOperator::parse("NOT"), Some(RangeOperator::NotBetween));
    }

    #[test]
    fn test_split_condition() {
        assert_eq!(
            split_condition("age >= 18"),
            Some(("age", BooleanOperator::Gte, "18"))
        );
        assert_eq!(
            split_condition("status NOT IN (1, 2)"),
            Some(("status", BooleanOperator::NotIn, "(1, 2)"))
        );
        assert_eq!(
            split_condition("name ilike 'a%'"),
            Some(("name", BooleanOperator::ILike, "'a%'"))
        );
        assert_eq!(
            split_condition("deleted_at is null"),
            Some(("deleted_at", BooleanOperator::Is, "null"))
        );
        assert_eq!(split_condition("no operator here"), None);
    }

    #[test]
    fn test_split_condition_takes_leftmost_operator() {
        assert_eq!(
            split_condition("name = 'is not x'"),
            Some(("name", BooleanOperator::Eq, "'is not x'"))
        );
        assert_eq!(
            split_condition("title LIKE '%a=b%'"),
            Some(("title", BooleanOperator::Like, "'%a=b%'"))
        );
        assert_eq!(
            split_condition("a <= 3"),
            Some(("a", BooleanOperator::Lte, "3"))
        );
        assert_eq!(
            split_condition("flag is not true"),
            Some(("flag", BooleanOperator::IsNot, "true"))
        );
    }
}
