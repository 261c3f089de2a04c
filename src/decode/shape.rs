//! Key-presence discriminators for untagged nodes.
//!
//! The wire format carries no type tags and several node kinds share keys,
//! so the variant is inferred from which keys are present, in a fixed
//! priority order. Both functions look only at key presence (and, for
//! `Literal`, the type of `value`), never at map iteration order.

use serde_json::{Map, Value as JsonValue};

/// The node kind a map was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    BoolOp,
    RangeOp,
    WhereGroup,
    Case,
    Coalesce,
    Literal,
    Field,
}

impl Shape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::BoolOp => "BoolOp",
            Shape::RangeOp => "RangeOp",
            Shape::WhereGroup => "WhereGroup",
            Shape::Case => "Case",
            Shape::Coalesce => "Coalesce",
            Shape::Literal => "Literal",
            Shape::Field => "Field",
        }
    }

    pub const fn is_condition(self) -> bool {
        matches!(self, Shape::BoolOp | Shape::RangeOp | Shape::WhereGroup)
    }
}

/// `op` + `fieldName` is a comparison (a range when `start` is present);
/// `op` + `conditions` is a group.
pub fn sniff_condition(node: &Map<String, JsonValue>) -> Option<Shape> {
    let has = |key: &str| node.contains_key(key);
    if has("op") && has("fieldName") {
        return Some(if has("start") {
            Shape::RangeOp
        } else {
            Shape::BoolOp
        });
    }
    if has("op") && has("conditions") {
        return Some(Shape::WhereGroup);
    }
    None
}

/// Expression kinds first, then the comparison shapes. Groups are only
/// recognized in condition position.
pub fn sniff_expression(node: &Map<String, JsonValue>) -> Option<Shape> {
    let is_case = node
        .get("conditions")
        .and_then(JsonValue::as_array)
        .and_then(|conditions| conditions.first())
        .and_then(JsonValue::as_object)
        .is_some_and(|first| first.contains_key("when"));
    if is_case {
        return Some(Shape::Case);
    }
    if node.contains_key("fields") {
        return Some(Shape::Coalesce);
    }
    if node.get("value").is_some_and(JsonValue::is_string) {
        return Some(Shape::Literal);
    }
    if node.contains_key("name") {
        return Some(Shape::Field);
    }
    sniff_condition(node).filter(|shape| *shape != Shape::WhereGroup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: JsonValue) -> Map<String, JsonValue> {
        match value {
            JsonValue::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_condition_shapes() {
        let range = map(json!({"start": 1, "end": 2, "fieldName": "age", "op": "between"}));
        assert_eq!(sniff_condition(&range), Some(Shape::RangeOp));

        let boolean = map(json!({"op": "eq", "fieldName": "age", "value": 1}));
        assert_eq!(sniff_condition(&boolean), Some(Shape::BoolOp));

        let group = map(json!({"conditions": [], "op": "OR"}));
        assert_eq!(sniff_condition(&group), Some(Shape::WhereGroup));

        let field_name_wins = map(json!({"op": "eq", "fieldName": "a", "conditions": []}));
        assert_eq!(sniff_condition(&field_name_wins), Some(Shape::BoolOp));

        assert_eq!(sniff_condition(&map(json!({"fieldName": "a"}))), None);
        assert_eq!(sniff_condition(&map(json!({"name": "a"}))), None);
    }

    #[test]
    fn test_expression_shapes() {
        let case = map(json!({"conditions": [{"when": true, "then": 1}]}));
        assert_eq!(sniff_expression(&case), Some(Shape::Case));

        let coalesce = map(json!({"fields": [], "defaultValue": 0}));
        assert_eq!(sniff_expression(&coalesce), Some(Shape::Coalesce));

        let literal = map(json!({"value": "now()"}));
        assert_eq!(sniff_expression(&literal), Some(Shape::Literal));

        let field = map(json!({"name": "id", "tableAlias": "u"}));
        assert_eq!(sniff_expression(&field), Some(Shape::Field));

        let range = map(json!({"op": "between", "fieldName": "a", "start": 1, "end": 2}));
        assert_eq!(sniff_expression(&range), Some(Shape::RangeOp));
    }

    #[test]
    fn test_expression_priority() {
        let case_over_coalesce = map(json!({"fields": [], "conditions": [{"when": 1}]}));
        assert_eq!(sniff_expression(&case_over_coalesce), Some(Shape::Case));

        let coalesce_over_literal = map(json!({"value": "x", "fields": []}));
        assert_eq!(sniff_expression(&coalesce_over_literal), Some(Shape::Coalesce));

        let literal_over_field = map(json!({"name": "a", "value": "x"}));
        assert_eq!(sniff_expression(&literal_over_field), Some(Shape::Literal));

        let numeric_value_is_field = map(json!({"name": "a", "value": 3}));
        assert_eq!(sniff_expression(&numeric_value_is_field), Some(Shape::Field));
    }

    #[test]
    fn test_groups_are_not_expressions() {
        let group = map(json!({"op": "AND", "conditions": [{"op": "eq", "fieldName": "a"}]}));
        assert_eq!(sniff_expression(&group), None);
        assert_eq!(sniff_expression(&map(json!({"foo": 1}))), None);
    }
}
