use serde_json::json;
use sqlshape::decode::{decode_condition, decode_expression};
use sqlshape::prelude::*;

fn condition_round_trip(condition: impl Into<Condition>) {
    let condition = condition.into();
    let encoded = serde_json::to_value(&condition).unwrap();
    let decoded = decode_condition(&encoded).unwrap();
    assert_eq!(decoded, condition, "encoded as {encoded}");
}

fn expression_round_trip(expression: impl Into<Expression>) {
    let expression = expression.into();
    let encoded = serde_json::to_value(&expression).unwrap();
    let decoded = decode_expression(&encoded).unwrap();
    assert_eq!(decoded, Operand::from(expression), "encoded as {encoded}");
}

#[test]
fn test_conditions_round_trip() {
    condition_round_trip(eq("status", "u", "active"));
    condition_round_trip(neq("deleted_at", "", Operand::Null));
    condition_round_trip(is_in("id", "u", vec![1, 2, 3]));
    condition_round_trip(not_in("id", "u", Vec::<i64>::new()));
    condition_round_trip(ilike("name", "", "a%"));
    condition_round_trip(regexp_like("code", "c", "^[A-Z]+$"));
    condition_round_trip(gt("total", "o", field("limit", "a")));
    condition_round_trip(between("age", "u", 18, 65));
    condition_round_trip(not_between("score", "", 1.5, 2.5));
    condition_round_trip(or([
        Condition::from(eq("role", "", "admin")),
        and([lt("age", "", 30), is_not_null("email", "")]).into(),
    ]));
    condition_round_trip(and(Vec::<Condition>::new()));
}

#[test]
fn test_expressions_round_trip() {
    expression_round_trip(Field::new("id", "u"));
    expression_round_trip(Field::new("email", "u").alias("contact"));
    expression_round_trip(
        Field::new("n", "").with_inner(Literal::new("LOWER(?)").arg(field("n", ""))),
    );
    expression_round_trip(Literal::new("NOW()"));
    expression_round_trip(literal("? + ?", [Operand::from(field("a", "")), 2.into()]));
    expression_round_trip(
        Case::new()
            .when(gte("score", "", 90), "A")
            .when(true, Operand::Null)
            .otherwise(field("fallback", "")),
    );
    expression_round_trip(Case::new().when(eq("a", "", 1), 1));
    expression_round_trip(coalesce([field("nickname", "u"), field("name", "u")]));
    expression_round_trip(coalesce([field("nickname", "u")]).default_value(Operand::Null));
    expression_round_trip(coalesce([field("n", "")]).default_value(literal("?", [0])));
}

#[test]
fn test_wire_format() {
    let encoded = serde_json::to_value(between("age", "u", 18, 65)).unwrap();
    assert_eq!(
        encoded,
        json!({"op": "between", "fieldName": "age", "tableAlias": "u", "start": 18, "end": 65})
    );

    let encoded = serde_json::to_value(or([is_in("id", "", [1, 2])])).unwrap();
    assert_eq!(
        encoded,
        json!({"op": "OR", "conditions": [{"op": "in", "fieldName": "id", "value": [1, 2]}]})
    );

    let encoded = serde_json::to_value(
        Case::new().when(eq("a", "", 1), "one").otherwise("many"),
    )
    .unwrap();
    assert_eq!(
        encoded,
        json!({
            "conditions": [{"when": {"op": "eq", "fieldName": "a", "value": 1}, "then": "one"}],
            "else": "many"
        })
    );

    let total = Field::computed("total", literal("SUM(?)", [field("amount", "o")]));
    let encoded = serde_json::to_value(total).unwrap();
    assert_eq!(
        encoded,
        json!({"fieldAlias": "total", "exp": {"value": "SUM(?)", "args": [{"name": "amount", "tableAlias": "o"}]}})
    );
}

#[test]
fn test_descriptor_round_trip() {
    let descriptor = QueryDescriptor::new(Dialect::PostgreSQL, "users", "u")
        .with_fields([
            field("id", "u"),
            Field::computed("orders", literal("COUNT(?)", [field("id", "o")])),
        ])
        .left_join("orders", "o", [eq("user_id", "o", field("id", "u"))])
        .r#where([Condition::from(eq("active", "u", true)), between("age", "u", 18, 65).into()])
        .group_by([field("id", "u")])
        .order_by([desc("orders", "")])
        .offset(20);

    let text = descriptor.to_json_string().unwrap();
    let decoded = QueryDescriptor::from_json_str(&text).unwrap();
    assert_eq!(decoded, descriptor);
    assert_eq!(decoded.select().unwrap(), descriptor.select().unwrap());
}

#[test]
fn test_serde_traits() {
    let condition: Condition =
        serde_json::from_value(json!({"op": "eq", "fieldName": "a", "value": 1})).unwrap();
    assert_eq!(condition, Condition::from(eq("a", "", 1)));

    let expression: Expression = serde_json::from_value(json!({"name": "a"})).unwrap();
    assert_eq!(expression, Expression::from(field("a", "")));

    let err = serde_json::from_value::<Expression>(json!({"op": "eq", "fieldName": "a"}));
    assert!(err.is_err());

    let range: RangeOp =
        serde_json::from_value(json!({"op": "notBetween", "fieldName": "n", "start": 1, "end": 2}))
            .unwrap();
    assert_eq!(range, not_between("n", "", 1, 2));
    assert!(serde_json::from_value::<RangeOp>(json!({"op": "eq", "fieldName": "n"})).is_err());

    let sort: Sort = serde_json::from_value(json!({"name": "id", "order": "desc"})).unwrap();
    assert_eq!(sort, desc("id", ""));

    let descriptor: QueryDescriptor =
        serde_json::from_value(json!({"table": {"name": "t"}, "limit": 3})).unwrap();
    assert_eq!(descriptor.limit, Some(3));
    assert_eq!(descriptor.dialect, Dialect::SQLite);
}

#[test]
fn test_compiled_fragments_do_not_serialize() {
    let op = eq("a", "", Operand::sql(sqlshape::core::SQL::raw("now()")));
    assert!(serde_json::to_value(&op).is_err());
}
