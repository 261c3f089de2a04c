use sqlshape::core::{SQL, Token};
use sqlshape::prelude::*;
use sqlshape::resolve;

fn render(operand: &Operand, alias: Option<&str>, dialect: Dialect) -> (String, Vec<Value>) {
    let binding = resolve(operand, alias);
    let (sql, params) = binding.build(dialect).unwrap();
    (sql, params.into_iter().cloned().collect())
}

#[test]
fn test_empty_in_is_a_constant_predicate() {
    let query = QueryDescriptor::from_json_str(
        r#"{"dialect": "postgres", "table": {"name": "t"},
            "wheres": [{"op": "in", "fieldName": "id", "value": []}]}"#,
    )
    .unwrap()
    .select()
    .unwrap();
    assert_eq!(query.sql, r#"SELECT * FROM "t" WHERE 1=0"#);
    assert!(query.params.is_empty());

    let query = QueryDescriptor::new(Dialect::PostgreSQL, "t", "")
        .r#where([not_in("id", "", Vec::<i64>::new()), eq("kind", "", 2)])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(query.sql, r#"SELECT * FROM "t" WHERE 1=1 AND "kind" = $1"#);

    let query = QueryDescriptor::new(Dialect::MySQL, "products", "")
        .r#where([is_in("category", "", Vec::<Value>::new())])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(query.sql, "SELECT * FROM `products` WHERE 1=0");
}

#[test]
fn test_empty_list_outside_membership_keeps_empty_set() {
    let expr = literal("? IS NULL", [Operand::List(Vec::new())]);
    assert_eq!(
        expr.to_sql().sql(Dialect::SQLite).unwrap(),
        "(SELECT NULL WHERE 1=0) IS NULL"
    );
}

#[test]
fn test_in_with_values() {
    let operand = Operand::from(is_in("id", "u", vec![1, 2, 3]));
    let (sql, params) = render(&operand, None, Dialect::PostgreSQL);
    assert_eq!(sql, r#""u"."id" IN ($1, $2, $3)"#);
    assert_eq!(
        params,
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
}

#[test]
fn test_in_with_subquery() {
    let banned = QueryDescriptor::new(Dialect::PostgreSQL, "bans", "b")
        .with_fields([field("user_id", "b")])
        .r#where([eq("active", "b", true)]);
    let query = QueryDescriptor::new(Dialect::PostgreSQL, "users", "u")
        .r#where([not_in("id", "u", banned)])
        .limit(20)
        .select()
        .unwrap();
    assert_eq!(
        query.sql,
        concat!(
            r#"SELECT * FROM "users" AS "u" WHERE "u"."id" NOT IN "#,
            r#"(SELECT "b"."user_id" FROM "bans" AS "b" WHERE "b"."active" = $1) LIMIT $2"#
        )
    );
    assert_eq!(query.params, vec![Value::Bool(true), Value::Integer(20)]);
}

#[test]
fn test_in_with_compiled_fragments() {
    let subselect: SQL<'static, Value> = SQL::token(Token::SELECT)
        .append(SQL::ident("id"))
        .push(Token::FROM)
        .append(SQL::ident("admins"));
    let operand = Operand::from(is_in("id", "", subselect));
    let (sql, _) = render(&operand, None, Dialect::SQLite);
    assert_eq!(sql, r#""id" IN (SELECT "id" FROM "admins")"#);

    let list: SQL<'static, Value> = SQL::raw("(1, 2)");
    let operand = Operand::from(is_in("id", "", list));
    let (sql, _) = render(&operand, None, Dialect::SQLite);
    assert_eq!(sql, r#""id" IN (1, 2)"#);
}

#[test]
fn test_sub_query_ignores_paging() {
    let latest = QueryDescriptor::new(Dialect::SQLite, "orders", "o")
        .with_fields([field("total", "o")])
        .order_by([desc("created_at", "o")])
        .limit(1)
        .offset(3);
    let (sql, params) = render(&Operand::from(latest), None, Dialect::SQLite);
    assert_eq!(
        sql,
        r#"(SELECT "o"."total" FROM "orders" AS "o" ORDER BY "o"."created_at" DESC)"#
    );
    assert!(params.is_empty());
}

#[test]
fn test_computed_field_aliases() {
    // inner with an explicit alias
    let total = Field::computed("total", literal("SUM(?)", [field("amount", "o")]));
    assert_eq!(
        total.to_sql().sql(Dialect::SQLite).unwrap(),
        r#"SUM("o"."amount") AS "total""#
    );

    // inner without an alias falls back to the field name
    let named = Field::new("label", "").with_inner(Case::new().when(true, "yes").otherwise("no"));
    assert_eq!(
        named.to_sql().sql(Dialect::SQLite).unwrap(),
        r#"CASE WHEN ? THEN ? ELSE ? END AS "label""#
    );

    // a field inner keeps its own rendering
    let renamed = Field::computed("ignored", Field::new("id", "u"));
    assert_eq!(renamed.to_sql().sql(Dialect::SQLite).unwrap(), r#""u"."id""#);
}

#[test]
fn test_condition_as_value() {
    let flag = Field::computed("is_adult", gte("age", "u", 18));
    let binding = flag.to_sql();
    let (sql, params) = binding.build(Dialect::PostgreSQL).unwrap();
    assert_eq!(sql, r#""u"."age" >= $1"#);
    assert_eq!(params.len(), 1);

    let empty = Operand::from(and(Vec::<Condition>::new()));
    assert_eq!(render(&empty, None, Dialect::SQLite).0, "NULL");
}

#[test]
fn test_empty_group_in_value_positions() {
    let query = QueryDescriptor::new(Dialect::SQLite, "t", "")
        .with_fields([Field::computed(
            "flag",
            case([when(and(Vec::<Condition>::new()), 1)]).otherwise(0),
        )])
        .r#where([eq("a", "", and(Vec::<Condition>::new()))])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(
        query.sql,
        r#"SELECT CASE WHEN NULL THEN ? ELSE ? END AS "flag" FROM "t" WHERE "a" = NULL"#
    );
    assert_eq!(query.params, vec![Value::Integer(1), Value::Integer(0)]);
}

#[test]
fn test_coalesce_with_null_default() {
    let expr = coalesce([field("nickname", "u")]).default_value(Operand::Null);
    let (sql, params) = render(&Operand::from(expr), Some("nick"), Dialect::SQLite);
    assert_eq!(sql, r#"COALESCE("u"."nickname", NULL) AS "nick""#);
    assert!(params.is_empty());
}

#[test]
fn test_optional_values() {
    let some = Operand::from(Some("x"));
    assert_eq!(render(&some, None, Dialect::SQLite), ("?".into(), vec![Value::from("x")]));

    let none = Operand::from(None::<i64>);
    assert_eq!(render(&none, None, Dialect::SQLite), ("NULL".into(), vec![]));

    let op = eq("deleted_at", "", None::<String>);
    assert_eq!(
        op.to_sql().sql(Dialect::SQLite).unwrap(),
        r#""deleted_at" IS NULL"#
    );
}
