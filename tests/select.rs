use sqlshape::prelude::*;

fn users(dialect: Dialect) -> QueryDescriptor {
    QueryDescriptor::new(dialect, "users", "u")
        .with_fields([field("id", "u"), field("email", "u").alias("contact")])
        .r#where([gte("age", "u", 18), like("email", "u", "%@example.com")])
        .order_by([asc("name", "u")])
        .limit(25)
        .offset(50)
}

#[test]
fn test_select_per_dialect() {
    let sqlite = users(Dialect::SQLite).select().unwrap();
    assert_eq!(
        sqlite.sql,
        concat!(
            r#"SELECT "u"."id", "u"."email" AS "contact" FROM "users" AS "u" "#,
            r#"WHERE "u"."age" >= ? AND "u"."email" LIKE ? ORDER BY "u"."name" ASC LIMIT ? OFFSET ?"#
        )
    );

    let postgres = users(Dialect::PostgreSQL).select().unwrap();
    assert_eq!(
        postgres.sql,
        concat!(
            r#"SELECT "u"."id", "u"."email" AS "contact" FROM "users" AS "u" "#,
            r#"WHERE "u"."age" >= $1 AND "u"."email" LIKE $2 ORDER BY "u"."name" ASC LIMIT $3 OFFSET $4"#
        )
    );

    let mysql = users(Dialect::MySQL).select().unwrap();
    assert_eq!(
        mysql.sql,
        concat!(
            "SELECT `u`.`id`, `u`.`email` AS `contact` FROM `users` AS `u` ",
            "WHERE `u`.`age` >= ? AND `u`.`email` LIKE BINARY ? ORDER BY `u`.`name` ASC LIMIT ? OFFSET ?"
        )
    );

    let expected = vec![
        Value::Integer(18),
        Value::from("%@example.com"),
        Value::Integer(25),
        Value::Integer(50),
    ];
    assert_eq!(sqlite.params, expected);
    assert_eq!(postgres.params, expected);
    assert_eq!(mysql.params, expected);
}

#[test]
fn test_nested_groups() {
    let query = QueryDescriptor::new(Dialect::PostgreSQL, "posts", "p")
        .r#where([or([
            Condition::from(eq("status", "p", "published")),
            and([eq("status", "p", "draft"), eq("author_id", "p", 7)]).into(),
        ])])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(
        query.sql,
        concat!(
            r#"SELECT * FROM "posts" AS "p" WHERE ("p"."status" = $1 OR "#,
            r#"("p"."status" = $2 AND "p"."author_id" = $3))"#
        )
    );
}

#[test]
fn test_single_child_group_is_unwrapped() {
    let grouped = QueryDescriptor::new(Dialect::SQLite, "t", "")
        .r#where([and([eq("a", "", 1)])])
        .select()
        .unwrap();
    let plain = QueryDescriptor::new(Dialect::SQLite, "t", "")
        .r#where([eq("a", "", 1)])
        .select()
        .unwrap();
    assert_eq!(grouped, plain);
    assert_eq!(plain.sql, r#"SELECT * FROM "t" WHERE "a" = ? LIMIT ?"#);
}

// Permissive: groups that resolve to nothing are dropped rather than
// rendering `()`.
#[test]
fn test_empty_groups_are_dropped() {
    let query = QueryDescriptor::new(Dialect::SQLite, "t", "")
        .r#where([
            Condition::from(or(Vec::<Condition>::new())),
            and([or(Vec::<Condition>::new())]).into(),
        ])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(query.sql, r#"SELECT * FROM "t""#);
}

#[test]
fn test_joins_and_group_by() {
    let query = QueryDescriptor::new(Dialect::SQLite, "users", "u")
        .with_fields([
            field("id", "u"),
            Field::computed("orders", literal("COUNT(?)", [field("id", "o")])),
        ])
        .left_join("orders", "o", [eq("user_id", "o", field("id", "u"))])
        .right_join("regions", "r", [eq("id", "r", field("region_id", "u"))])
        .group_by([field("id", "u")])
        .order_by([desc("orders", "")])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(
        query.sql,
        concat!(
            r#"SELECT "u"."id", COUNT("o"."id") AS "orders" FROM "users" AS "u" "#,
            r#"LEFT JOIN "orders" AS "o" ON "o"."user_id" = "u"."id" "#,
            r#"RIGHT JOIN "regions" AS "r" ON "r"."id" = "u"."region_id" "#,
            r#"GROUP BY "u"."id" ORDER BY "orders" DESC"#
        )
    );
    assert!(query.params.is_empty());
}

#[test]
fn test_cross_join_drops_on() {
    let query = QueryDescriptor::new(Dialect::PostgreSQL, "a", "")
        .join(JoinType::Cross, Table::new("b", ""), [eq("x", "b", 1)])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(query.sql, r#"SELECT * FROM "a" CROSS JOIN "b""#);
    assert!(query.params.is_empty());
}

#[test]
fn test_full_join_unsupported_on_mysql() {
    let descriptor = QueryDescriptor::new(Dialect::MySQL, "a", "")
        .join(JoinType::FullOuter, Table::new("b", ""), [eq("id", "b", field("id", "a"))]);
    assert!(matches!(
        descriptor.select(),
        Err(sqlshape::Error::Compile(sqlshape::core::CompileError::Unsupported { .. }))
    ));

    let postgres = QueryDescriptor {
        dialect: Dialect::PostgreSQL,
        ..descriptor
    };
    assert_eq!(
        postgres.limit(0).select().unwrap().sql,
        r#"SELECT * FROM "a" FULL OUTER JOIN "b" ON "b"."id" = "a"."id""#
    );
}

#[test]
fn test_count() {
    let query = users(Dialect::SQLite).count().unwrap();
    assert_eq!(
        query.sql,
        concat!(
            r#"SELECT COUNT(*) FROM "users" AS "u" "#,
            r#"WHERE "u"."age" >= ? AND "u"."email" LIKE ? ORDER BY "u"."name" ASC LIMIT ? OFFSET ?"#
        )
    );
    assert_eq!(query.params.len(), 4);
}

#[test]
fn test_range_and_null_checks() {
    let query = QueryDescriptor::new(Dialect::PostgreSQL, "events", "e")
        .r#where([
            Condition::from(between("starts_at", "e", "2024-01-01", "2024-12-31")),
            not_between("priority", "e", 3, 5).into(),
            is_not_null("owner_id", "e").into(),
            neq("kind", "e", Value::Null).into(),
        ])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(
        query.sql,
        concat!(
            r#"SELECT * FROM "events" AS "e" WHERE "e"."starts_at" BETWEEN $1 AND $2 "#,
            r#"AND "e"."priority" NOT BETWEEN $3 AND $4 AND "e"."owner_id" IS NOT NULL "#,
            r#"AND "e"."kind" IS NOT NULL"#
        )
    );
    assert_eq!(query.params.len(), 4);
}

#[test]
fn test_identifier_quotes_are_escaped() {
    let query = QueryDescriptor::new(Dialect::SQLite, r#"we"ird"#, "")
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(query.sql, r#"SELECT * FROM "we""ird""#);
}

#[test]
fn test_wildcard_field() {
    let query = QueryDescriptor::new(Dialect::SQLite, "users", "u")
        .with_fields([field("*", "u")])
        .limit(0)
        .select()
        .unwrap();
    assert_eq!(query.sql, r#"SELECT "u".* FROM "users" AS "u""#);
}
