#![cfg(feature = "yaml")]

use sqlshape::error::DecodeError;
use sqlshape::prelude::*;

const DOCUMENT: &str = r#"
dialect: mysql
table:
  name: orders
  alias: o
  relations:
    - joinType: LEFT
      table:
        name: customers
        alias: c
      on:
        - op: eq
          fieldName: id
          tableAlias: c
          value:
            name: customer_id
            tableAlias: o
fields:
  - name: id
    tableAlias: o
  - fieldAlias: customer
    exp:
      fields:
        - name: nickname
          tableAlias: c
        - name: name
          tableAlias: c
      defaultValue: unknown
wheres:
  - op: OR
    conditions:
      - op: in
        fieldName: status
        tableAlias: o
        value: [paid, shipped]
      - op: between
        fieldName: total
        tableAlias: o
        start: 100
        end: 500
sorts:
  - name: id
    tableAlias: o
    order: desc
limit: 10
"#;

#[test]
fn test_yaml_document() {
    let descriptor = QueryDescriptor::from_yaml_str(DOCUMENT).unwrap();
    let query = descriptor.select().unwrap();
    assert_eq!(
        query.sql,
        concat!(
            "SELECT `o`.`id`, COALESCE(`c`.`nickname`, `c`.`name`, ?) AS `customer` ",
            "FROM `orders` AS `o` LEFT JOIN `customers` AS `c` ON `c`.`id` = `o`.`customer_id` ",
            "WHERE (`o`.`status` IN (?, ?) OR `o`.`total` BETWEEN ? AND ?) ",
            "ORDER BY `o`.`id` DESC LIMIT ?"
        )
    );
    assert_eq!(
        query.params,
        vec![
            Value::from("unknown"),
            Value::from("paid"),
            Value::from("shipped"),
            Value::Integer(100),
            Value::Integer(500),
            Value::Integer(10),
        ]
    );
}

#[test]
fn test_yaml_round_trip() {
    let descriptor = QueryDescriptor::from_yaml_str(DOCUMENT).unwrap();
    let text = descriptor.to_yaml_string().unwrap();
    assert_eq!(QueryDescriptor::from_yaml_str(&text).unwrap(), descriptor);
}

#[test]
fn test_yaml_errors() {
    let err = QueryDescriptor::from_yaml_str("table: [unclosed").unwrap_err();
    assert!(matches!(err, DecodeError::Yaml(_)));

    let err = QueryDescriptor::from_yaml_str("table:\n  name: t\nwheres:\n  - fieldName: a\n")
        .unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), "wheres[0]");
}
