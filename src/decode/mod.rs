//! Reads untyped document trees into the typed model.
//!
//! JSON and YAML documents are first parsed into a `serde_json::Value`; the
//! functions here then walk that tree, picking each node's variant with the
//! discriminators in [`shape`] and decoding children recursively. Errors
//! carry the [`Path`] of the failing node.

mod path;
pub mod shape;

pub use path::Path;
pub use shape::{Shape, sniff_condition, sniff_expression};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};
use sqlshape_core::sqlshape_trace_decode;

use crate::error::DecodeError;
use crate::{
    BoolOp, BooleanOperator, Case, Coalesce, Condition, Dialect, Expression, Field, JoinType,
    Literal, LogicalOperator, Operand, QueryDescriptor, RangeOp, RangeOperator, Relation, Sort,
    SortDirection, Table, Value, WhenThen, WhereGroup,
};

type Object = Map<String, JsonValue>;
type DecodeResult<T> = Result<T, DecodeError>;

/// Decodes a condition node; anything but a comparison, range or group is
/// an [`DecodeError::UnknownShape`].
pub fn decode_condition(node: &JsonValue) -> DecodeResult<Condition> {
    condition_at(node, &Path::root())
}

/// Decodes a node in expression position.
///
/// Objects must match an expression or comparison shape. Arrays become
/// lists, `null` becomes [`Operand::Null`] and other scalars are bound
/// values.
pub fn decode_expression(node: &JsonValue) -> DecodeResult<Operand> {
    operand_at(node, &Path::root(), Fallback::Reject)
}

/// Decodes a node in value position.
///
/// Like [`decode_expression`], except that objects matching no shape are
/// kept as a JSON scalar instead of failing.
pub fn decode_value(node: &JsonValue) -> DecodeResult<Operand> {
    operand_at(node, &Path::root(), Fallback::Scalar)
}

/// Decodes a field object: `{name, tableAlias, fieldAlias, exp}`
pub fn decode_field(node: &JsonValue) -> DecodeResult<Field> {
    field_at(node, &Path::root())
}

/// Decodes a whole query document
pub fn decode_descriptor(node: &JsonValue) -> DecodeResult<QueryDescriptor> {
    descriptor_at(node, &Path::root())
}

/// What to do with an object that matches no expression shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    Reject,
    Scalar,
}

// ==================== primitives ====================

fn object_at<'n>(node: &'n JsonValue, path: &Path) -> DecodeResult<&'n Object> {
    node.as_object()
        .ok_or_else(|| DecodeError::invalid(path, "expected an object"))
}

/// Missing, `null` and `""` all read as absent
fn optional_string(map: &Object, key: &str, path: &Path) -> DecodeResult<Option<String>> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) if s.is_empty() => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::invalid(&path.key(key), "expected a string")),
    }
}

fn required_string(map: &Object, key: &str, path: &Path) -> DecodeResult<String> {
    match map.get(key) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        None | Some(JsonValue::Null) => Err(DecodeError::invalid(
            &path.key(key),
            "missing required string",
        )),
        Some(_) => Err(DecodeError::invalid(&path.key(key), "expected a string")),
    }
}

fn optional_array<'n>(map: &'n Object, key: &str, path: &Path) -> DecodeResult<&'n [JsonValue]> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Ok(&[]),
        Some(JsonValue::Array(items)) => Ok(items),
        Some(_) => Err(DecodeError::invalid(&path.key(key), "expected an array")),
    }
}

fn optional_u64(map: &Object, key: &str, path: &Path) -> DecodeResult<Option<u64>> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .filter(|n| i64::try_from(*n).is_ok())
            .map(Some)
            .ok_or_else(|| {
                DecodeError::invalid(&path.key(key), "expected a non-negative integer")
            }),
    }
}

/// Operator keys are read permissively: the string is mapped with the
/// enum's wire parser, which falls back to its default.
fn operator<T>(map: &Object, path: &Path, parse: fn(&str) -> T, default: T) -> DecodeResult<T> {
    Ok(optional_string(map, "op", path)?
        .as_deref()
        .map_or(default, parse))
}

fn each<T>(
    items: &[JsonValue],
    path: &Path,
    decode: impl Fn(&JsonValue, &Path) -> DecodeResult<T>,
) -> DecodeResult<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode(item, &path.index(i)))
        .collect()
}

// ==================== conditions ====================

fn condition_at(node: &JsonValue, path: &Path) -> DecodeResult<Condition> {
    let unknown = || DecodeError::UnknownShape {
        kind: "condition",
        path: path.clone(),
    };
    let map = node.as_object().ok_or_else(unknown)?;
    let shape = sniff_condition(map).ok_or_else(unknown)?;
    condition_shape(map, shape, path)
}

fn condition_shape(map: &Object, shape: Shape, path: &Path) -> DecodeResult<Condition> {
    sqlshape_trace_decode!(shape.as_str(), path);
    match shape {
        Shape::RangeOp => range_op(map, path).map(Condition::Range),
        Shape::WhereGroup => where_group(map, path).map(Condition::Group),
        _ => bool_op(map, path).map(Condition::Bool),
    }
}

fn bool_op(map: &Object, path: &Path) -> DecodeResult<BoolOp> {
    Ok(BoolOp {
        op: operator(map, path, BooleanOperator::from_wire, BooleanOperator::Eq)?,
        field_name: required_string(map, "fieldName", path)?,
        table_alias: optional_string(map, "tableAlias", path)?,
        value: optional_value(map, "value", path)?.unwrap_or_default(),
    })
}

fn range_op(map: &Object, path: &Path) -> DecodeResult<RangeOp> {
    Ok(RangeOp {
        op: operator(map, path, RangeOperator::from_wire, RangeOperator::Between)?,
        field_name: required_string(map, "fieldName", path)?,
        table_alias: optional_string(map, "tableAlias", path)?,
        start: optional_value(map, "start", path)?.unwrap_or_default(),
        end: optional_value(map, "end", path)?.unwrap_or_default(),
    })
}

fn where_group(map: &Object, path: &Path) -> DecodeResult<WhereGroup> {
    let conditions_path = path.key("conditions");
    Ok(WhereGroup {
        op: operator(map, path, LogicalOperator::from_wire, LogicalOperator::And)?,
        conditions: each(
            optional_array(map, "conditions", path)?,
            &conditions_path,
            condition_at,
        )?,
    })
}

// ==================== operands ====================

fn operand_at(node: &JsonValue, path: &Path, fallback: Fallback) -> DecodeResult<Operand> {
    match node {
        JsonValue::Null => Ok(Operand::Null),
        JsonValue::Array(items) => Ok(Operand::List(each(items, path, value_at)?)),
        JsonValue::Object(map) => match sniff_expression(map) {
            Some(shape) if shape.is_condition() => {
                condition_shape(map, shape, path).map(Operand::from)
            }
            Some(shape) => expression_shape(map, shape, path).map(Operand::from),
            None if fallback == Fallback::Scalar => Ok(Operand::Scalar(Value::Json(node.clone()))),
            None => Err(DecodeError::UnknownShape {
                kind: "expression",
                path: path.clone(),
            }),
        },
        scalar => Ok(Operand::Scalar(Value::from_json(scalar))),
    }
}

fn value_at(node: &JsonValue, path: &Path) -> DecodeResult<Operand> {
    operand_at(node, path, Fallback::Scalar)
}

/// A present key is decoded even when it holds `null`, so an explicit
/// `NULL` default survives a round trip.
fn optional_value(map: &Object, key: &str, path: &Path) -> DecodeResult<Option<Operand>> {
    map.get(key)
        .map(|node| value_at(node, &path.key(key)))
        .transpose()
}

fn expression_shape(map: &Object, shape: Shape, path: &Path) -> DecodeResult<Expression> {
    sqlshape_trace_decode!(shape.as_str(), path);
    match shape {
        Shape::Case => case(map, path).map(Expression::Case),
        Shape::Coalesce => coalesce(map, path).map(Expression::Coalesce),
        Shape::Literal => literal(map, path).map(Expression::Literal),
        _ => field_object(map, path).map(Expression::Field),
    }
}

fn case(map: &Object, path: &Path) -> DecodeResult<Case> {
    let arms_path = path.key("conditions");
    let arms = each(
        optional_array(map, "conditions", path)?,
        &arms_path,
        |node, path| {
            let arm = object_at(node, path)?;
            Ok(WhenThen {
                when: when_at(arm, path)?,
                then: optional_value(arm, "then", path)?.unwrap_or_default(),
            })
        },
    )?;
    let otherwise = match optional_value(map, "else", path)? {
        Some(operand) => Some(operand),
        None => optional_value(map, "otherwise", path)?,
    };
    Ok(Case {
        arms,
        otherwise: otherwise.map(Box::new),
    })
}

/// `when` is tried as a condition first, then as any value
fn when_at(arm: &Object, path: &Path) -> DecodeResult<Operand> {
    let path = path.key("when");
    match arm.get("when") {
        None => Ok(Operand::Null),
        Some(node) => {
            let condition = node
                .as_object()
                .and_then(|map| sniff_condition(map).map(|shape| (map, shape)));
            match condition {
                Some((map, shape)) => condition_shape(map, shape, &path).map(Operand::from),
                None => value_at(node, &path),
            }
        }
    }
}

fn coalesce(map: &Object, path: &Path) -> DecodeResult<Coalesce> {
    let fields_path = path.key("fields");
    Ok(Coalesce {
        fields: each(optional_array(map, "fields", path)?, &fields_path, field_at)?,
        default: optional_value(map, "defaultValue", path)?.map(Box::new),
    })
}

fn literal(map: &Object, path: &Path) -> DecodeResult<Literal> {
    let args_path = path.key("args");
    Ok(Literal {
        template: required_string(map, "value", path)?,
        args: each(optional_array(map, "args", path)?, &args_path, value_at)?,
    })
}

fn field_at(node: &JsonValue, path: &Path) -> DecodeResult<Field> {
    field_object(object_at(node, path)?, path)
}

fn field_object(map: &Object, path: &Path) -> DecodeResult<Field> {
    let inner = match map.get("exp") {
        None | Some(JsonValue::Null) => None,
        Some(node) => Some(Box::new(operand_at(
            node,
            &path.key("exp"),
            Fallback::Reject,
        )?)),
    };
    Ok(Field {
        name: optional_string(map, "name", path)?,
        table_alias: optional_string(map, "tableAlias", path)?,
        field_alias: optional_string(map, "fieldAlias", path)?,
        inner,
    })
}

// ==================== descriptor ====================

fn descriptor_at(node: &JsonValue, path: &Path) -> DecodeResult<QueryDescriptor> {
    let map = object_at(node, path)?;
    let dialect = match optional_string(map, "dialect", path)? {
        None => Dialect::default(),
        Some(name) => Dialect::parse(&name).ok_or_else(|| {
            DecodeError::invalid(&path.key("dialect"), format!("unknown dialect '{name}'"))
        })?,
    };
    let table = match map.get("table") {
        Some(table) => table_at(table, &path.key("table"))?,
        None => {
            return Err(DecodeError::invalid(
                &path.key("table"),
                "missing required table",
            ));
        }
    };
    Ok(QueryDescriptor {
        dialect,
        table,
        fields: each(
            optional_array(map, "fields", path)?,
            &path.key("fields"),
            field_at,
        )?,
        wheres: each(
            optional_array(map, "wheres", path)?,
            &path.key("wheres"),
            condition_at,
        )?,
        sorts: each(
            optional_array(map, "sorts", path)?,
            &path.key("sorts"),
            sort_at,
        )?,
        group_by: each(
            optional_array(map, "groupBy", path)?,
            &path.key("groupBy"),
            field_at,
        )?,
        limit: optional_u64(map, "limit", path)?,
        offset: optional_u64(map, "offset", path)?,
    })
}

fn table_at(node: &JsonValue, path: &Path) -> DecodeResult<Table> {
    let map = object_at(node, path)?;
    Ok(Table {
        name: required_string(map, "name", path)?,
        alias: optional_string(map, "alias", path)?,
        relations: each(
            optional_array(map, "relations", path)?,
            &path.key("relations"),
            relation_at,
        )?,
    })
}

fn relation_at(node: &JsonValue, path: &Path) -> DecodeResult<Relation> {
    let map = object_at(node, path)?;
    let table = match map.get("table") {
        Some(table) => table_at(table, &path.key("table"))?,
        None => {
            return Err(DecodeError::invalid(
                &path.key("table"),
                "missing required table",
            ));
        }
    };
    Ok(Relation {
        join_type: optional_string(map, "joinType", path)?
            .as_deref()
            .map_or(JoinType::Inner, JoinType::from_wire),
        table,
        on: each(optional_array(map, "on", path)?, &path.key("on"), condition_at)?,
    })
}

fn sort_at(node: &JsonValue, path: &Path) -> DecodeResult<Sort> {
    let map = object_at(node, path)?;
    Ok(Sort {
        name: required_string(map, "name", path)?,
        table_alias: optional_string(map, "tableAlias", path)?,
        direction: optional_string(map, "order", path)?
            .as_deref()
            .map_or(SortDirection::Asc, SortDirection::from_wire),
    })
}

// ==================== serde glue ====================

fn expression_only(node: &JsonValue) -> DecodeResult<Expression> {
    let unknown = || DecodeError::UnknownShape {
        kind: "expression",
        path: Path::root(),
    };
    let map = node.as_object().ok_or_else(unknown)?;
    match sniff_expression(map) {
        Some(shape) if !shape.is_condition() => expression_shape(map, shape, &Path::root()),
        _ => Err(unknown()),
    }
}

macro_rules! narrow {
    ($($name:ident: $decode:ident -> $outer:ident :: $variant:ident ($ty:ty), $kind:literal;)*) => {
        $(
            fn $name(node: &JsonValue) -> DecodeResult<$ty> {
                match $decode(node)? {
                    $outer::$variant(inner) => Ok(inner),
                    _ => Err(DecodeError::UnknownShape {
                        kind: $kind,
                        path: Path::root(),
                    }),
                }
            }
        )*
    };
}

narrow! {
    bool_op_only: decode_condition -> Condition::Bool(BoolOp), "comparison";
    range_op_only: decode_condition -> Condition::Range(RangeOp), "range";
    where_group_only: decode_condition -> Condition::Group(WhereGroup), "group";
    literal_only: expression_only -> Expression::Literal(Literal), "literal";
    case_only: expression_only -> Expression::Case(Case), "case";
    coalesce_only: expression_only -> Expression::Coalesce(Coalesce), "coalesce";
}

fn table_only(node: &JsonValue) -> DecodeResult<Table> {
    table_at(node, &Path::root())
}

fn sort_only(node: &JsonValue) -> DecodeResult<Sort> {
    sort_at(node, &Path::root())
}

macro_rules! deserialize_via_decoder {
    ($($ty:ty => $decode:path),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let node = JsonValue::deserialize(deserializer)?;
                    $decode(&node).map_err(D::Error::custom)
                }
            }
        )*
    };
}

deserialize_via_decoder!(
    Condition => decode_condition,
    BoolOp => bool_op_only,
    RangeOp => range_op_only,
    WhereGroup => where_group_only,
    Expression => expression_only,
    Literal => literal_only,
    Case => case_only,
    Coalesce => coalesce_only,
    Table => table_only,
    Sort => sort_only,
    Field => decode_field,
    Operand => decode_value,
    QueryDescriptor => decode_descriptor,
);
