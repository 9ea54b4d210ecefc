//! Integration tests across the document-tree modules: `Node`, `Object`,
//! `Array`, and `Scalar` working together, plus the error model and the
//! construction macros.

use luco::error::ErrorKind;
use luco::{luco_array, luco_object, Node};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, HashMap};

#[test]
fn heterogeneous_list_construction_preserves_order_and_kinds() {
    let arr = luco_array![1.3223, 2, "string", true, ()];
    let items = arr.as_array();
    assert_eq!(items.len(), 5);
    assert!(items.get(0).unwrap().is_double());
    assert!(items.get(1).unwrap().is_integer());
    assert!(items.get(2).unwrap().is_string());
    assert!(items.get(3).unwrap().is_boolean());
    assert!(items.get(4).unwrap().is_null());
}

#[test]
fn object_macro_builds_a_nested_tree() {
    let doc = luco_object! {
        "name" => "cat",
        "stats" => luco_object!{ "age" => 5, "weight" => 4.2 },
    };
    assert_eq!(doc.at("name").as_str(), "cat");
    assert_eq!(doc.at("stats").at("age").as_i64(), 5);
    assert_eq!(doc.at("stats").at("weight").as_f64(), 4.2);
}

#[test]
fn insert_then_index_into_array_then_reassign() {
    let mut n = Node::default();
    n.insert("k", vec![1i64, 2, 3]).unwrap();
    assert_eq!(n["k"][1].as_i64(), 2);
    n["k"] = Node::from(false);
    assert!(n.at("k").is_boolean());
}

#[test]
fn foreign_map_ingestion_builds_an_object() {
    let mut map: HashMap<String, i64> = HashMap::new();
    map.insert("a".to_string(), 1);
    map.insert("b".to_string(), 2);
    let node = Node::from(map);
    assert!(node.is_object());
    assert_eq!(node.at("a").as_i64() + node.at("b").as_i64(), 3);

    let mut btree: BTreeMap<String, &str> = BTreeMap::new();
    btree.insert("x".to_string(), "y");
    let node = Node::from(btree);
    assert_eq!(node.at("x").as_str(), "y");
}

#[test]
fn wrong_type_errors_carry_the_right_kind() {
    let n = Node::from("hi");
    let err = n.try_as_i64().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongType);

    let arr = Node::from(Vec::<i64>::new());
    let err = arr.try_at_index(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongIndex);

    let obj = Node::default();
    let err = obj.try_at("missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
}

#[test]
fn parse_error_kind_is_reported_as_parsing() {
    let err = Node::parse("{invalid}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parsing);
}

#[test]
fn luco_and_json_serialization_agree_on_shape() {
    let doc = luco_object! {
        "name" => "cat",
        "age" => 5,
        "tags" => luco_array!["a", "b"],
    };
    let luco_text = doc.to_luco_string(&Default::default());
    let json_text = doc.to_json_string(&Default::default());

    let reparsed = Node::parse(&luco_text).unwrap();
    assert_eq!(reparsed, doc);

    let json_value: serde_json::Value = serde_json::from_str(&json_text).unwrap();
    assert_eq!(json_value["name"], "cat");
    assert_eq!(json_value["age"], 5);
    assert_eq!(json_value["tags"][0], "a");
}

#[test]
fn plus_merges_objects_right_side_wins_on_conflict() {
    let a = luco_object! { "x" => 1, "y" => 1 };
    let b = luco_object! { "y" => 2, "z" => 3 };
    let merged = a + b;
    assert_eq!(merged.at("x").as_i64(), 1);
    assert_eq!(merged.at("y").as_i64(), 2);
    assert_eq!(merged.at("z").as_i64(), 3);
}

#[test]
fn plus_assign_appends_to_array_and_object() {
    let mut arr = luco_array![1, 2];
    arr += vec![Node::from(3i64)];
    assert_eq!(arr.as_array().len(), 3);
    assert_eq!(arr.at_index(2).as_i64(), 3);

    let mut obj = luco_object! { "a" => 1 };
    obj += vec![("b".to_string(), Node::from(2i64))];
    assert_eq!(obj.at("b").as_i64(), 2);
}
