use crate::{Compound, IntArray, List, Tag, Value};

use super::small_tree;

#[test]
fn compound_insert_replaces() {
    let mut c = Compound::new();
    assert_eq!(c.insert("a", 1), None);
    assert_eq!(c.insert("b", 2), None);
    assert_eq!(c.insert("a", "later"), Some(Value::Int(1)));

    assert_eq!(c.len(), 2);
    assert_eq!(c["a"], "later");

    // Replacing keeps the original position.
    let keys: Vec<_> = c.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn compound_equality_ignores_order() {
    let a: Compound = vec![("x", 1), ("y", 2)].into_iter().collect();
    let b: Compound = vec![("y", 2), ("x", 1)].into_iter().collect();
    assert_eq!(a, b);
}

#[test]
fn compound_remove_keeps_order() {
    let mut c: Compound = vec![("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
    assert_eq!(c.remove("y"), Some(Value::Int(2)));
    let keys: Vec<_> = c.keys().map(String::as_str).collect();
    assert_eq!(keys, ["x", "z"]);
}

#[test]
fn list_adopts_first_tag() {
    let mut list = List::new();
    assert_eq!(list.element_tag(), Tag::End);
    list.push(1.5f32).unwrap();
    assert_eq!(list.element_tag(), Tag::Float);
}

#[test]
fn list_rejects_mismatch_without_mutating() {
    let mut list = List::new();
    list.push("a").unwrap();
    let before = list.clone();

    assert!(list.push(1).is_err());
    assert_eq!(list, before);
    assert_eq!(list.len(), 1);
    assert_eq!(list.element_tag(), Tag::String);
}

#[test]
fn typed_list_rejects_mismatch_when_empty() {
    let mut list = List::with_tag(Tag::Int);
    assert!(list.push(1i64).is_err());
    assert!(list.is_empty());
    list.push(1).unwrap();
}

#[test]
fn list_from_values() {
    assert!(List::from_values(vec![Value::Int(1), Value::Byte(2)]).is_err());

    let list = List::from_values(vec![Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(list.element_tag(), Tag::Int);
    assert_eq!(list.len(), 2);

    assert_eq!(List::from_values(vec![]).unwrap().element_tag(), Tag::End);
}

#[test]
fn list_pop_keeps_tag() {
    let mut list = List::from_values(vec![Value::Int(1)]).unwrap();
    assert_eq!(list.pop(), Some(Value::Int(1)));
    assert_eq!(list.element_tag(), Tag::Int);
    assert!(list.push("s").is_err());
}

#[test]
fn empty_lists_compare_equal_regardless_of_tag() {
    assert_eq!(List::new(), List::with_tag(Tag::Compound));
    assert_ne!(
        List::from_values(vec![Value::Int(1)]).unwrap(),
        List::from_values(vec![Value::Long(1)]).unwrap()
    );
}

#[test]
fn clone_is_deep() {
    let original = small_tree();
    let mut copy = original.clone();

    let c = copy.as_compound_mut().unwrap();
    c.insert("a", 6);
    c.insert("b", List::new());

    assert_eq!(original.as_compound().unwrap()["a"], 5);
    assert_eq!(original.as_compound().unwrap()["b"].as_list().unwrap().len(), 2);
    assert_ne!(original, copy);
}

#[test]
fn value_tags() {
    assert_eq!(Value::from(true).tag(), Tag::Byte);
    assert_eq!(Value::from(1u16).tag(), Tag::Short);
    assert_eq!(Value::from(IntArray::new(vec![])).tag(), Tag::IntArray);
    assert_eq!(small_tree().tag(), Tag::Compound);
}

#[test]
fn serialize_to_json() {
    let json = serde_json::to_string(&small_tree()).unwrap();
    assert_eq!(json, r#"{"a":5,"b":["x","y"]}"#);
}
