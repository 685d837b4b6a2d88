use crate::{
    from_bytes, from_bytes_named, to_bytes, to_bytes_named, to_writer, ByteArray, Compound,
    IntArray, List, LongArray, Tag, Value,
};

use super::{builder::Builder, small_tree};

#[test]
fn small_tree_layout() {
    let bytes = to_bytes(&small_tree()).unwrap();
    let expected = Builder::new()
        .start_compound("")
        .int("a", 5)
        .start_list("b", Tag::String, 2)
        .string_payload("x")
        .string_payload("y")
        .end_compound()
        .build();

    assert_eq!(bytes, expected);
}

#[test]
fn small_tree_round_trip() {
    let tree = small_tree();
    let bytes = to_bytes(&tree).unwrap();
    assert_eq!(from_bytes(&bytes).unwrap(), tree);
}

#[test]
fn encoding_is_deterministic() {
    let tree = small_tree();
    assert_eq!(to_bytes(&tree).unwrap(), to_bytes(&tree).unwrap());
}

#[test]
fn every_kind_round_trips() {
    let mut inner = Compound::new();
    inner.insert("deep", "value");

    let mut lists = List::new();
    lists.push(List::with_tag(Tag::Short)).unwrap();
    lists
        .push(List::from_values(vec![Value::Long(1), Value::Long(2)]).unwrap())
        .unwrap();

    let mut root = Compound::new();
    root.insert("byte", 1i8);
    root.insert("short", -2i16);
    root.insert("int", 3);
    root.insert("long", 4i64);
    root.insert("float", 5.5f32);
    root.insert("double", -6.25f64);
    root.insert("bytes", ByteArray::new(vec![-1, 0, 1]));
    root.insert("string", "quote \" and \\ backslash");
    root.insert("lists", lists);
    root.insert("compound", inner);
    root.insert("ints", IntArray::new(vec![i32::MIN, i32::MAX]));
    root.insert("longs", LongArray::new(vec![i64::MIN]));
    root.insert("empty", List::new());
    let root = Value::Compound(root);

    let bytes = to_bytes(&root).unwrap();
    assert_eq!(from_bytes(&bytes).unwrap(), root);
}

#[test]
fn typed_empty_list_keeps_tag_in_binary() {
    let mut root = Compound::new();
    root.insert("l", List::with_tag(Tag::Compound));
    let bytes = to_bytes(&Value::Compound(root)).unwrap();

    let expected = Builder::new()
        .start_compound("")
        .start_list("l", Tag::Compound, 0)
        .end_compound()
        .build();
    assert_eq!(bytes, expected);
}

#[test]
fn named_root() {
    let bytes = to_bytes_named("Data", &small_tree()).unwrap();
    let (name, value) = from_bytes_named(&bytes).unwrap();
    assert_eq!(name, "Data");
    assert_eq!(value, small_tree());
}

#[test]
fn writer_matches_bytes() {
    let mut buf = vec![];
    to_writer(&mut buf, &small_tree()).unwrap();
    assert_eq!(buf, to_bytes(&small_tree()).unwrap());
}

#[test]
fn string_too_long() {
    let long = "a".repeat(u16::MAX as usize + 1);
    assert!(to_bytes(&Value::String(long)).is_err());

    let mut c = Compound::new();
    c.insert("a".repeat(70_000), 1);
    assert!(to_bytes(&Value::Compound(c)).is_err());
}

#[test]
fn max_length_string_is_fine() {
    let s = "a".repeat(u16::MAX as usize);
    let bytes = to_bytes(&Value::String(s.clone())).unwrap();
    assert_eq!(from_bytes(&bytes).unwrap(), Value::String(s));
}
