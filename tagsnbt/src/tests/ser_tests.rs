use tagtree::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value, MAX_DEPTH};

use crate::{from_str, to_string, to_writer};

fn text(v: impl Into<Value>) -> String {
    to_string(&v.into()).unwrap()
}

#[test]
fn test_num() {
    assert_eq!("-3b", text(-3i8));
    assert_eq!("7s", text(7i16));
    assert_eq!("42", text(42i32));
    assert_eq!("9l", text(9i64));
    assert_eq!("-9223372036854775808l", text(i64::MIN));
}

#[test]
fn test_float() {
    assert_eq!("1.5f", text(1.5f32));
    assert_eq!("2.0d", text(2.0f64));
    assert_eq!("inff", text(f32::INFINITY));
    assert_eq!("-infd", text(f64::NEG_INFINITY));
}

#[test]
fn test_str() {
    assert_eq!("\"simple\"", text("simple"));
    assert_eq!("\"1\"", text("1"));
    assert_eq!("\"true\"", text("true"));
    assert_eq!("\"\"", text(""));
    assert_eq!(r#""a\"b\\c""#, text("a\"b\\c"));
    assert_eq!("\"snow ☃\"", text("snow ☃"));
}

#[test]
fn test_arrays() {
    assert_eq!("[B;1b,-2b]", text(ByteArray::new(vec![1, -2])));
    assert_eq!("[I;1,2]", text(IntArray::new(vec![1, 2])));
    assert_eq!("[L;3l]", text(LongArray::new(vec![3])));
    assert_eq!("[I;]", text(IntArray::new(vec![])));
}

#[test]
fn test_list() {
    assert_eq!("[]", text(List::new()));
    assert_eq!("[]", text(List::with_tag(Tag::Compound)));

    let list = List::from_values(vec![Value::Short(1), Value::Short(2)]).unwrap();
    assert_eq!("[1s,2s]", text(list));
}

#[test]
fn test_compound_keys() {
    let mut c = Compound::new();
    c.insert("plain_Key-1.0+", 1);
    c.insert("with space", 2);
    c.insert("", 3);
    c.insert("minecraft:id", 4);
    c.insert("quo\"te", 5);

    assert_eq!(
        r#"{plain_Key-1.0+:1,"with space":2,"":3,"minecraft:id":4,"quo\"te":5}"#,
        text(c.clone())
    );
    assert_eq!(Value::Compound(c.clone()), from_str(&text(c)).unwrap());
}

#[test]
fn empty_compound() {
    assert_eq!("{}", text(Compound::new()));
}

#[test]
fn writer_matches_string() {
    let v = super::small_tree();
    let mut out = Vec::new();
    to_writer(&mut out, &v).unwrap();
    assert_eq!(to_string(&v).unwrap().as_bytes(), out.as_slice());
}

#[test]
fn every_kind_round_trips() {
    let mut root = Compound::new();
    root.insert("b", i8::MIN);
    root.insert("s", i16::MAX);
    root.insert("i", i32::MIN);
    root.insert("l", i64::MAX);
    root.insert("f", f32::MIN_POSITIVE);
    root.insert("d", std::f64::consts::PI);
    root.insert("str", "'mixed' \"quotes\"");
    root.insert("ba", ByteArray::new(vec![i8::MIN, 0, i8::MAX]));
    root.insert("ia", IntArray::new(vec![i32::MIN, i32::MAX]));
    root.insert("la", LongArray::new(vec![i64::MIN]));
    let strings = super::small_tree().as_compound().unwrap()["b"].clone();
    root.insert(
        "lists",
        List::from_values(vec![List::new().into(), strings]).unwrap(),
    );
    let root = Value::Compound(root);

    let written = to_string(&root).unwrap();
    assert_eq!(root, from_str(&written).unwrap());
    assert_eq!(written, to_string(&from_str(&written).unwrap()).unwrap());
}

fn nested_lists(depth: usize) -> Value {
    let mut v = Value::List(List::new());
    for _ in 1..depth {
        let mut list = List::new();
        list.push(v).unwrap();
        v = Value::List(list);
    }
    v
}

#[test]
fn depth_limit() {
    let ok = nested_lists(MAX_DEPTH);
    let text = to_string(&ok).unwrap();
    assert_eq!(ok, from_str(&text).unwrap());

    assert!(to_string(&nested_lists(MAX_DEPTH + 1)).is_err());
}
