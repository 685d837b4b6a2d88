use tagtree::{Compound, List, Value};

use crate::{from_str, to_string};

mod ser_tests;

fn small_tree() -> Value {
    let mut b = List::new();
    b.push("x").unwrap();
    b.push("y").unwrap();

    let mut root = Compound::new();
    root.insert("a", 5);
    root.insert("b", b);
    Value::Compound(root)
}

#[test]
fn small_tree_text() {
    let text = to_string(&small_tree()).unwrap();
    assert_eq!(r#"{a:5,b:["x","y"]}"#, text);
    assert_eq!(small_tree(), from_str(&text).unwrap());
}

#[test]
fn test_mixed() {
    let mut inner = Compound::new();
    inner.insert("name", "Cool \"name\"");
    inner.insert("ints", tagtree::IntArray::new(vec![-1, 3, 2000]));
    inner.insert("f", -5.0e-40f64);
    inner.insert("half", 0.5f32);
    inner.insert(
        "collection",
        List::from_values(vec![true.into(), false.into(), true.into()]).unwrap(),
    );
    inner.insert("with space", 1i64);
    let data = Value::Compound(inner);

    let serialized = to_string(&data).unwrap();
    assert_eq!(
        r#"{name:"Cool \"name\"",ints:[I;-1,3,2000],f:-5e-40d,half:0.5f,collection:[1b,0b,1b],"with space":1l}"#,
        serialized
    );

    let deserialized = from_str(&serialized).unwrap();
    assert_eq!(deserialized, data);
}

#[test]
fn binary_and_text_agree() {
    let mut root = Compound::new();
    root.insert("byte", 1i8);
    root.insert("short", 2i16);
    root.insert("int", 3i32);
    root.insert("long", 4i64);
    root.insert("float", 0.1f32);
    root.insert("double", 0.1f64);
    root.insert("bytes", tagtree::ByteArray::new(vec![1, -1]));
    root.insert("longs", tagtree::LongArray::new(vec![i64::MIN, i64::MAX]));
    root.insert("nested", small_tree());
    let root = Value::Compound(root);

    let bytes = tagtree::to_bytes(&root).unwrap();
    let from_binary = tagtree::from_bytes(&bytes).unwrap();
    let text = to_string(&from_binary).unwrap();
    let from_text = from_str(&text).unwrap();

    assert_eq!(root, from_text);
    assert_eq!(bytes, tagtree::to_bytes(&from_text).unwrap());
}
