use tagtree::{Compound, List, Value};

use crate::{BlockPos, MemoryHost};

mod transfer;

/// `{a:5,b:["x","y"]}`
fn small_tree() -> Value {
    let mut b = List::new();
    b.push("x").unwrap();
    b.push("y").unwrap();

    let mut root = Compound::new();
    root.insert("a", 5);
    root.insert("b", b);
    Value::Compound(root)
}

fn compound(entries: &[(&str, Value)]) -> Compound {
    entries.iter().cloned().collect()
}

fn world() -> MemoryHost {
    MemoryHost::new()
        .with_entity("zombie", compound(&[("Health", Value::Float(20.0))]))
        .with_entity("creeper", compound(&[("Fuse", Value::Short(30))]))
        .with_player("Steve", compound(&[("XpLevel", Value::Int(7))]))
        .with_slot(compound(&[("id", "minecraft:stone".into()), ("Count", Value::Byte(3))]))
        .with_slot(Compound::new())
        .with_block(BlockPos::new(0, 64, 0), compound(&[("name", "minecraft:chest".into())]))
        .with_block_entity(
            BlockPos::new(0, 64, 0),
            compound(&[("Items", List::new().into())]),
        )
}
