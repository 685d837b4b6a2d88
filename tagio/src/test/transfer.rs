use std::fs;

use tagtree::Value;

use super::{small_tree, world};
use crate::{
    Descriptor, Error, MemoryHost, NoHost, Outcome, Transfer, TransferError, TransferOpts,
};

fn d(s: &str) -> Descriptor {
    s.parse().unwrap()
}

fn run(from: &str, to: Option<&str>, host: &mut MemoryHost) -> Result<Outcome, TransferError> {
    Transfer::new(d(from), to.map(d)).run(host)
}

#[test]
fn binary_file_to_snbt_file() {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("tree.dat");
    let snbt = dir.path().join("tree.snbt");
    fs::write(&bin, tagtree::to_bytes(&small_tree()).unwrap()).unwrap();

    let from = format!("bin:{}", bin.display());
    let to = format!("snbt:{}", snbt.display());
    let outcome = Transfer::new(d(&from), Some(d(&to))).run(&mut NoHost).unwrap();

    assert_eq!(Outcome::Written, outcome);
    let text = fs::read_to_string(&snbt).unwrap();
    assert_eq!(small_tree(), tagsnbt::from_str(&text).unwrap());
    assert_eq!(
        tagtree::from_bytes(&fs::read(&bin).unwrap()).unwrap(),
        tagsnbt::from_str(&text).unwrap()
    );
}

#[test]
fn snbt_file_to_gzip_file() {
    let dir = tempfile::tempdir().unwrap();
    let snbt = dir.path().join("tree.snbt");
    let gz = dir.path().join("tree.dat");
    fs::write(&snbt, "{a:5,b:[\"x\",\"y\"]}").unwrap();

    let from = format!("snbt:{}", snbt.display());
    let to = format!("gz:{}", gz.display());
    Transfer::new(d(&from), Some(d(&to))).run(&mut NoHost).unwrap();

    let back = format!("bin:{}", gz.display());
    assert_eq!(
        Outcome::Rendered("{a:5,b:[\"x\",\"y\"]}".into()),
        Transfer::new(d(&back), None).run(&mut NoHost).unwrap()
    );
}

#[test]
fn no_destination_renders_source() {
    let mut host = world();
    let before = host.clone();

    let outcome = run("player:@p", None, &mut host).unwrap();
    assert_eq!(Outcome::Rendered("{XpLevel:7}".into()), outcome);
    assert_eq!(before, host);
}

#[test]
fn rendering_matches_text_encoding() {
    let text = tagsnbt::to_string(&small_tree()).unwrap();
    let outcome = Transfer::new(d(&format!("text:{}", text)), None)
        .run(&mut NoHost)
        .unwrap();
    assert_eq!(Outcome::Rendered(text), outcome);
}

#[test]
fn unresolved_destination_renders_source() {
    let mut host = world();
    let before = host.clone();

    let outcome = run("slot:0", Some("entity:skeleton"), &mut host).unwrap();
    assert_eq!(
        Outcome::Rendered("{id:\"minecraft:stone\",Count:3b}".into()),
        outcome
    );
    assert_eq!(before, host);
    assert_eq!(0, host.refresh_count());
}

#[test]
fn text_destination_renders_source() {
    let mut host = world();
    let outcome = run("entity:creeper", Some("text:{}"), &mut host).unwrap();
    assert_eq!(Outcome::Rendered("{Fuse:30s}".into()), outcome);
}

#[test]
fn strict_destination_fails() {
    let mut host = world();
    let before = host.clone();

    let err = Transfer::new(d("entity:@e"), Some(d("entity:skeleton")))
        .with_opts(TransferOpts {
            strict_destination: true,
        })
        .run(&mut host)
        .unwrap_err();

    assert_eq!("unknown error", err.to_string());
    assert!(matches!(err, TransferError::Failed(Error::Resolution(_))));
    assert_eq!(before, host);
}

#[test]
fn missing_source_is_no_input() {
    let mut host = world();
    for from in ["entity:skeleton", "player:@r", "slot:40", "block:9,9,9", "bin:/no/such/file"] {
        let err = run(from, Some("player:@p"), &mut host).unwrap_err();
        assert!(matches!(err, TransferError::NoInput), "{}", from);
        assert_eq!("no input", err.to_string());
    }
    assert_eq!(0, host.refresh_count());
}

#[test]
fn live_to_live() {
    let mut host = world();
    run("entity:zombie", Some("entity:creeper"), &mut host).unwrap();

    assert_eq!(host.entity("zombie"), host.entity("creeper"));
    assert_eq!(1, host.refresh_count());
}

#[test]
fn refresh_happens_once_and_only_for_live_destinations() {
    let dir = tempfile::tempdir().unwrap();
    let out = format!("snbt:{}", dir.path().join("slot.snbt").display());

    let mut host = world();
    run("slot:0", Some(out.as_str()), &mut host).unwrap();
    assert_eq!(0, host.refresh_count());

    run(&out, Some("slot:1"), &mut host).unwrap();
    assert_eq!(1, host.refresh_count());
    assert_eq!(host.slot(0), host.slot(1));
}

#[test]
fn text_into_block_entity() {
    let mut host = world();
    run(
        "text:{Items:[{Slot:0b,id:\"minecraft:apple\"}]}",
        Some("block-entity:0,64,0"),
        &mut host,
    )
    .unwrap();

    let chest = host.block_entity(crate::BlockPos::new(0, 64, 0)).unwrap();
    assert_eq!(chest["Items"].as_list().unwrap().len(), 1);
}

#[test]
fn host_rejection_is_failure() {
    let mut host = world();
    let err = run("text:5", Some("player:Steve"), &mut host).unwrap_err();

    assert_eq!("unknown error", err.to_string());
    assert!(matches!(err, TransferError::Failed(Error::HostRejection(_))));
    assert_eq!(Some(&super::compound(&[("XpLevel", Value::Int(7))])), host.player("Steve"));
}

#[test]
fn malformed_source_is_failure() {
    let mut host = world();
    let err = run("text:{a:", Some("player:Steve"), &mut host).unwrap_err();
    assert!(matches!(err, TransferError::Failed(Error::Text(_))));
    assert_eq!(0, host.refresh_count());

    let err = Transfer::new(d("text:[1,\"a\"]"), None)
        .run(&mut NoHost)
        .unwrap_err();
    assert!(matches!(err, TransferError::Failed(_)));
}

#[test]
fn failure_keeps_its_cause() {
    let err = Transfer::new(d("text:{a:"), None).run(&mut NoHost).unwrap_err();
    let cause = std::error::Error::source(&err).unwrap();
    assert!(cause.to_string().starts_with("malformed snbt"), "{}", cause);
}
