use log::debug;
use tagtree::{Compound, List, Tag, Value};

use super::{BlockPos, Host, LiveHandle, LiveKind, LiveTarget, Rejection};
use crate::error::{Error, Result};

/// A host backed by an in-memory world: named entities and players, one
/// player inventory, and blocks and block entities by position.
///
/// A world can be loaded from and saved to a snapshot tree of the form
///
/// ```text
/// {
///     entities: {<name>: {..}, ..},
///     players: {<name>: {..}, ..},
///     inventory: [{..}, ..],
///     blocks: {"x,y,z": {..}, ..},
///     block_entities: {"x,y,z": {..}, ..}
/// }
/// ```
///
/// where every section is optional. Selectors are resolved simply: `@e`
/// picks the first entity, `@a`, `@p` and `@s` the first player, and
/// anything not starting with `@` is an exact name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryHost {
    entities: Vec<(String, Compound)>,
    players: Vec<(String, Compound)>,
    inventory: Vec<Compound>,
    blocks: Vec<(BlockPos, Compound)>,
    block_entities: Vec<(BlockPos, Compound)>,
    refreshes: usize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, name: impl Into<String>, data: Compound) -> Self {
        upsert(&mut self.entities, name.into(), data);
        self
    }

    pub fn with_player(mut self, name: impl Into<String>, data: Compound) -> Self {
        upsert(&mut self.players, name.into(), data);
        self
    }

    /// Adds the next inventory slot.
    pub fn with_slot(mut self, data: Compound) -> Self {
        self.inventory.push(data);
        self
    }

    pub fn with_block(mut self, pos: BlockPos, data: Compound) -> Self {
        upsert(&mut self.blocks, pos, data);
        self
    }

    pub fn with_block_entity(mut self, pos: BlockPos, data: Compound) -> Self {
        upsert(&mut self.block_entities, pos, data);
        self
    }

    pub fn entity(&self, name: &str) -> Option<&Compound> {
        lookup(&self.entities, name)
    }

    pub fn player(&self, name: &str) -> Option<&Compound> {
        lookup(&self.players, name)
    }

    pub fn slot(&self, slot: usize) -> Option<&Compound> {
        self.inventory.get(slot)
    }

    pub fn block(&self, pos: BlockPos) -> Option<&Compound> {
        lookup(&self.blocks, &pos)
    }

    pub fn block_entity(&self, pos: BlockPos) -> Option<&Compound> {
        lookup(&self.block_entities, &pos)
    }

    /// How many times [`Host::refresh_live_views`] has been called.
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    /// Load a world from a snapshot tree.
    pub fn from_snapshot(snapshot: &Value) -> Result<Self> {
        let root = snapshot
            .as_compound()
            .ok_or_else(|| Error::Snapshot(format!("root is {}, not Compound", snapshot.tag())))?;

        let inventory = match root.get("inventory") {
            None => Vec::new(),
            Some(Value::List(slots)) => slots
                .iter()
                .map(|slot| expect_compound("inventory", slot))
                .collect::<Result<_>>()?,
            Some(other) => {
                return Err(Error::Snapshot(format!(
                    "inventory is {}, not List",
                    other.tag()
                )))
            }
        };

        Ok(Self {
            entities: section(root, "entities", |name| Ok(name.to_owned()))?,
            players: section(root, "players", |name| Ok(name.to_owned()))?,
            inventory,
            blocks: section(root, "blocks", parse_pos)?,
            block_entities: section(root, "block_entities", parse_pos)?,
            refreshes: 0,
        })
    }

    /// Write the world out as a snapshot tree that [`MemoryHost::from_snapshot`]
    /// reads back.
    pub fn to_snapshot(&self) -> Result<Value> {
        let mut inventory = List::with_tag(Tag::Compound);
        for slot in &self.inventory {
            inventory.push(slot.clone())?;
        }

        let mut root = Compound::new();
        root.insert("entities", named(&self.entities));
        root.insert("players", named(&self.players));
        root.insert("inventory", inventory);
        root.insert("blocks", named(&self.blocks));
        root.insert("block_entities", named(&self.block_entities));
        Ok(Value::Compound(root))
    }

    fn object_mut(&mut self, handle: &LiveHandle) -> Option<&mut Compound> {
        let id = usize::try_from(handle.id).ok()?;
        match handle.kind {
            LiveKind::Entity => self.entities.get_mut(id).map(|(_, c)| c),
            LiveKind::Player => self.players.get_mut(id).map(|(_, c)| c),
            LiveKind::ItemSlot => self.inventory.get_mut(id),
            LiveKind::Block => self.blocks.get_mut(id).map(|(_, c)| c),
            LiveKind::BlockEntity => self.block_entities.get_mut(id).map(|(_, c)| c),
        }
    }

    fn object(&self, handle: &LiveHandle) -> Option<&Compound> {
        let id = usize::try_from(handle.id).ok()?;
        match handle.kind {
            LiveKind::Entity => self.entities.get(id).map(|(_, c)| c),
            LiveKind::Player => self.players.get(id).map(|(_, c)| c),
            LiveKind::ItemSlot => self.inventory.get(id),
            LiveKind::Block => self.blocks.get(id).map(|(_, c)| c),
            LiveKind::BlockEntity => self.block_entities.get(id).map(|(_, c)| c),
        }
    }
}

impl Host for MemoryHost {
    fn resolve(&self, target: &LiveTarget) -> Option<LiveHandle> {
        let (kind, index) = match target {
            LiveTarget::Entity(selector) => {
                (LiveKind::Entity, select(&self.entities, selector, &["@e"]))
            }
            LiveTarget::Player(selector) => (
                LiveKind::Player,
                select(&self.players, selector, &["@a", "@p", "@s"]),
            ),
            LiveTarget::Block(pos) => (LiveKind::Block, position(&self.blocks, pos)),
            LiveTarget::BlockEntity(pos) => {
                (LiveKind::BlockEntity, position(&self.block_entities, pos))
            }
            LiveTarget::Slot(slot) => (
                LiveKind::ItemSlot,
                usize::try_from(*slot)
                    .ok()
                    .filter(|slot| *slot < self.inventory.len()),
            ),
        };

        let handle = index.map(|i| LiveHandle::new(kind, i as u64));
        debug!("resolved {} to {:?}", target, handle);
        handle
    }

    fn serialize(&self, handle: &LiveHandle) -> Option<Value> {
        self.object(handle).cloned().map(Value::Compound)
    }

    fn deserialize(&mut self, handle: &LiveHandle, value: &Value) -> std::result::Result<(), Rejection> {
        let data = value.as_compound().ok_or_else(|| {
            Rejection::new(format!("a {} needs a Compound, not {}", handle.kind, value.tag()))
        })?;
        let object = self
            .object_mut(handle)
            .ok_or_else(|| Rejection::new(format!("the {} no longer exists", handle.kind)))?;

        *object = data.clone();
        Ok(())
    }

    fn refresh_live_views(&mut self) {
        self.refreshes += 1;
    }
}

fn upsert<K: PartialEq>(objects: &mut Vec<(K, Compound)>, key: K, data: Compound) {
    match objects.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => *existing = data,
        None => objects.push((key, data)),
    }
}

fn lookup<'a, K: PartialEq<Q>, Q: ?Sized>(objects: &'a [(K, Compound)], key: &Q) -> Option<&'a Compound> {
    objects.iter().find(|(k, _)| k == key).map(|(_, c)| c)
}

fn position<K: PartialEq>(objects: &[(K, Compound)], key: &K) -> Option<usize> {
    objects.iter().position(|(k, _)| k == key)
}

fn select(objects: &[(String, Compound)], selector: &str, first: &[&str]) -> Option<usize> {
    if first.contains(&selector) {
        return if objects.is_empty() { None } else { Some(0) };
    }
    if selector.starts_with('@') {
        debug!("unsupported selector {}", selector);
        return None;
    }
    objects.iter().position(|(name, _)| name == selector)
}

fn parse_pos(key: &str) -> Result<BlockPos> {
    key.parse()
        .map_err(|e| Error::Snapshot(format!("bad block position {:?}: {}", key, e)))
}

fn expect_compound(section: &str, value: &Value) -> Result<Compound> {
    value.as_compound().cloned().ok_or_else(|| {
        Error::Snapshot(format!("{} holds a {}, not a Compound", section, value.tag()))
    })
}

fn section<K>(
    root: &Compound,
    key: &str,
    parse_key: impl Fn(&str) -> Result<K>,
) -> Result<Vec<(K, Compound)>> {
    match root.get(key) {
        None => Ok(Vec::new()),
        Some(Value::Compound(objects)) => objects
            .iter()
            .map(|(name, value)| Ok((parse_key(name)?, expect_compound(key, value)?)))
            .collect(),
        Some(other) => Err(Error::Snapshot(format!(
            "{} is {}, not Compound",
            key,
            other.tag()
        ))),
    }
}

fn named<K: ToString>(objects: &[(K, Compound)]) -> Compound {
    objects
        .iter()
        .map(|(k, c)| (k.to_string(), c.clone()))
        .collect()
}
