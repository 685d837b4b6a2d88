//! The boundary to whatever owns live objects: entities, players, inventory
//! slots and blocks.
//!
//! The endpoints in this crate never look inside a live object. They hand a
//! [`LiveHandle`] to the [`Host`] and get a tree back, or hand it a tree to
//! apply.

use std::{fmt, str::FromStr};

use tagtree::Value;
use thiserror::Error;

mod memory;

pub use memory::MemoryHost;

/// The kinds of live object a host can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiveKind {
    Entity,
    Player,
    ItemSlot,
    Block,
    BlockEntity,
}

impl fmt::Display for LiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiveKind::Entity => "entity",
            LiveKind::Player => "player",
            LiveKind::ItemSlot => "item slot",
            LiveKind::Block => "block",
            LiveKind::BlockEntity => "block entity",
        })
    }
}

/// An opaque reference to a live object, handed out by [`Host::resolve`].
/// Only the host that issued it knows what `id` means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiveHandle {
    pub kind: LiveKind,
    pub id: u64,
}

impl LiveHandle {
    pub fn new(kind: LiveKind, id: u64) -> Self {
        Self { kind, id }
    }
}

/// A block position in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for BlockPos {
    type Err = String;

    /// Parses `x,y,z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|c| c.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("bad coordinate: {}", e))?;

        match coords.as_slice() {
            &[x, y, z] => Ok(BlockPos::new(x, y, z)),
            _ => Err(format!("expected 3 coordinates, found {}", coords.len())),
        }
    }
}

/// What a caller asks the host to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveTarget {
    /// An entity matched by a selector such as `@e` or a name.
    Entity(String),
    /// A player matched by a selector such as `@p` or a name.
    Player(String),
    Block(BlockPos),
    BlockEntity(BlockPos),
    /// An inventory slot of the invoking player.
    Slot(i32),
}

impl fmt::Display for LiveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveTarget::Entity(selector) => write!(f, "entity {}", selector),
            LiveTarget::Player(selector) => write!(f, "player {}", selector),
            LiveTarget::Block(pos) => write!(f, "block at {}", pos),
            LiveTarget::BlockEntity(pos) => write!(f, "block entity at {}", pos),
            LiveTarget::Slot(slot) => write!(f, "inventory slot {}", slot),
        }
    }
}

/// The host refused to apply a tree to a live object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Rejection {
    reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Access to the live objects of a running game or a stand-in for one.
pub trait Host {
    /// Find the object a target refers to, if there is one.
    fn resolve(&self, target: &LiveTarget) -> Option<LiveHandle>;

    /// The current state of the object as a tree. `None` if the object
    /// cannot be serialized, for example because it has been removed.
    fn serialize(&self, handle: &LiveHandle) -> Option<Value>;

    /// Apply a tree to the object.
    fn deserialize(&mut self, handle: &LiveHandle, value: &Value) -> Result<(), Rejection>;

    /// Invalidate whatever views the host caches of its objects. Called once
    /// before a tree is written to a live object.
    fn refresh_live_views(&mut self);
}

/// A host with no live objects. Every target fails to resolve, so only
/// files and text can be used as endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl Host for NoHost {
    fn resolve(&self, _: &LiveTarget) -> Option<LiveHandle> {
        None
    }

    fn serialize(&self, _: &LiveHandle) -> Option<Value> {
        None
    }

    fn deserialize(&mut self, handle: &LiveHandle, _: &Value) -> Result<(), Rejection> {
        Err(Rejection::new(format!("no {} exists", handle.kind)))
    }

    fn refresh_live_views(&mut self) {}
}
