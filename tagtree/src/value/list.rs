use std::ops::Deref;

use crate::{
    error::{Error, Result},
    Tag, Value,
};

/// An NBT list. Every element has the same tag, which is fixed once the list
/// has a tag other than [`Tag::End`].
///
/// An empty list made with [`List::new`] carries the `End` element tag and
/// adopts the tag of the first element pushed to it. A list made with
/// [`List::with_tag`] only ever accepts that tag.
///
/// ```
/// # use tagtree::{List, Tag, Value};
/// let mut list = List::new();
/// list.push(1).unwrap();
/// assert_eq!(list.element_tag(), Tag::Int);
///
/// assert!(list.push("two").is_err());
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct List {
    tag: Tag,
    items: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self::with_tag(Tag::End)
    }

    pub fn with_tag(tag: Tag) -> Self {
        Self {
            tag,
            items: Vec::new(),
        }
    }

    /// Builds a list from the given values, failing if they do not all share
    /// one tag.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let mut list = Self::with_tag(values.first().map_or(Tag::End, Value::tag));
        list.items.reserve(values.len());
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    /// Only for decoders that have already checked every element against
    /// `tag`.
    pub(crate) fn from_parts(tag: Tag, items: Vec<Value>) -> Self {
        debug_assert!(items.iter().all(|v| v.tag() == tag));
        Self { tag, items }
    }

    /// The tag every element of this list is written with.
    pub fn element_tag(&self) -> Tag {
        self.tag
    }

    /// Appends a value. Fails without touching the list if the value's tag
    /// differs from the list's element tag.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let tag = value.tag();

        if self.tag == Tag::End && self.items.is_empty() {
            self.tag = tag;
        } else if self.tag != tag {
            return Err(Error::mismatched_element(self.tag, tag));
        }

        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.items
    }
}

impl Deref for List {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

// The element tag of an empty list cannot be seen in every format (SNBT
// writes `[]` for all of them), so it only takes part in equality while the
// list has elements.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && (self.tag == other.tag || self.items.is_empty())
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
