// SPDX-License-Identifier: MPL-2.0
//! Manifest items and their partition into fixed-size groups.

use super::newtypes::GroupSize;
use std::fmt;

/// Identifier of a gallery image (its file name on the server).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A manifest entry with its fixed place in the global sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    position: usize,
    group: usize,
    order: usize,
}

impl Item {
    /// Places `id` at `position`, deriving its group and intra-group order.
    #[must_use]
    pub fn new(id: ItemId, position: usize, group_size: GroupSize) -> Self {
        let size = group_size.value();
        Self {
            id,
            position,
            group: position / size,
            order: position % size,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Ordinal position in the whole manifest.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the group this item belongs to.
    #[must_use]
    pub fn group(&self) -> usize {
        self.group
    }

    /// Order of the item inside its group.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }
}

/// A contiguous slice of the manifest that is realized as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    index: usize,
    items: Vec<Item>,
}

impl Group {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Intra-group order of the last item.
    ///
    /// This is the actual size minus one, so a short tail group reports its
    /// real last index instead of the nominal `group_size - 1`.
    #[must_use]
    pub fn last_order(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

/// Splits `ids` into contiguous groups of `group_size` items.
///
/// The last group holds the remainder and may be shorter. An empty manifest
/// yields no groups.
#[must_use]
pub fn partition<I>(ids: I, group_size: GroupSize) -> Vec<Group>
where
    I: IntoIterator,
    I::Item: Into<ItemId>,
{
    let mut groups: Vec<Group> = Vec::new();

    for (position, id) in ids.into_iter().enumerate() {
        let item = Item::new(id.into(), position, group_size);
        match groups.last_mut() {
            Some(group) if group.index == item.group => group.items.push(item),
            _ => groups.push(Group {
                index: item.group,
                items: vec![item],
            }),
        }
    }

    groups
}
