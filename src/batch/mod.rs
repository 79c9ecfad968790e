// SPDX-License-Identifier: MPL-2.0
//! Batch loader.
//!
//! The manifest is split into fixed-size groups once, at construction. Each
//! [`BatchLoader::advance`] hands out the next group; once every group has
//! been handed out further calls return `None` and change nothing.
//!
//! The loader does not decide *when* to advance. The gallery calls it again
//! when the last item of the most recent group becomes visible, which is what
//! [`BatchLoader::is_group_tail`] answers.

use crate::domain::gallery::{partition, Group, GroupSize, ItemId};

/// Hands out manifest groups strictly in index order.
#[derive(Debug, Clone)]
pub struct BatchLoader {
    groups: Vec<Group>,
    total_items: usize,
    next: usize,
}

impl BatchLoader {
    /// Partitions `ids` into groups of `group_size`.
    #[must_use]
    pub fn new<I>(ids: I, group_size: GroupSize) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        let groups = partition(ids, group_size);
        let total_items = groups.iter().map(Group::len).sum();
        Self {
            groups,
            total_items,
            next: 0,
        }
    }

    /// Returns the next unrealized group and moves the pointer past it.
    ///
    /// Returns `None` once every group has been handed out.
    pub fn advance(&mut self) -> Option<&Group> {
        let group = self.groups.get(self.next)?;
        self.next += 1;
        Some(group)
    }

    /// Whether the item at `order` is the last one of group `group`.
    ///
    /// Uses the group's actual length, so a short tail group is recognized by
    /// its real last index.
    #[must_use]
    pub fn is_group_tail(&self, group: usize, order: usize) -> bool {
        self.groups
            .get(group)
            .and_then(Group::last_order)
            .is_some_and(|last| last == order)
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of groups handed out so far.
    #[must_use]
    pub fn realized_groups(&self) -> usize {
        self.next
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("{i}.jpg")).collect()
    }

    #[test]
    fn advances_exactly_ceil_l_over_g_times() {
        for (len, size) in [(0, 100), (10, 100), (100, 100), (250, 100), (7, 3), (1, 1)] {
            let mut loader = BatchLoader::new(manifest(len), GroupSize::new(size));
            let mut calls = 0;
            while loader.advance().is_some() {
                calls += 1;
            }
            assert_eq!(calls, len.div_ceil(size), "len {len} size {size}");
            assert!(loader.is_exhausted());
            assert!(loader.advance().is_none());
        }
    }

    #[test]
    fn kth_advance_realizes_kth_slice() {
        let ids = manifest(250);
        let mut loader = BatchLoader::new(ids.clone(), GroupSize::new(100));
        let mut k = 0;
        while let Some(group) = loader.advance() {
            let start = k * 100;
            let end = ((k + 1) * 100).min(250);
            let realized: Vec<&str> = group.items().iter().map(|i| i.id().as_str()).collect();
            let expected: Vec<&str> = ids[start..end].iter().map(String::as_str).collect();
            assert_eq!(realized, expected);
            k += 1;
        }
        assert_eq!(k, 3);
    }

    #[test]
    fn tail_group_uses_actual_size() {
        let loader = BatchLoader::new(manifest(250), GroupSize::new(100));
        assert!(loader.is_group_tail(0, 99));
        assert!(loader.is_group_tail(2, 49));
        assert!(!loader.is_group_tail(2, 99));
        assert!(!loader.is_group_tail(3, 0));
    }

    #[test]
    fn empty_manifest_is_exhausted_from_start() {
        let mut loader = BatchLoader::new(Vec::<String>::new(), GroupSize::new(100));
        assert!(loader.is_exhausted());
        assert_eq!(loader.group_count(), 0);
        assert!(loader.advance().is_none());
        assert_eq!(loader.realized_groups(), 0);
    }

    #[test]
    fn counters_follow_advances() {
        let mut loader = BatchLoader::new(manifest(250), GroupSize::new(100));
        assert_eq!(loader.total_items(), 250);
        assert_eq!(loader.group_count(), 3);
        let _ = loader.advance();
        assert_eq!(loader.realized_groups(), 1);
        assert!(!loader.is_exhausted());
    }
}
