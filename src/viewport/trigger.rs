// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility callbacks.

use std::collections::HashSet;
use std::hash::Hash;

/// Whether the host can report viewport intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverSupport {
    /// Targets wait for an intersecting entry before firing.
    #[default]
    Available,
    /// Targets fire as soon as they are observed (eager loading).
    Unavailable,
}

/// A single intersection report for an observed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry<K> {
    pub target: K,
    pub is_intersecting: bool,
}

/// Fires a callback exactly once per target when it becomes visible.
///
/// A fired target is unregistered and remembered, so later entries for it and
/// attempts to observe it again are ignored.
#[derive(Debug, Clone)]
pub struct ViewportTrigger<K> {
    support: ObserverSupport,
    registered: HashSet<K>,
    fired: HashSet<K>,
}

impl<K> ViewportTrigger<K>
where
    K: Copy + Eq + Hash,
{
    #[must_use]
    pub fn new(support: ObserverSupport) -> Self {
        Self {
            support,
            registered: HashSet::new(),
            fired: HashSet::new(),
        }
    }

    /// Starts watching `target`.
    ///
    /// Without observer support `on_visible` runs immediately. Returns `true`
    /// if the target is now registered and waiting for an intersection.
    pub fn observe(&mut self, target: K, on_visible: &mut impl FnMut(K)) -> bool {
        if self.fired.contains(&target) {
            return false;
        }

        match self.support {
            ObserverSupport::Available => self.registered.insert(target),
            ObserverSupport::Unavailable => {
                self.fired.insert(target);
                on_visible(target);
                false
            }
        }
    }

    /// Watches every target in `targets`.
    pub fn observe_all<I>(&mut self, targets: I, mut on_visible: impl FnMut(K))
    where
        I: IntoIterator<Item = K>,
    {
        for target in targets {
            self.observe(target, &mut on_visible);
        }
    }

    /// Hands a batch of intersection entries to the trigger.
    ///
    /// Each registered target fires on its first intersecting entry. Entries
    /// for unknown or already fired targets are ignored.
    pub fn deliver<I>(&mut self, entries: I, mut on_visible: impl FnMut(K))
    where
        I: IntoIterator<Item = IntersectionEntry<K>>,
    {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if self.registered.remove(&entry.target) {
                self.fired.insert(entry.target);
                on_visible(entry.target);
            }
        }
    }

    #[must_use]
    pub fn is_observing(&self, target: K) -> bool {
        self.registered.contains(&target)
    }

    #[must_use]
    pub fn has_fired(&self, target: K) -> bool {
        self.fired.contains(&target)
    }

    /// Number of targets still waiting for an intersection.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.registered.len()
    }
}

impl<K> Default for ViewportTrigger<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new(ObserverSupport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target: u32, is_intersecting: bool) -> IntersectionEntry<u32> {
        IntersectionEntry {
            target,
            is_intersecting,
        }
    }

    #[test]
    fn observed_target_waits_for_intersection() {
        let mut trigger = ViewportTrigger::new(ObserverSupport::Available);
        let mut fired = Vec::new();

        assert!(trigger.observe(1, &mut |id| fired.push(id)));
        assert!(fired.is_empty());
        assert!(trigger.is_observing(1));

        trigger.deliver([entry(1, false)], |id| fired.push(id));
        assert!(fired.is_empty());

        trigger.deliver([entry(1, true)], |id| fired.push(id));
        assert_eq!(fired, vec![1]);
        assert!(!trigger.is_observing(1));
        assert!(trigger.has_fired(1));
    }

    #[test]
    fn toggling_intersection_fires_once() {
        let mut trigger = ViewportTrigger::new(ObserverSupport::Available);
        let mut count = 0;
        trigger.observe_all([7], |_| count += 1);

        for visible in [true, false, true, false, true] {
            trigger.deliver([entry(7, visible)], |_| count += 1);
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn fired_target_cannot_be_observed_again() {
        let mut trigger = ViewportTrigger::new(ObserverSupport::Available);
        let mut count = 0;
        trigger.observe_all([3], |_| count += 1);
        trigger.deliver([entry(3, true)], |_| count += 1);

        assert!(!trigger.observe(3, &mut |_| count += 1));
        trigger.deliver([entry(3, true)], |_| count += 1);
        assert_eq!(count, 1);
        assert_eq!(trigger.pending(), 0);
    }

    #[test]
    fn double_registration_is_single() {
        let mut trigger = ViewportTrigger::new(ObserverSupport::Available);
        let mut fired = Vec::new();
        trigger.observe_all([4, 4, 5], |id| fired.push(id));
        assert_eq!(trigger.pending(), 2);

        trigger.deliver([entry(4, true), entry(4, true)], |id| fired.push(id));
        assert_eq!(fired, vec![4]);
    }

    #[test]
    fn unavailable_support_fires_on_registration() {
        let mut trigger = ViewportTrigger::new(ObserverSupport::Unavailable);
        let mut fired = Vec::new();
        trigger.observe_all([1, 2, 3], |id| fired.push(id));

        assert_eq!(fired, vec![1, 2, 3]);
        assert_eq!(trigger.pending(), 0);

        trigger.observe_all([1, 2], |id| fired.push(id));
        assert_eq!(fired.len(), 3);
    }
}
