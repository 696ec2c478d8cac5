//! The keyed placement collection.

use crate::placement::{origin_cmp, Placement, PlacementEntry};
use indexmap::IndexMap;
use std::cmp::Ordering;
use stowage_core::{ItemKey, Point};

/// Callbacks fired by [`PlacementTable`] mutations.
///
/// The grid engine passes its event bus here to forward table changes
/// to external observers. The unit type implements the trait as a
/// no-op, so the table is fully constructible and testable without a
/// live engine attached.
pub trait TableHooks {
    /// An entry was inserted (fired after insertion).
    fn entry_added(&mut self, entry: &PlacementEntry) {
        let _ = entry;
    }

    /// An entry is about to be removed (fired while it is still
    /// present and its cells are still rasterized).
    fn entry_will_remove(&mut self, entry: &PlacementEntry) {
        let _ = entry;
    }

    /// An entry's placement was mutated in place (fired after the
    /// mutation, with the table back in sorted order).
    fn entry_changed(&mut self, entry: &PlacementEntry) {
        let _ = entry;
    }
}

/// No-op hooks for standalone table use.
impl TableHooks for () {}

/// Mapping from item key to [`Placement`], keys unique.
///
/// Entries are kept sorted by `(origin.x, origin.y)` so that point
/// lookups binary-search, and a side index maps each key to its
/// current origin so [`find_by_key`](Self::find_by_key) can seed that
/// binary search. Ordered iteration over [`entries`](Self::entries)
/// is the canonical serialized/replicated representation.
#[derive(Debug, Default)]
pub struct PlacementTable {
    entries: Vec<PlacementEntry>,
    origins: IndexMap<ItemKey, Point>,
}

impl PlacementTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists for `key`.
    pub fn contains_key(&self, key: ItemKey) -> bool {
        self.origins.contains_key(&key)
    }

    /// Read-only ordered view of all entries.
    pub fn entries(&self) -> &[PlacementEntry] {
        &self.entries
    }

    /// Iterate the keys currently placed, in table order.
    pub fn keys(&self) -> impl Iterator<Item = ItemKey> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    fn cmp_to_origin(entry: &PlacementEntry, origin: Point) -> Ordering {
        (entry.placement.origin.x, entry.placement.origin.y).cmp(&(origin.x, origin.y))
    }

    /// Index of the entry for `key`, seeded by the key's recorded
    /// origin: binary search to the first entry at that origin, scan
    /// the equal-origin run, and fall back to a linear sweep only if
    /// the run does not contain the key.
    fn locate(&self, key: ItemKey) -> Option<usize> {
        let origin = *self.origins.get(&key)?;
        let start = self
            .entries
            .partition_point(|e| Self::cmp_to_origin(e, origin) == Ordering::Less);
        for (i, entry) in self.entries[start..].iter().enumerate() {
            if entry.placement.origin != origin {
                break;
            }
            if entry.key == key {
                return Some(start + i);
            }
        }
        // The side index said the key exists; trust it over the sort.
        self.entries.iter().position(|e| e.key == key)
    }

    /// The placement recorded for `key`, if any. O(log n).
    pub fn find_by_key(&self, key: ItemKey) -> Option<&Placement> {
        self.locate(key).map(|i| &self.entries[i].placement)
    }

    /// The key of the entry whose placement covers `cell`, if any.
    ///
    /// The occupancy bitmap cannot attribute a cell to a key, so
    /// exclusion-aware collision checks come here.
    pub fn owner_of(&self, cell: Point) -> Option<ItemKey> {
        self.entries
            .iter()
            .find(|e| e.placement.covers(cell))
            .map(|e| e.key)
    }

    /// Insert `placement` under `key`, replacing any existing entry
    /// for the key (remove-then-insert; duplicate keys never coexist).
    ///
    /// Fires `entry_will_remove` for a replaced entry, then
    /// `entry_added` for the new one.
    pub fn insert(&mut self, key: ItemKey, placement: Placement, hooks: &mut dyn TableHooks) {
        if self.contains_key(key) {
            self.remove(key, hooks);
        }
        let probe = &placement;
        let at = self
            .entries
            .partition_point(|e| origin_cmp(&e.placement, probe) == Ordering::Less);
        self.origins.insert(key, placement.origin);
        self.entries.insert(at, PlacementEntry { key, placement });
        hooks.entry_added(&self.entries[at]);
    }

    /// Remove the entry for `key`, returning its placement.
    ///
    /// Fires `entry_will_remove` before the entry disappears. Absent
    /// keys are a no-op returning `None`.
    pub fn remove(&mut self, key: ItemKey, hooks: &mut dyn TableHooks) -> Option<Placement> {
        let at = self.locate(key)?;
        hooks.entry_will_remove(&self.entries[at]);
        self.origins.swap_remove(&key);
        Some(self.entries.remove(at).placement)
    }

    /// Mutate the placement for `key` in place, restore the sort
    /// order, and fire `entry_changed`.
    ///
    /// Returns `false` (without calling `mutate`) if the key is absent.
    pub fn update(
        &mut self,
        key: ItemKey,
        mutate: impl FnOnce(&mut Placement),
        hooks: &mut dyn TableHooks,
    ) -> bool {
        let Some(at) = self.locate(key) else {
            return false;
        };
        mutate(&mut self.entries[at].placement);
        let entry = self.entries.remove(at);
        let to = self
            .entries
            .partition_point(|e| origin_cmp(&e.placement, &entry.placement) == Ordering::Less);
        self.origins.insert(key, entry.placement.origin);
        self.entries.insert(to, entry);
        hooks.entry_changed(&self.entries[to]);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::GridShape;

    fn placement_at(x: i32, y: i32) -> Placement {
        Placement::new(Point::new(x, y), GridShape::rect(1, 1))
    }

    /// Hook recorder for callback ordering assertions.
    #[derive(Default)]
    struct Recorder {
        log: Vec<(String, ItemKey)>,
    }

    impl TableHooks for Recorder {
        fn entry_added(&mut self, entry: &PlacementEntry) {
            self.log.push(("added".into(), entry.key));
        }
        fn entry_will_remove(&mut self, entry: &PlacementEntry) {
            self.log.push(("will_remove".into(), entry.key));
        }
        fn entry_changed(&mut self, entry: &PlacementEntry) {
            self.log.push(("changed".into(), entry.key));
        }
    }

    #[test]
    fn insert_keeps_entries_sorted_by_origin() {
        let mut t = PlacementTable::new();
        t.insert(ItemKey(1), placement_at(2, 0), &mut ());
        t.insert(ItemKey(2), placement_at(0, 5), &mut ());
        t.insert(ItemKey(3), placement_at(0, 1), &mut ());
        let origins: Vec<Point> = t.entries().iter().map(|e| e.placement.origin).collect();
        assert_eq!(
            origins,
            vec![Point::new(0, 1), Point::new(0, 5), Point::new(2, 0)]
        );
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut t = PlacementTable::new();
        let mut rec = Recorder::default();
        t.insert(ItemKey(1), placement_at(0, 0), &mut rec);
        t.insert(ItemKey(1), placement_at(3, 3), &mut rec);
        assert_eq!(t.len(), 1);
        assert_eq!(
            t.find_by_key(ItemKey(1)).unwrap().origin,
            Point::new(3, 3)
        );
        assert_eq!(
            rec.log,
            vec![
                ("added".into(), ItemKey(1)),
                ("will_remove".into(), ItemKey(1)),
                ("added".into(), ItemKey(1)),
            ]
        );
    }

    #[test]
    fn find_by_key_with_duplicate_origins() {
        // Same (origin, rotation) under different keys is legal:
        // placement equality ignores the key and shape.
        let mut t = PlacementTable::new();
        t.insert(ItemKey(1), placement_at(4, 4), &mut ());
        t.insert(ItemKey(2), placement_at(4, 4), &mut ());
        t.insert(ItemKey(3), placement_at(4, 4), &mut ());
        for k in [1, 2, 3] {
            assert!(t.find_by_key(ItemKey(k)).is_some(), "key {k} not found");
        }
    }

    #[test]
    fn remove_fires_hook_before_removal() {
        let mut t = PlacementTable::new();
        let mut rec = Recorder::default();
        t.insert(ItemKey(9), placement_at(1, 1), &mut ());
        let removed = t.remove(ItemKey(9), &mut rec);
        assert_eq!(removed.unwrap().origin, Point::new(1, 1));
        assert_eq!(rec.log, vec![("will_remove".into(), ItemKey(9))]);
        assert!(t.is_empty());
        assert!(t.remove(ItemKey(9), &mut rec).is_none());
    }

    #[test]
    fn update_restores_sort_order() {
        let mut t = PlacementTable::new();
        t.insert(ItemKey(1), placement_at(0, 0), &mut ());
        t.insert(ItemKey(2), placement_at(5, 5), &mut ());
        let moved = t.update(
            ItemKey(1),
            |p| p.origin = Point::new(9, 9),
            &mut (),
        );
        assert!(moved);
        assert_eq!(t.entries()[0].key, ItemKey(2));
        assert_eq!(t.entries()[1].key, ItemKey(1));
        assert_eq!(
            t.find_by_key(ItemKey(1)).unwrap().origin,
            Point::new(9, 9)
        );
    }

    #[test]
    fn update_absent_key_is_refused() {
        let mut t = PlacementTable::new();
        assert!(!t.update(ItemKey(1), |_| unreachable!(), &mut ()));
    }

    #[test]
    fn owner_of_attributes_cells() {
        let mut t = PlacementTable::new();
        let wide = Placement::new(Point::new(2, 2), GridShape::rect(1, 3));
        t.insert(ItemKey(1), wide, &mut ());
        assert_eq!(t.owner_of(Point::new(2, 4)), Some(ItemKey(1)));
        assert_eq!(t.owner_of(Point::new(3, 2)), None);
    }
}
