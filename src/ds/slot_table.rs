//! Dense slot table with a key index.
//!
//! Occupied slots always fill `[0, len)`; appends go to `len` and removals
//! move the last occupied slot into the hole. Each occupied slot caches the
//! bitmap keep-mask for its position so the read path never recomputes it.
//!
//! ```text
//!   index: FxHashMap<K, usize>        slots: Vec<Option<Slot<K, V>>>
//!   ┌────────┬─────┐                  ┌─────┬─────┬─────┬─────┬─────┐
//!   │ "a"    │  0  │ ───────────────► │ a/1 │ c/3 │ b/2 │  -  │  -  │
//!   │ "b"    │  2  │                  └─────┴─────┴─────┴─────┴─────┘
//!   │ "c"    │  1  │                     0     1     2   len=3
//!   └────────┴─────┘
//!
//!   swap_remove("a"): slot 2 moves into slot 0, slot 2 becomes empty.
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::ejectable_bitmap::keep_mask;

#[derive(Debug)]
pub struct Slot<K, V> {
    pub key: K,
    pub value: V,
    /// `!(1 << (index % 64))` for the slot's current index.
    pub keep: u64,
}

/// Result of [`SlotTable::swap_remove`].
#[derive(Debug, PartialEq, Eq)]
pub struct Removed<V> {
    pub value: V,
    /// Index the entry was removed from.
    pub index: usize,
    /// Former index of the entry moved into `index`, if any.
    pub moved_from: Option<usize>,
}

#[derive(Debug)]
pub struct SlotTable<K, V> {
    slots: Vec<Option<Slot<K, V>>>,
    index: FxHashMap<K, usize>,
    len: usize,
}

impl<K, V> SlotTable<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Allocates `capacity` empty slots and an index sized for them.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        Self {
            slots,
            index,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns the slot index holding `key`.
    #[inline]
    pub fn lookup(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Slot<K, V>> {
        self.slots.get(index)?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot<K, V>> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Appends a new entry at index `len` and returns that index.
    ///
    /// The caller must ensure the table is not full and `key` is absent.
    pub fn push(&mut self, key: K, value: V) -> usize {
        debug_assert!(!self.is_full());
        debug_assert!(!self.index.contains_key(&key));
        let idx = self.len;
        self.index.insert(key.clone(), idx);
        self.slots[idx] = Some(Slot {
            key,
            value,
            keep: keep_mask(idx),
        });
        self.len += 1;
        idx
    }

    /// Installs `key`/`value` in occupied slot `idx`, returning the old pair.
    ///
    /// The old key leaves the index; the slot keeps its position and mask.
    pub fn replace(&mut self, idx: usize, key: K, value: V) -> Option<(K, V)> {
        let slot = self.slots.get_mut(idx)?.as_mut()?;
        let old_key = std::mem::replace(&mut slot.key, key.clone());
        let old_value = std::mem::replace(&mut slot.value, value);
        self.index.remove(&old_key);
        self.index.insert(key, idx);
        Some((old_key, old_value))
    }

    /// Removes `key`, filling its slot with the last occupied entry.
    ///
    /// Both affected slots are taken before the index or `len` change, so a
    /// `None` return leaves the table untouched.
    pub fn swap_remove(&mut self, key: &K) -> Option<Removed<V>> {
        let idx = *self.index.get(key)?;
        let last = self.len.checked_sub(1)?;

        let removed = self.slots.get_mut(idx)?.take()?;
        let moved = if idx != last {
            match self.slots.get_mut(last).and_then(Option::take) {
                Some(moved) => Some(moved),
                None => {
                    self.slots[idx] = Some(removed);
                    return None;
                },
            }
        } else {
            None
        };

        self.index.remove(key);
        self.len = last;
        let moved_from = moved.map(|mut moved| {
            moved.keep = keep_mask(idx);
            if let Some(entry) = self.index.get_mut(&moved.key) {
                *entry = idx;
            }
            self.slots[idx] = Some(moved);
            last
        });

        Some(Removed {
            value: removed.value,
            index: idx,
            moved_from,
        })
    }

    /// Drops every entry while keeping the slot allocation.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.index.clear();
        self.len = 0;
    }

    /// Iterates occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot<K, V>)> {
        self.slots[..self.len]
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|slot| (idx, slot)))
    }

    /// Iterates the key index.
    pub fn index_entries(&self) -> impl Iterator<Item = (&K, usize)> {
        self.index.iter().map(|(key, &idx)| (key, idx))
    }

    /// Number of keys in the index.
    #[inline]
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// Number of slots past `len` that still hold an entry.
    pub fn stray_tail_slots(&self) -> usize {
        self.slots[self.len..]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}
