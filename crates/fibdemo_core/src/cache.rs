use crate::{FibError, validate_index};

/// Results of the memoized strategy, one slot per index.
///
/// A slot is `None` until the value for its index has been computed. Once set
/// a slot keeps its value until [`MemoCache::reset`] is called.
#[derive(Debug, Clone, Default)]
pub struct MemoCache {
    slots: Vec<Option<u64>>,
}

impl MemoCache {
    /// Creates a cache covering exactly the indices `0..=index`.
    pub fn for_index(index: u64) -> Result<Self, FibError> {
        let index = validate_index(index)?;
        Ok(Self {
            slots: vec![None; index + 1],
        })
    }

    /// The largest index this cache can hold.
    pub fn max_index(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Whether the cache has a slot for `index`.
    pub fn covers(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    /// Grows the cache so that it covers `index`. Existing entries are kept.
    pub fn ensure_index(&mut self, index: u64) -> Result<(), FibError> {
        let index = validate_index(index)?;
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        Ok(())
    }

    /// Marks every slot as unset.
    pub fn reset(&mut self) {
        self.slots.fill(None);
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.slots.get(index).copied().flatten()
    }

    /// Records F(`index`). A slot that is already set is left untouched.
    pub(crate) fn store(&mut self, index: usize, value: u64) {
        if let Some(slot) = self.slots.get_mut(index) {
            debug_assert!(slot.is_none_or(|existing| existing == value));
            slot.get_or_insert(value);
        }
    }

    /// The number of slots that hold a value.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
