//! Fixed-capacity entity arena with an active bitset.
//!
//! Slots never move.  Allocation takes the first free slot and silently
//! fails when every slot is in use.

/// An arena of `N` slots (`N <= 32`) whose liveness is tracked by a bitset.
#[derive(Clone, Copy, Debug)]
pub struct Pool<T: Copy + Default, const N: usize> {
    slots: [T; N],
    active: u32,
}

impl<T: Copy + Default, const N: usize> Pool<T, N> {
    const FITS_BITSET: () = assert!(N <= 32, "pool capacity exceeds the bitset");

    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS_BITSET;
        Self {
            slots: [T::default(); N],
            active: 0,
        }
    }

    /// Place `item` in the first free slot.  Returns the slot index, or
    /// `None` when the pool is full.
    pub fn allocate(&mut self, item: T) -> Option<usize> {
        let idx = (!self.active).trailing_zeros() as usize;
        if idx >= N {
            return None;
        }
        self.slots[idx] = item;
        self.active |= 1u32 << idx;
        Some(idx)
    }

    pub fn release(&mut self, idx: usize) {
        if idx < N {
            self.active &= !(1u32 << idx);
        }
    }

    pub fn is_active(&self, idx: usize) -> bool {
        idx < N && self.active & (1u32 << idx) != 0
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        if self.is_active(idx) {
            Some(&self.slots[idx])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        if self.is_active(idx) {
            Some(&mut self.slots[idx])
        } else {
            None
        }
    }

    /// Active slots with their indices, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        let active = self.active;
        self.slots
            .iter()
            .enumerate()
            .filter(move |(i, _)| active & (1u32 << *i) != 0)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        let active = self.active;
        self.slots
            .iter_mut()
            .enumerate()
            .filter(move |(i, _)| active & (1u32 << *i) != 0)
    }

    /// Keep only the active slots for which `keep` returns `true`.
    /// The closure may update the slot in place.
    pub fn retain(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        for idx in 0..N {
            if self.is_active(idx) && !keep(&mut self.slots[idx]) {
                self.release(idx);
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.count_ones() as usize
    }

    pub fn is_full(&self) -> bool {
        self.active_count() == N
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    pub fn clear(&mut self) {
        self.active = 0;
    }
}

impl<T: Copy + Default, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pools are equal when the same slots are active with equal contents.
/// Whatever a released slot still holds is ignored.
impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for Pool<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for Pool<T, N> {}
