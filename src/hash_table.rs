use alloc::alloc::handle_alloc_error;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt::Debug;

use crate::error::Result;
use crate::error::SetError;

/// Number of slots allocated by a freshly constructed table.
pub const INITIAL_CAPACITY: usize = 16;

/// Ratio of live values to slots that growth keeps the table at or below.
pub const MAX_LOAD_FACTOR: f64 = 0.7;

/// `populated / capacity > MAX_LOAD_FACTOR`, evaluated without floats.
#[inline(always)]
fn exceeds_load_factor(populated: usize, capacity: usize) -> bool {
    populated as u128 * 10 > capacity as u128 * 7
}

/// One storage cell of the table.
#[derive(Clone)]
enum Slot<V> {
    /// Never held a value since the last rebuild. Probing stops here.
    Empty,
    /// Holds a live value.
    Occupied(V),
    /// Held a value that was removed. Insertion may reuse it.
    Tombstone,
}

impl<V> Slot<V> {
    #[inline(always)]
    fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }
}

/// Outcome of a probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// An occupied slot holding a matching value.
    Found(usize),
    /// The first empty or tombstoned slot on the probe path.
    Vacant(usize),
    /// The probe visited every slot without stopping.
    Full,
}

/// Allocates `capacity` empty slots, reporting failure instead of aborting.
fn allocate_slots<V>(capacity: usize) -> Result<Vec<Slot<V>>> {
    let mut slots = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        tracing::error!(slots = capacity, "slot allocation failed");
        return Err(SetError::AllocationFailure { slots: capacity });
    }
    slots.resize_with(capacity, || Slot::Empty);
    Ok(slots)
}

/// Escalates an error raised by an infallible operation.
#[cold]
#[inline(never)]
fn fatal<V>(error: SetError) -> ! {
    if let SetError::AllocationFailure { slots } = error
        && let Ok(layout) = Layout::array::<Slot<V>>(slots)
    {
        handle_alloc_error(layout);
    }
    panic!("{error}");
}

/// Probe-length statistics for a table.
///
/// Only available with the `stats` feature (or under test).
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStats {
    /// Number of live values.
    pub populated: usize,
    /// Number of tombstoned slots.
    pub tombstones: usize,
    /// Total number of slots.
    pub capacity: usize,
    /// `populated / capacity`.
    pub load_factor: f64,
    /// Longest distance between a value's home slot and its actual slot.
    pub longest_probe: usize,
    /// Mean distance between a value's home slot and its actual slot.
    pub mean_probe: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Open Addressing Set Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Tombstones: {} ({:.2}% of slots)",
            self.tombstones,
            if self.capacity == 0 {
                0.0
            } else {
                (self.tombstones as f64 / self.capacity as f64) * 100.0
            }
        );
        println!(
            "Probe length: {} longest, {:.3} mean",
            self.longest_probe, self.mean_probe
        );
    }
}

/// Histogram of probe distances, indexed by distance from the home slot.
///
/// Only available with the `stats` feature (or under test).
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeHistogram {
    bins: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ProbeHistogram {
    /// Returns the bins. `bins()[d]` counts live values stored `d` slots past
    /// their home slot.
    pub fn bins(&self) -> &[usize] {
        &self.bins
    }

    /// Pretty-prints the histogram horizontally using stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.bins.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!(
            "probe histogram ({} entries):",
            self.bins.iter().sum::<usize>()
        );

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            match units % 8 {
                1 => bar.push('▏'),
                2 => bar.push('▎'),
                3 => bar.push('▍'),
                4 => bar.push('▌'),
                5 => bar.push('▋'),
                6 => bar.push('▊'),
                7 => bar.push('▉'),
                _ => {}
            }
            bar
        };

        for (distance, &count) in self.bins.iter().enumerate() {
            println!("{:>3} | {} ({})", distance, make_bar(count), count);
        }
    }
}

/// An open-addressing hash table using linear probing and tombstone deletion.
///
/// `HashTable<V>` owns a power-of-two array of slots. Like the set built on
/// top of it, it never hashes values itself: every operation takes the hash
/// of the value being looked up and an equality predicate, and operations
/// that may grow the table also take a function to rehash stored values.
///
/// Lookups start at `hash & (capacity - 1)` and step forward one slot at a
/// time, wrapping at the end of the array. A probe stops at the first slot
/// that is not an occupied, non-matching value: an empty slot, a tombstone,
/// or a match. Removal leaves a tombstone behind; tombstones are only
/// discarded when the table grows.
///
/// ## Example
///
/// ```rust
/// use probe_set::hash_table::Entry;
/// use probe_set::hash_table::HashTable;
///
/// let rehash = |v: &u64| v.wrapping_mul(0x9e37_79b9_7f4a_7c15);
///
/// let mut table: HashTable<u64> = HashTable::new();
/// match table.entry(rehash(&7), |&v| v == 7, rehash) {
///     Entry::Vacant(entry) => {
///         entry.insert(7u64);
///     }
///     Entry::Occupied(_) => unreachable!(),
/// }
/// assert_eq!(table.find(rehash(&7), |&v| v == 7), Some(&7));
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    slots: Vec<Slot<V>>,
    populated: usize,
    tombstones: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::string::String;

        let slotmap = self
            .slots
            .chunks(INITIAL_CAPACITY)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|slot| match slot {
                        Slot::Empty => '.',
                        Slot::Occupied(_) => 'o',
                        Slot::Tombstone => 'x',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();

        f.debug_struct("HashTable")
            .field("slotmap", &slotmap)
            .field("populated", &self.populated)
            .field("tombstones", &self.tombstones)
            .field("capacity", &self.slots.len())
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with [`INITIAL_CAPACITY`] slots.
    ///
    /// Aborts through [`handle_alloc_error`] if the slots cannot be
    /// allocated; see [`try_new`](Self::try_new) for the fallible form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::hash_table::HashTable;
    ///
    /// let table: HashTable<String> = HashTable::new();
    /// assert_eq!(table.capacity(), 16);
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|error| fatal::<V>(error))
    }

    /// Creates an empty table with [`INITIAL_CAPACITY`] slots, returning
    /// [`SetError::AllocationFailure`] if they cannot be allocated.
    pub fn try_new() -> Result<Self> {
        Self::try_with_slots(INITIAL_CAPACITY)
    }

    fn try_with_slots(slots: usize) -> Result<Self> {
        let Some(capacity) = slots.checked_next_power_of_two() else {
            return Err(SetError::AllocationFailure { slots });
        };

        Ok(Self {
            slots: allocate_slots(capacity)?,
            populated: 0,
            tombstones: 0,
        })
    }

    /// Returns the number of live values in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table holds no live values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of slots. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of tombstoned slots.
    ///
    /// Tombstones do not count toward [`len`](Self::len), but they lengthen
    /// probe sequences until the next growth discards them.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.slots.len() as f64
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    /// Walks the probe sequence for `hash`, stopping at the first slot that
    /// is not an occupied, non-matching value.
    #[inline]
    fn probe_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Probe {
        let mask = self.mask();
        let start = hash as usize & mask;
        let mut index = start;

        loop {
            match &self.slots[index] {
                Slot::Occupied(value) if !eq(value) => {}
                Slot::Occupied(_) => return Probe::Found(index),
                Slot::Empty | Slot::Tombstone => return Probe::Vacant(index),
            }

            index = (index + 1) & mask;
            if index == start {
                tracing::error!(
                    capacity = self.slots.len(),
                    populated = self.populated,
                    tombstones = self.tombstones,
                    "probe wrapped without resolving"
                );
                return Probe::Full;
            }
        }
    }

    /// Probes for a lookup, treating a wrapped probe as a broken invariant.
    #[inline]
    fn lookup_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        match self.probe_index(hash, eq) {
            Probe::Found(index) => Some(index),
            Probe::Vacant(_) => None,
            Probe::Full => fatal::<V>(SetError::TableFull {
                capacity: self.slots.len(),
            }),
        }
    }

    /// Returns a reference to the value matching `eq`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42, |&n| n).or_insert(42);
    ///
    /// assert_eq!(table.find(42, |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(99, |&n| n == 99), None);
    /// ```
    #[inline]
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.lookup_index(hash, eq)?;
        match &self.slots[index] {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value matching `eq`, if any.
    ///
    /// The caller must not change the value in a way that alters its hash.
    #[inline]
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.lookup_index(hash, eq)?;
        match &mut self.slots[index] {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }

    /// Removes and returns the value matching `eq`, leaving a tombstone in
    /// its slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42, |&n| n).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert_eq!(table.remove(42, |&n| n == 42), None);
    /// assert_eq!(table.tombstones(), 1);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.lookup_index(hash, eq)?;
        Some(self.take_at(index))
    }

    /// Replaces the occupied slot at `index` with a tombstone.
    fn take_at(&mut self, index: usize) -> V {
        match core::mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied(value) => {
                self.populated -= 1;
                self.tombstones += 1;
                value
            }
            _ => unreachable!("slot {index} was not occupied"),
        }
    }

    /// Gets the entry for a value about to be inserted.
    ///
    /// If adding one more value would push the load factor above
    /// [`MAX_LOAD_FACTOR`], the table first grows to twice its capacity,
    /// rehashing every live value with `hasher`. Growth happens before the
    /// probe, so it may occur even when the value turns out to be present.
    ///
    /// Aborts if growth cannot allocate; see
    /// [`try_entry`](Self::try_entry) for the fallible form.
    #[inline]
    pub fn entry(
        &mut self,
        hash: u64,
        eq: impl Fn(&V) -> bool,
        hasher: impl Fn(&V) -> u64,
    ) -> Entry<'_, V> {
        match self.try_entry(hash, eq, hasher) {
            Ok(entry) => entry,
            Err(error) => fatal::<V>(error),
        }
    }

    /// Fallible form of [`entry`](Self::entry).
    ///
    /// On [`SetError::AllocationFailure`] the table is left exactly as it was.
    pub fn try_entry(
        &mut self,
        hash: u64,
        eq: impl Fn(&V) -> bool,
        hasher: impl Fn(&V) -> u64,
    ) -> Result<Entry<'_, V>> {
        if exceeds_load_factor(self.populated + 1, self.slots.len()) {
            self.try_grow(hasher)?;
        }

        match self.probe_index(hash, eq) {
            Probe::Found(index) => Ok(Entry::Occupied(OccupiedEntry { table: self, index })),
            Probe::Vacant(index) => Ok(Entry::Vacant(VacantEntry { table: self, index })),
            Probe::Full => Err(SetError::TableFull {
                capacity: self.slots.len(),
            }),
        }
    }

    #[cold]
    #[inline(never)]
    fn try_grow(&mut self, hasher: impl Fn(&V) -> u64) -> Result<()> {
        let capacity = self.slots.len();
        let Some(new_capacity) = capacity.checked_mul(2) else {
            return Err(SetError::AllocationFailure { slots: usize::MAX });
        };
        self.try_rebuild(new_capacity, hasher)
    }

    /// Moves every live value into `new_capacity` fresh slots, discarding
    /// tombstones.
    ///
    /// The new slots are fully allocated before anything moves, so a failed
    /// allocation leaves the table untouched.
    fn try_rebuild(&mut self, new_capacity: usize, hasher: impl Fn(&V) -> u64) -> Result<()> {
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(new_capacity > self.populated);

        let fresh = allocate_slots(new_capacity)?;
        let old_capacity = self.slots.len();
        let dropped_tombstones = self.tombstones;
        let old_slots = core::mem::replace(&mut self.slots, fresh);
        self.tombstones = 0;

        let mask = new_capacity - 1;
        for slot in old_slots {
            if let Slot::Occupied(value) = slot {
                // The fresh table has no tombstones and fewer values than
                // slots, so the scan always ends on an empty slot. Copies of
                // one value stored past a tombstone are each kept.
                let mut index = hasher(&value) as usize & mask;
                while self.slots[index].is_occupied() {
                    index = (index + 1) & mask;
                }
                self.slots[index] = Slot::Occupied(value);
            }
        }

        tracing::debug!(
            old_capacity,
            new_capacity,
            populated = self.populated,
            dropped_tombstones,
            "rebuilt table"
        );

        Ok(())
    }

    /// Removes all values from the table, keeping its capacity.
    pub fn clear(&mut self) {
        tracing::trace!(
            populated = self.populated,
            tombstones = self.tombstones,
            "clearing table"
        );
        self.slots.fill_with(|| Slot::Empty);
        self.populated = 0;
        self.tombstones = 0;
    }

    /// Tombstones every value for which `f` returns `false`.
    pub fn retain(&mut self, mut f: impl FnMut(&V) -> bool) {
        for slot in self.slots.iter_mut() {
            let keep = match slot {
                Slot::Occupied(value) => f(value),
                _ => true,
            };
            if !keep {
                *slot = Slot::Tombstone;
                self.populated -= 1;
                self.tombstones += 1;
            }
        }
    }

    /// Returns an iterator over the live values in slot order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator that removes and yields every live value.
    ///
    /// Every slot, tombstones included, is reset to empty. Dropping the
    /// iterator early finishes the drain.
    pub fn drain(&mut self) -> Drain<'_, V> {
        Drain {
            table: self,
            slot_index: 0,
        }
    }

    /// Computes a histogram of probe distances for the live values.
    ///
    /// `hasher` must be the hash function the values were inserted with.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self, hasher: impl Fn(&V) -> u64) -> ProbeHistogram {
        let mut bins = alloc::vec![0usize; 1];
        for (distance, _) in self.probe_distances(hasher) {
            if bins.len() <= distance {
                bins.resize(distance + 1, 0);
            }
            bins[distance] += 1;
        }

        ProbeHistogram { bins }
    }

    /// Returns occupancy and probe-length statistics.
    ///
    /// `hasher` must be the hash function the values were inserted with.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self, hasher: impl Fn(&V) -> u64) -> DebugStats {
        let mut longest_probe = 0;
        let mut total_probe = 0;
        for (distance, _) in self.probe_distances(hasher) {
            longest_probe = longest_probe.max(distance);
            total_probe += distance;
        }

        DebugStats {
            populated: self.populated,
            tombstones: self.tombstones,
            capacity: self.slots.len(),
            load_factor: self.load_factor(),
            longest_probe,
            mean_probe: if self.populated == 0 {
                0.0
            } else {
                total_probe as f64 / self.populated as f64
            },
        }
    }

    #[cfg(any(test, feature = "stats"))]
    fn probe_distances<'a>(
        &'a self,
        hasher: impl Fn(&V) -> u64 + 'a,
    ) -> impl Iterator<Item = (usize, &'a V)> + 'a {
        let mask = self.mask();
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| match slot {
                Slot::Occupied(value) => {
                    let home = hasher(value) as usize & mask;
                    Some((index.wrapping_sub(home) & mask, value))
                }
                _ => None,
            })
    }
}

/// A view into a single slot of the table, found by [`HashTable::entry`].
pub enum Entry<'a, V> {
    /// The value is not present; the entry points at the slot it would
    /// occupy.
    Vacant(VacantEntry<'a, V>),
    /// The value is present.
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the stored value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Vacant(entry) => entry.insert(default),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Like [`or_insert`](Self::or_insert), computing the value lazily.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Vacant(entry) => entry.insert(default()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }
}

/// A vacant entry: an empty or tombstoned slot at the end of a probe.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Writes `value` into the slot and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        if matches!(table.slots[self.index], Slot::Tombstone) {
            table.tombstones -= 1;
        }
        table.populated += 1;

        let slot = &mut table.slots[self.index];
        *slot = Slot::Occupied(value);
        match slot {
            Slot::Occupied(value) => value,
            _ => unreachable!(),
        }
    }

    /// Returns `true` if the slot being reused is a tombstone.
    pub fn reuses_tombstone(&self) -> bool {
        matches!(self.table.slots[self.index], Slot::Tombstone)
    }
}

/// An occupied entry: a slot holding a value that matched the probe.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Returns a reference to the stored value.
    pub fn get(&self) -> &V {
        match &self.table.slots[self.index] {
            Slot::Occupied(value) => value,
            _ => unreachable!(),
        }
    }

    /// Returns a mutable reference to the stored value.
    pub fn get_mut(&mut self) -> &mut V {
        match &mut self.table.slots[self.index] {
            Slot::Occupied(value) => value,
            _ => unreachable!(),
        }
    }

    /// Converts the entry into a mutable reference with the table's lifetime.
    pub fn into_mut(self) -> &'a mut V {
        let table = self.table;
        match &mut table.slots[self.index] {
            Slot::Occupied(value) => value,
            _ => unreachable!(),
        }
    }

    /// Removes the value, leaving a tombstone, and returns it.
    pub fn remove(self) -> V {
        self.table.take_at(self.index)
    }
}

/// An iterator over the live values of a [`HashTable`].
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// A draining iterator over the values of a [`HashTable`].
pub struct Drain<'a, V> {
    table: &'a mut HashTable<V>,
    slot_index: usize,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot_index < self.table.slots.len() {
            let index = self.slot_index;
            self.slot_index += 1;

            match core::mem::replace(&mut self.table.slots[index], Slot::Empty) {
                Slot::Occupied(value) => {
                    self.table.populated -= 1;
                    return Some(value);
                }
                Slot::Tombstone => self.table.tombstones -= 1,
                Slot::Empty => {}
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.populated, Some(self.table.populated))
    }
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

/// An owning iterator over the values of a [`HashTable`].
pub struct IntoIter<V> {
    slots: alloc::vec::IntoIter<Slot<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.populated,
            slots: self.slots.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
