use core::fmt::Debug;

use crate::error::Result;
use crate::hash_table::Entry;
use crate::hash_table::HashTable;
#[cfg(any(test, feature = "stats"))]
use crate::hash_table::DebugStats;
#[cfg(any(test, feature = "stats"))]
use crate::hash_table::ProbeHistogram;
use crate::strategy::FnStrategy;
use crate::strategy::HashStrategy;

/// A hash set using open addressing with linear probing as the underlying
/// storage.
///
/// `OpenAddressingSet<T, S>` stores values of type `T` and consults the
/// strategy `S` for every hash and equality decision, so `T` itself needs
/// neither `Hash` nor `Eq`. The table starts at 16 slots and doubles whenever
/// an insert would push the load factor above 0.7. Removed values leave
/// tombstones that are reclaimed by the next growth.
///
/// # Examples
///
/// ```rust
/// use probe_set::OpenAddressingSet;
///
/// let mut set = OpenAddressingSet::from_fns(
///     |s: &String| s.len() as u64,
///     |a: &String, b: &String| a == b,
/// );
///
/// assert!(set.insert("alpha".to_string()));
/// assert!(!set.insert("alpha".to_string()));
/// assert!(set.contains(&"alpha".to_string()));
/// assert!(set.remove(&"alpha".to_string()));
/// assert!(set.is_empty());
/// ```
#[derive(Clone)]
pub struct OpenAddressingSet<T, S> {
    table: HashTable<T>,
    strategy: S,
}

impl<T, S> PartialEq for OpenAddressingSet<T, S>
where
    S: HashStrategy<T>,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.holds(v)) && other.iter().all(|v| self.holds(v))
    }
}

impl<T, S> Debug for OpenAddressingSet<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.table.iter()).finish()
    }
}

impl<T, S> OpenAddressingSet<T, S>
where
    S: HashStrategy<T>,
{
    /// Creates an empty set with 16 slots that hashes and compares values
    /// through `strategy`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "std")]
    /// # {
    /// use std::hash::RandomState;
    ///
    /// use probe_set::OpenAddressingSet;
    /// use probe_set::strategy::BuildHasherStrategy;
    ///
    /// let set: OpenAddressingSet<i32, _> =
    ///     OpenAddressingSet::with_strategy(BuildHasherStrategy::new(RandomState::new()));
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 16);
    /// # }
    /// ```
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            table: HashTable::new(),
            strategy,
        }
    }

    /// Fallible form of [`with_strategy`](Self::with_strategy), returning
    /// [`SetError::AllocationFailure`](crate::SetError::AllocationFailure)
    /// instead of aborting.
    pub fn try_with_strategy(strategy: S) -> Result<Self> {
        Ok(Self {
            table: HashTable::try_new()?,
            strategy,
        })
    }

    /// Returns the number of values in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// let mut set = OpenAddressingSet::from_fns(|v: &u32| *v as u64, |a: &u32, b: &u32| a == b);
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots. Always a power of two, at least 16.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the number of tombstoned slots left behind by removals since
    /// the last growth.
    pub fn tombstones(&self) -> usize {
        self.table.tombstones()
    }

    /// Returns `len / capacity`. Never above 0.7 once an insert returns.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Returns the strategy used to hash and compare values.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was newly inserted and `false` if an equal
    /// value was already present, in which case the set keeps the stored
    /// value and drops `value`.
    ///
    /// If one more value would push the load factor above 0.7, the set first
    /// doubles its capacity. This check runs before the lookup, so inserting
    /// a duplicate can still grow the set.
    ///
    /// Aborts if growth cannot allocate; see
    /// [`try_insert`](Self::try_insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// let mut set = OpenAddressingSet::from_fns(|v: &u32| *v as u64, |a: &u32, b: &u32| a == b);
    /// assert!(set.insert(42));
    /// assert!(set.insert(1337));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let strategy = &self.strategy;
        let hash = strategy.hash(&value);
        match self.table.entry(
            hash,
            |stored| strategy.eq(stored, &value),
            |stored| strategy.hash(stored),
        ) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Fallible form of [`insert`](Self::insert).
    ///
    /// Returns [`SetError::AllocationFailure`](crate::SetError::AllocationFailure)
    /// if growth cannot allocate, leaving the set unchanged, and
    /// [`SetError::TableFull`](crate::SetError::TableFull) if the probe wraps
    /// the whole table.
    pub fn try_insert(&mut self, value: T) -> Result<bool> {
        let strategy = &self.strategy;
        let hash = strategy.hash(&value);
        match self.table.try_entry(
            hash,
            |stored| strategy.eq(stored, &value),
            |stored| strategy.hash(stored),
        )? {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(true)
            }
        }
    }

    /// Returns `true` if the set contains a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// let mut set = OpenAddressingSet::from_fns(|v: &u32| *v as u64, |a: &u32, b: &u32| a == b);
    /// set.insert(42);
    /// assert!(set.contains(&42));
    /// assert!(!set.contains(&43));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Like `contains`, but falls back to a slot scan so values stored past a
    /// tombstone in their probe run are still seen.
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
            || self
                .table
                .iter()
                .any(|stored| self.strategy.eq(stored, value))
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        let strategy = &self.strategy;
        self.table
            .find(strategy.hash(value), |stored| strategy.eq(stored, value))
    }

    /// Removes a value from the set, leaving a tombstone in its slot.
    ///
    /// Returns `true` if the value was present. Removing an absent value is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// let mut set = OpenAddressingSet::from_fns(|v: &u32| *v as u64, |a: &u32, b: &u32| a == b);
    /// set.insert(42);
    /// assert!(set.remove(&42));
    /// assert!(!set.remove(&42));
    /// assert_eq!(set.tombstones(), 1);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`, if any.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let strategy = &self.strategy;
        self.table
            .remove(strategy.hash(value), |stored| strategy.eq(stored, value))
    }

    /// Adds a value to the set, replacing and returning an equal stored
    /// value if there was one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// let mut set = OpenAddressingSet::from_fns(
    ///     |s: &String| s.to_ascii_lowercase().len() as u64,
    ///     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
    /// );
    /// set.insert("Key".to_string());
    /// assert_eq!(set.replace("KEY".to_string()), Some("Key".to_string()));
    /// assert_eq!(set.get(&"key".to_string()).map(String::as_str), Some("KEY"));
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        let strategy = &self.strategy;
        let hash = strategy.hash(&value);
        match self.table.entry(
            hash,
            |stored| strategy.eq(stored, &value),
            |stored| strategy.hash(stored),
        ) {
            Entry::Occupied(entry) => Some(core::mem::replace(entry.into_mut(), value)),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Removes every value. The capacity is kept and all tombstones are
    /// cleared.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over the values in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// let mut set = OpenAddressingSet::from_fns(|v: &u32| *v as u64, |a: &u32, b: &u32| a == b);
    /// set.extend([3, 1, 2]);
    /// let values: Vec<u32> = set.iter().copied().collect();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Removes every value and returns them as an iterator. The capacity is
    /// kept.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Keeps only the values for which `f` returns `true`. Rejected values
    /// are tombstoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// let mut set = OpenAddressingSet::from_fns(|v: &u32| *v as u64, |a: &u32, b: &u32| a == b);
    /// set.extend(0..8);
    /// set.retain(|&v| v % 2 == 0);
    /// assert_eq!(set.len(), 4);
    /// assert!(!set.contains(&3));
    /// ```
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.table.retain(f);
    }

    /// Drops the set, releasing every value and the slot storage.
    ///
    /// Equivalent to letting the set go out of scope.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns a histogram of probe distances for the stored values.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> ProbeHistogram {
        self.table.probe_histogram(|v| self.strategy.hash(v))
    }

    /// Returns occupancy and probe-length statistics.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        self.table.debug_stats(|v| self.strategy.hash(v))
    }
}

impl<T, S> OpenAddressingSet<T, S>
where
    S: HashStrategy<T> + Default,
{
    /// Creates an empty set with 16 slots using the default strategy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use probe_set::DefaultStrategy;
    /// use probe_set::OpenAddressingSet;
    ///
    /// let set: OpenAddressingSet<i32, DefaultStrategy> = OpenAddressingSet::new();
    /// assert!(set.is_empty());
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::with_strategy(S::default())
    }
}

impl<T, H, E> OpenAddressingSet<T, FnStrategy<H, E>>
where
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    /// Creates an empty set from a hash function and an equality function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_set::OpenAddressingSet;
    ///
    /// fn djb2(s: &&str) -> u64 {
    ///     s.bytes()
    ///         .fold(5381u64, |h, c| h.wrapping_mul(33).wrapping_add(c as u64))
    /// }
    ///
    /// let mut set = OpenAddressingSet::from_fns(djb2, |a: &&str, b: &&str| a == b);
    /// set.insert("probe");
    /// assert!(set.contains(&"probe"));
    /// ```
    pub fn from_fns(hash: H, eq: E) -> Self {
        Self::with_strategy(FnStrategy::new(hash, eq))
    }
}

impl<T, S> Default for OpenAddressingSet<T, S>
where
    S: HashStrategy<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the values of an `OpenAddressingSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_table::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A draining iterator over the values of an `OpenAddressingSet`.
pub struct Drain<'a, T> {
    inner: crate::hash_table::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A consuming iterator over the values of an `OpenAddressingSet`.
pub struct IntoIter<T> {
    inner: crate::hash_table::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, S> IntoIterator for OpenAddressingSet<T, S> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a OpenAddressingSet<T, S>
where
    S: HashStrategy<T>,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> FromIterator<T> for OpenAddressingSet<T, S>
where
    S: HashStrategy<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OpenAddressingSet::new();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for OpenAddressingSet<T, S>
where
    S: HashStrategy<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
