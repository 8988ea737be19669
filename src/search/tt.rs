//! Depth-aware transposition table
//!
//! Memoizes heuristic evaluations of visited game states so an alpha-beta
//! search can reuse work across transposing move orders. Unlike a
//! conventional map, each entry is annotated with the search depth at which
//! its value was produced, and the search replaces shallower results with
//! deeper ones.
//!
//! The table chains state-equal keys per bucket and doubles the bucket
//! array whenever the load factor would exceed 1, so lookups stay expected
//! O(1).
//!
//! # Example
//!
//! ```
//! use pente::{Pente, Pos, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new();
//! let state = Pente::new().apply_move(Pos::new(3, 3));
//!
//! tt.add(state.clone(), 4, 120);
//!
//! let info = tt.get_info(&state).unwrap();
//! assert_eq!((info.depth, info.value), (4, 120));
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

/// Bucket count of a freshly created table.
const INITIAL_BUCKETS: usize = 5;

/// A recorded evaluation: the heuristic `value` of a state and the `depth`
/// to which the game tree was searched to determine it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    pub value: i32,
    pub depth: u32,
}

#[derive(Debug)]
struct Entry<S> {
    state: S,
    info: StateInfo,
}

/// A transposition table for an arbitrary game.
///
/// Maps a game state to a [`StateInfo`] keyed on the state's value-based
/// `Eq`/`Hash` (equal states must hash equally; all state fields that
/// influence play must participate in both). The table takes inserted
/// states by value, so an entry's key can never be mutated out from under
/// its bucket.
///
/// Buckets are selected by `hash(state) % bucket_count`; hashes are
/// unsigned 64-bit, which sidesteps the negative-remainder hazard of
/// signed-hash designs. The hasher is [`DefaultHasher`] with a fixed
/// (default) key, so bucket placement is deterministic within a process.
#[derive(Debug)]
pub struct TranspositionTable<S> {
    /// Invariant: every entry sits in `buckets[hash % buckets.len()]`, no
    /// two entries are state-equal, and `len <= buckets.len()`.
    buckets: Vec<Vec<Entry<S>>>,
    len: usize,
    hash_builder: BuildHasherDefault<DefaultHasher>,
}

impl<S: Eq + Hash> TranspositionTable<S> {
    /// Create a new, empty transposition table.
    #[must_use]
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(INITIAL_BUCKETS);
        buckets.resize_with(INITIAL_BUCKETS, Vec::new);
        Self {
            buckets,
            len: 0,
            hash_builder: BuildHasherDefault::default(),
        }
    }

    /// Number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current length of the bucket array (diagnostic).
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The recorded evaluation for `state`, if one exists for a state-equal
    /// key.
    #[must_use]
    pub fn get_info(&self, state: &S) -> Option<StateInfo> {
        if self.len == 0 {
            return None;
        }
        let idx = self.bucket_index(state, self.buckets.len());
        self.buckets[idx]
            .iter()
            .find(|e| e.state == *state)
            .map(|e| e.info)
    }

    /// Record an evaluation of `state` searched to `depth`.
    ///
    /// Inserts a new entry, or overwrites the entry of a state-equal key in
    /// place (size and geometry unchanged). Overwrites require the new
    /// depth to be strictly greater than the stored one; that is the
    /// caller's contract, checked in debug builds and silently accepted in
    /// release. A fresh insertion that would push the load factor above 1
    /// first doubles the bucket array and rehashes every entry.
    pub fn add(&mut self, state: S, depth: u32, value: i32) {
        let idx = self.bucket_index(&state, self.buckets.len());
        if let Some(entry) = self.buckets[idx].iter_mut().find(|e| e.state == state) {
            debug_assert!(
                depth > entry.info.depth,
                "overwrite requires a strictly deeper search ({} <= {})",
                depth,
                entry.info.depth
            );
            entry.info = StateInfo { value, depth };
            return;
        }

        self.len += 1;
        if self.len > self.buckets.len() {
            self.grow();
        }
        let idx = self.bucket_index(&state, self.buckets.len());
        self.buckets[idx].push(Entry {
            state,
            info: StateInfo { value, depth },
        });
    }

    /// Estimate clustering: the normalized second moment of chain lengths
    /// over a fixed number of pseudo-randomly probed buckets. With a hash
    /// that scatters uniformly this is around 1.0; higher values mean
    /// chain pile-up and worse lookup performance.
    ///
    /// Diagnostic only — the probe stride degenerates on some bucket
    /// counts, so treat the number as an indicator, not a measurement.
    #[must_use]
    pub fn estimate_clustering(&self) -> f64 {
        const SAMPLES: usize = 500;
        const STRIDE: usize = 82_728_353;

        let m = self.buckets.len();
        let n = self.len;
        if n == 0 {
            return 0.0;
        }
        let mut sum_sq = 0.0;
        for i in 0..SAMPLES {
            let j = i.wrapping_mul(STRIDE) % m;
            let chain = self.buckets[j].len();
            sum_sq += (chain * chain) as f64;
        }
        let alpha = n as f64 / m as f64;
        sum_sq / (SAMPLES as f64 * alpha * (1.0 - 1.0 / m as f64 + alpha))
    }

    /// Double the bucket array and rehash every entry under the new
    /// modulus. The new array is fully built before it replaces the old
    /// one.
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut new_buckets: Vec<Vec<Entry<S>>> = Vec::with_capacity(new_count);
        new_buckets.resize_with(new_count, Vec::new);

        for entry in self.buckets.iter_mut().flat_map(|chain| chain.drain(..)) {
            let idx = (self.hash_builder.hash_one(&entry.state) % new_count as u64) as usize;
            new_buckets[idx].push(entry);
        }
        self.buckets = new_buckets;
    }

    #[inline]
    fn bucket_index(&self, state: &S, bucket_count: usize) -> usize {
        (self.hash_builder.hash_one(state) % bucket_count as u64) as usize
    }

    /// Check the class invariants: bucket residency, key uniqueness, load
    /// factor, and the size counter. Test support.
    #[cfg(test)]
    fn invariants_hold(&self) -> bool {
        let m = self.buckets.len();
        let mut counted = 0;
        for (i, chain) in self.buckets.iter().enumerate() {
            for (j, entry) in chain.iter().enumerate() {
                if self.bucket_index(&entry.state, m) != i {
                    return false;
                }
                if chain[..j].iter().any(|other| other.state == entry.state) {
                    return false;
                }
                counted += 1;
            }
        }
        counted == self.len && self.len <= m
    }
}

impl<S: Eq + Hash> Default for TranspositionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
