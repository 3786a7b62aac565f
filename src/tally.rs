//! Counting map on a faster (but not DoS-resistant) hash
use farmhash;
use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::{Hash, Hasher, BuildHasherDefault};

/// Act like a streaming farmhash
///
/// farmhash only hashes whole slices, so each write is folded into the running value by using
/// it as the seed. Strings hash as their bytes plus a terminator, which makes two writes.
pub struct FarmHasher(u64);

impl Default for FarmHasher {
    #[inline]
    fn default() -> FarmHasher { FarmHasher(0) }
}

impl Hasher for FarmHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = farmhash::hash64_with_seed(bytes, self.0);
    }
}

pub type Farm = BuildHasherDefault<FarmHasher>;
pub type FarmMap<X, Y> = HashMap<X, Y, Farm>;

/// How many times each key was seen
#[derive(Debug, Clone)]
pub struct Tally<K: Hash + Eq> {
    counts: FarmMap<K, usize>,
}

impl<K: Hash + Eq> Default for Tally<K> {
    fn default() -> Self {
        Tally { counts: FarmMap::default() }
    }
}

impl<K: Hash + Eq> Tally<K> {
    pub fn new() -> Self {
        Tally::default()
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).cloned().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of observations
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<K, usize> {
        self.counts.iter()
    }
}

impl<K: Hash + Eq + Ord> Tally<K> {
    /// Largest count first, ties broken by key so the listing is stable
    pub fn sorted_by_count(self) -> Vec<(K, usize)> {
        let mut pairs: Vec<(K, usize)> = self.counts.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        pairs
    }

    pub fn sorted_by_key(self) -> Vec<(K, usize)> {
        let mut pairs: Vec<(K, usize)> = self.counts.into_iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

impl<K: Hash + Eq> Extend<K> for Tally<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.add(key);
        }
    }
}

impl<K: Hash + Eq> ::std::iter::FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(keys);
        tally
    }
}
