use std::{collections::HashSet, num::NonZeroUsize, thread};

use chashmap::CHashMap;
use log::debug;

use crate::canonical_key::canonical_key;

pub type WordSet = HashSet<String>;

/// Two or more words sharing one canonical key.
pub type AnagramGroup = Vec<String>;

/// Buckets words by canonical key. Insertion takes `&self`, so one index can
/// be filled from several threads at once.
#[derive(Debug)]
pub struct AnagramIndex {
    hashmap: CHashMap<String, Vec<String>>,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self { hashmap: CHashMap::new() }
    }

    pub fn insert(&self, word: &str) {
        let insert = || vec![word.to_owned()];
        let update = |old: &mut Vec<String>| old.push(word.to_owned());

        self.hashmap.upsert(canonical_key(word), insert, update);
    }

    /// Fills a new index from `words`, splitting them between `workers` scoped threads.
    pub fn build(words: &WordSet, workers: usize) -> Self {
        let index = Self::new();
        if words.is_empty() {
            return index;
        }

        let words: Vec<&String> = words.iter().collect();
        let workers = workers.clamp(1, words.len());
        let chunk_size = (words.len() + workers - 1) / workers;
        debug!("indexing {} words on {} workers", words.len(), workers);

        thread::scope(|scope| {
            for chunk in words.chunks(chunk_size) {
                let index = &index;
                scope.spawn(move || {
                    for word in chunk {
                        index.insert(word);
                    }
                });
            }
        });
        index
    }

    /// Number of distinct canonical keys seen so far.
    pub fn len(&self) -> usize {
        self.hashmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the index, keeping only buckets with at least two words.
    pub fn into_groups(self) -> Vec<AnagramGroup> {
        let keys = self.len();
        let groups: Vec<AnagramGroup> = self.hashmap.into_iter()
            .map(|(_, group)| group)
            .filter(|group| group.len() > 1)
            .collect();
        debug!("{} of {} keys form anagram groups", groups.len(), keys);
        groups
    }
}

impl Default for AnagramIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Groups `words` into anagram sets using all available cores.
///
/// Words whose key is unique produce no group. Neither the order of groups nor
/// the order of words inside a group is stable between calls.
pub fn find_groups(words: &WordSet) -> Vec<AnagramGroup> {
    find_groups_with_workers(words, default_workers())
}

pub fn find_groups_with_workers(words: &WordSet, workers: usize) -> Vec<AnagramGroup> {
    AnagramIndex::build(words, workers).into_groups()
}

pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
