use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use wordjet_algo::AnswerDirection;

use super::{StoreError, TallyStore};

#[derive(Debug, Default)]
struct Counters {
    up: AtomicU64,
    down: AtomicU64,
}

impl Counters {
    fn bump(&self, direction: AnswerDirection) {
        let counter = match direction {
            AnswerDirection::Up => &self.up,
            AnswerDirection::Down => &self.down,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> (u64, u64) {
        (self.up.load(Ordering::Relaxed), self.down.load(Ordering::Relaxed))
    }
}

/// Process-local store. Known words are bumped under the shared read lock,
/// so concurrent answers only contend on their own word's counters.
#[derive(Debug, Default)]
pub struct MemoryTallyStore {
    tallies: RwLock<HashMap<String, Counters>>,
}

impl MemoryTallyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tallies<I, S>(tallies: I) -> Self
    where
        I: IntoIterator<Item = (S, u64, u64)>,
        S: Into<String>,
    {
        let map = tallies
            .into_iter()
            .map(|(word, up, down)| {
                (
                    word.into(),
                    Counters {
                        up: AtomicU64::new(up),
                        down: AtomicU64::new(down),
                    },
                )
            })
            .collect();
        Self {
            tallies: RwLock::new(map),
        }
    }
}

#[async_trait]
impl TallyStore for MemoryTallyStore {
    async fn get_all(&self) -> Result<HashMap<String, (u64, u64)>, StoreError> {
        let guard = self.tallies.read();
        Ok(guard
            .iter()
            .map(|(word, counters)| (word.clone(), counters.snapshot()))
            .collect())
    }

    async fn increment(&self, word: &str, direction: AnswerDirection) -> Result<(), StoreError> {
        if let Some(counters) = self.tallies.read().get(word) {
            counters.bump(direction);
            return Ok(());
        }

        self.tallies
            .write()
            .entry(word.to_string())
            .or_default()
            .bump(direction);
        Ok(())
    }
}
