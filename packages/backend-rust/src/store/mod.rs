//! Tally persistence
//!
//! The quiz core only ever sees snapshots; the store is the single shared
//! mutable resource and must increment atomically per word.

pub mod memory;
pub mod sqlite;

use std::collections::HashMap;

use async_trait::async_trait;
use wordjet_algo::{AnswerDirection, WordTally};

use crate::dictionary::Dictionary;

pub use memory::MemoryTallyStore;
pub use sqlite::SqliteTallyStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
    #[error("upsert for {word} touched {rows} rows")]
    UnexpectedRowCount { word: String, rows: u64 },
    #[error("stored counter for {word} is negative")]
    NegativeCount { word: String },
}

#[async_trait]
pub trait TallyStore: Send + Sync {
    /// Every stored (up, down) pair keyed by word
    async fn get_all(&self) -> Result<HashMap<String, (u64, u64)>, StoreError>;

    /// Add exactly one to the word's up or down counter
    async fn increment(&self, word: &str, direction: AnswerDirection) -> Result<(), StoreError>;
}

/// Snapshot in dictionary order; unanswered words default to (0, 0) and
/// stored words missing from the dictionary are dropped.
pub async fn read_tallies(
    store: &dyn TallyStore,
    dictionary: &Dictionary,
) -> Result<Vec<WordTally>, StoreError> {
    let stored = store.get_all().await?;

    Ok(dictionary
        .words()
        .iter()
        .map(|word| {
            let (up, down) = stored.get(word).copied().unwrap_or((0, 0));
            WordTally::new(word.clone(), up, down)
        })
        .collect())
}
