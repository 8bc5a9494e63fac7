use serde::Serialize;
use wordjet_algo::AnswerDirection;

use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown word {0}")]
    UnknownWord(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordedAnswer {
    pub word: String,
    pub direction: AnswerDirection,
}

/// Validate the word against the dictionary, then bump exactly one counter
pub async fn record_answer(
    state: &AppState,
    word: &str,
    correct: bool,
) -> Result<RecordedAnswer, AnswerError> {
    if !state.dictionary().contains(word) {
        return Err(AnswerError::UnknownWord(word.to_string()));
    }

    let direction = AnswerDirection::from_correct(correct);
    state.store().increment(word, direction).await?;

    Ok(RecordedAnswer {
        word: word.to_string(),
        direction,
    })
}
