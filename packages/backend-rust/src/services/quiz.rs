use wordjet_algo::SampleError;

use crate::state::AppState;
use crate::store::{read_tallies, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Plan weights over the whole dictionary and draw one quiz batch
pub async fn build_quiz(state: &AppState) -> Result<Vec<String>, QuizError> {
    let tallies = read_tallies(state.store().as_ref(), state.dictionary()).await?;

    let batch = state.with_rng(|rng| {
        let weights = state.planner().plan(&tallies, rng);
        state.sampler().draw(&tallies, &weights, rng)
    })?;

    tracing::debug!(words = tallies.len(), batch = batch.len(), "quiz batch drawn");
    Ok(batch)
}
