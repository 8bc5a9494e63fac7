use wordjet_algo::{build_report, StatsError, StatsReport};

use crate::state::AppState;
use crate::store::{read_tallies, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum StatsServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Report(#[from] StatsError),
}

pub async fn build_stats(state: &AppState) -> Result<StatsReport, StatsServiceError> {
    let tallies = read_tallies(state.store().as_ref(), state.dictionary()).await?;

    let weights = state.with_rng(|rng| state.planner().plan(&tallies, rng));

    Ok(build_report(&tallies, &weights)?)
}
