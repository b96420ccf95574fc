use ms_core::CoreError;
use ms_mission::MissionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Mission(#[from] MissionError),

    #[error("{got} spawn positions supplied for {expected} entities")]
    SpawnCountMismatch { expected: usize, got: usize },

    #[error("spawn position {0} lies outside the grid")]
    SpawnOutOfBounds(ms_core::Point),

    #[error("obstacles cover every cell of the {0} grid")]
    NoFreeCell(ms_core::Size),
}

pub type SimResult<T> = Result<T, SimError>;
