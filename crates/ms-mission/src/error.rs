use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("failed to start search worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

pub type MissionResult<T> = Result<T, MissionError>;
