use ped_core::{PedError, PedestrianId};
use ped_field::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Grid(#[from] PedError),

    #[error(transparent)]
    Field(#[from] FieldError),

    /// Every neighbour is off-grid, an obstacle, or another pedestrian.  The
    /// tick loop treats this as "stay in place".
    #[error("{0} has no free neighbouring cell")]
    NoCandidateMove(PedestrianId),

    #[error("{0} is not on the grid")]
    UnknownPedestrian(PedestrianId),

    #[error("scenario JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
