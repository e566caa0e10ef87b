use crate::progression::ProgressionError;

/// Failures surfaced to the request layer
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("tracking not found")]
    TrackingNotFound,

    #[error("habit not found")]
    HabitNotFound,

    #[error("tracking is restricted to its owner")]
    Unauthorized,

    #[error("tracking has no usable start date")]
    InvalidStartDate,

    #[error("you have reached the maximum number of habits you can track ({tracked}/{maximum})")]
    CapacityExceeded { tracked: u32, maximum: u32 },

    #[error(transparent)]
    Progression(#[from] ProgressionError),
}
