use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name}")]
    StateNotFound { name: &'static str },
    #[error("Compute not found: {name}")]
    ComputeNotFound { name: &'static str },
}

impl Error {
    pub fn state_not_found(name: &'static str) -> Self {
        Self::StateNotFound { name }
    }

    pub fn compute_not_found(name: &'static str) -> Self {
        Self::ComputeNotFound { name }
    }
}
