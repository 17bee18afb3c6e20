use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetcareError {
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Task {index} not found for {pet}")]
    TaskNotFound { pet: String, index: usize },

    #[error("Unknown pet type: {0}")]
    UnknownSpecies(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PetcareError>;
