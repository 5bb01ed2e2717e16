use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No readable image for slot {slot} after {attempts} attempts")]
    NoImage { slot: usize, attempts: u32 },

    #[error("Input closed before image {slot} was loaded")]
    InputClosed { slot: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
