use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("could not allocate {requested} bytes for the output buffer")]
    Allocation { requested: usize },
    #[error("could not write diagnostic: {0}")]
    Io(#[from] std::io::Error),
}
