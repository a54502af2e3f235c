use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum StoreError {
    #[error("note not found")]
    NotFound,

    #[error("note is owned by a different user")]
    Unauthorized,
}
