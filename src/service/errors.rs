use thiserror::Error;

use crate::store::StoreError;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum NoteServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
