use store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Delete of an id that no trade currently has.
    #[error("Trade not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
