use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Requested index is outside the owner's state history")]
    OutOfRange,
    #[msg("State history height overflowed")]
    HeightOverflow,
    #[msg("State entry account does not match the requested owner and index")]
    EntryMismatch,
    #[msg("State history account does not belong to the requested owner")]
    HistoryOwnerMismatch,
    #[msg("Account is not owned by the state registry program")]
    InvalidAccountOwner,
    #[msg("State value exceeds the instruction return data limit")]
    ReturnDataTooLarge,
}
