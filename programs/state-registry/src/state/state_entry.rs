use crate::error::RegistryError;
use crate::utils::constants::{ANCHOR_DISCRIMINATOR_LEN, STATE_ENTRY_SEED, VEC_LEN_PREFIX};
use anchor_lang::prelude::*;

/// A single appended state value.
///
/// Written once by the append that reserved `index` and never modified
/// afterwards. The value is opaque to the program.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct StateEntry {
    pub owner: Pubkey,
    pub index: u64,
    pub appended_at: i64,
    pub bump: u8,
    pub value: Vec<u8>,
}

impl StateEntry {
    /// Borsh size of every field except the value bytes themselves.
    pub const FIXED_SPACE: usize = 32 + 8 + 8 + 1 + VEC_LEN_PREFIX;

    /// Account allocation needed to store a value of `value_len` bytes.
    pub const fn space_for(value_len: usize) -> usize {
        ANCHOR_DISCRIMINATOR_LEN + Self::FIXED_SPACE + value_len
    }

    pub fn address(owner: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[STATE_ENTRY_SEED, owner.as_ref(), &index.to_le_bytes()],
            &crate::ID,
        )
    }

    pub fn write(&mut self, owner: Pubkey, index: u64, bump: u8, timestamp: i64, value: Vec<u8>) {
        self.owner = owner;
        self.index = index;
        self.appended_at = timestamp;
        self.bump = bump;
        self.value = value;
    }

    pub fn ensure_matches(&self, owner: &Pubkey, index: u64) -> Result<()> {
        require_keys_eq!(self.owner, *owner, RegistryError::EntryMismatch);
        require!(self.index == index, RegistryError::EntryMismatch);
        Ok(())
    }
}
