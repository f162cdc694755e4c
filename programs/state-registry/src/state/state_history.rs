use crate::error::RegistryError;
use crate::utils::constants::STATE_HISTORY_SEED;
use anchor_lang::prelude::*;

/// Per-owner counter of appended state entries.
///
/// # Layout Strategy
///
/// The history account only tracks how many entries exist. Every value lives in
/// its own `StateEntry` PDA addressed by `(owner, index)`, so an append never
/// reallocates or rewrites previously stored data and the account stays a
/// fixed size for the lifetime of the owner.
///
/// # Lifecycle
///
/// Created lazily by the owner's first append. An owner without this account
/// has height zero. No instruction closes or shrinks it.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct StateHistory {
    /// Identity this history is keyed by. `Pubkey::default()` until the first
    /// append initialises the account.
    pub owner: Pubkey,

    /// Number of entries recorded for `owner`, which is also the index the
    /// next append will be written at.
    pub height: u64,

    pub created_at: i64,
    pub last_appended_at: i64,

    /// Cached PDA bump.
    pub bump: u8,
}

impl StateHistory {
    pub fn address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[STATE_HISTORY_SEED, owner.as_ref()], &crate::ID)
    }

    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Binds a freshly allocated account to its owner. Accounts that are
    /// already initialised are left untouched.
    pub fn initialize(&mut self, owner: Pubkey, bump: u8, timestamp: i64) {
        if self.is_initialized() {
            return;
        }
        self.owner = owner;
        self.height = 0;
        self.created_at = timestamp;
        self.last_appended_at = 0;
        self.bump = bump;
    }

    pub fn ensure_owner(&self, owner: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *owner, RegistryError::HistoryOwnerMismatch);
        Ok(())
    }

    /// Reserves the next index and bumps the height. Returns the reserved
    /// index. Nothing is modified when the height cannot grow.
    pub fn record_append(&mut self, timestamp: i64) -> Result<u64> {
        let index = self.height;
        self.height = index
            .checked_add(1)
            .ok_or(RegistryError::HeightOverflow)?;
        self.last_appended_at = timestamp;
        Ok(index)
    }

    pub fn check_index(&self, index: u64) -> Result<()> {
        require!(index < self.height, RegistryError::OutOfRange);
        Ok(())
    }

    pub fn latest_index(&self) -> Result<u64> {
        self.height
            .checked_sub(1)
            .ok_or_else(|| RegistryError::OutOfRange.into())
    }

    /// Height for an owner whose history account may not exist yet.
    pub fn height_of(history: Option<&Self>) -> u64 {
        history.map_or(0, |history| history.height)
    }
}
