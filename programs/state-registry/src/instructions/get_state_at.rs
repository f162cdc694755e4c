use crate::error::RegistryError;
use crate::instructions::get_height::resolve_height;
use crate::state::{StateEntry, StateHistory};
use crate::utils::accounts::load_optional;
use crate::utils::constants::{
    MAX_RETURN_DATA_LEN, STATE_ENTRY_SEED, STATE_HISTORY_SEED, VEC_LEN_PREFIX,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(owner: Pubkey, index: u64)]
pub struct GetStateAt<'info> {
    /// CHECK: may not exist yet; the address is pinned by the seeds and the
    /// data is validated by `load_optional`.
    #[account(
        seeds = [STATE_HISTORY_SEED, owner.as_ref()],
        bump
    )]
    pub state_history: UncheckedAccount<'info>,

    /// CHECK: absent for out-of-range indices; the address is pinned by the
    /// seeds and the data is validated by `load_optional`.
    #[account(
        seeds = [STATE_ENTRY_SEED, owner.as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub state_entry: UncheckedAccount<'info>,
}

/// Resolves the value stored at `index` for `owner`.
///
/// The range check runs against the history height before the entry is
/// inspected, so an invalid index always reports `OutOfRange`. The value is
/// returned Borsh-encoded, so its length prefix counts against the runtime
/// return data limit.
pub fn resolve_state_at(
    history: Option<&StateHistory>,
    entry: Option<StateEntry>,
    owner: &Pubkey,
    index: u64,
) -> Result<Vec<u8>> {
    resolve_height(history, owner)?;
    history
        .ok_or(RegistryError::OutOfRange)?
        .check_index(index)?;

    let entry = entry.ok_or(RegistryError::EntryMismatch)?;
    entry.ensure_matches(owner, index)?;

    require!(
        entry.value.len() + VEC_LEN_PREFIX <= MAX_RETURN_DATA_LEN,
        RegistryError::ReturnDataTooLarge
    );

    Ok(entry.value)
}

pub fn get_state_at(ctx: Context<GetStateAt>, owner: Pubkey, index: u64) -> Result<Vec<u8>> {
    let history = load_optional::<StateHistory>(&ctx.accounts.state_history)?;
    let entry = load_optional::<StateEntry>(&ctx.accounts.state_entry)?;
    resolve_state_at(history.as_ref(), entry, &owner, index)
}
