use crate::error::RegistryError;
use crate::instructions::get_height::resolve_height;
use crate::instructions::get_state_at::resolve_state_at;
use crate::state::{StateEntry, StateHistory};
use crate::utils::accounts::load_optional;
use crate::utils::constants::STATE_HISTORY_SEED;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetLatestState<'info> {
    /// CHECK: may not exist yet; the address is pinned by the seeds and the
    /// data is validated by `load_optional`.
    #[account(
        seeds = [STATE_HISTORY_SEED, owner.as_ref()],
        bump
    )]
    pub state_history: UncheckedAccount<'info>,

    /// CHECK: the expected address depends on the stored height, so it is
    /// verified in the handler rather than through seeds.
    pub state_entry: UncheckedAccount<'info>,
}

/// Resolves the most recently appended value for `owner`.
pub fn resolve_latest_state(
    history: Option<&StateHistory>,
    entry_key: &Pubkey,
    entry: Option<StateEntry>,
    owner: &Pubkey,
) -> Result<Vec<u8>> {
    resolve_height(history, owner)?;
    let index = history
        .ok_or(RegistryError::OutOfRange)?
        .latest_index()?;

    let (expected_entry, _) = StateEntry::address(owner, index);
    require_keys_eq!(*entry_key, expected_entry, RegistryError::EntryMismatch);

    resolve_state_at(history, entry, owner, index)
}

pub fn get_latest_state(ctx: Context<GetLatestState>, owner: Pubkey) -> Result<Vec<u8>> {
    let history = load_optional::<StateHistory>(&ctx.accounts.state_history)?;
    let entry = load_optional::<StateEntry>(&ctx.accounts.state_entry)?;
    resolve_latest_state(
        history.as_ref(),
        ctx.accounts.state_entry.key,
        entry,
        &owner,
    )
}
