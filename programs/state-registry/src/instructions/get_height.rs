use crate::state::StateHistory;
use crate::utils::accounts::load_optional;
use crate::utils::constants::STATE_HISTORY_SEED;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetHeight<'info> {
    /// CHECK: may not exist yet; the address is pinned by the seeds and the
    /// data is validated by `load_optional`.
    #[account(
        seeds = [STATE_HISTORY_SEED, owner.as_ref()],
        bump
    )]
    pub state_history: UncheckedAccount<'info>,
}

/// Height of `owner`'s history, zero when the owner has never appended.
pub fn resolve_height(history: Option<&StateHistory>, owner: &Pubkey) -> Result<u64> {
    if let Some(history) = history {
        history.ensure_owner(owner)?;
    }
    Ok(StateHistory::height_of(history))
}

pub fn get_height(ctx: Context<GetHeight>, owner: Pubkey) -> Result<u64> {
    let history = load_optional::<StateHistory>(&ctx.accounts.state_history)?;
    resolve_height(history.as_ref(), &owner)
}
