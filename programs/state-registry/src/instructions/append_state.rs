//! Append path of the registry.
//!
//! The signer is the owner. Its history account is created on first use and
//! the new entry is allocated at the PDA derived from the pre-call height, so
//! two appends can never target the same entry account. The Solana runtime
//! write-locks the history account for the duration of the transaction, which
//! serializes concurrent appends by the same owner.

use crate::state::{StateEntry, StateHistory};
use crate::utils::constants::{ANCHOR_DISCRIMINATOR_LEN, STATE_ENTRY_SEED, STATE_HISTORY_SEED};
use crate::utils::events::{StateAppended, StateHistoryCreated};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(value: Vec<u8>)]
pub struct AppendState<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR_LEN + StateHistory::INIT_SPACE,
        seeds = [STATE_HISTORY_SEED, owner.key().as_ref()],
        bump,
    )]
    pub state_history: Account<'info, StateHistory>,

    /// Entry slot for index `state_history.height`. `init` fails if the account
    /// already exists, so a stored entry can never be overwritten.
    #[account(
        init,
        payer = owner,
        space = StateEntry::space_for(value.len()),
        seeds = [STATE_ENTRY_SEED, owner.key().as_ref(), &state_history.height.to_le_bytes()],
        bump,
    )]
    pub state_entry: Account<'info, StateEntry>,

    pub system_program: Program<'info, System>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppendBumps {
    pub state_history: u8,
    pub state_entry: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppendReceipt {
    pub index: u64,
    pub height: u64,
    pub created: bool,
}

/// Applies an append to already-loaded accounts.
///
/// The height is advanced before the entry is written; if that fails neither
/// account is modified.
pub fn apply_append(
    history: &mut StateHistory,
    entry: &mut StateEntry,
    owner: Pubkey,
    value: Vec<u8>,
    bumps: AppendBumps,
    timestamp: i64,
) -> Result<AppendReceipt> {
    let created = !history.is_initialized();
    history.initialize(owner, bumps.state_history, timestamp);
    history.ensure_owner(&owner)?;

    let index = history.record_append(timestamp)?;
    entry.write(owner, index, bumps.state_entry, timestamp, value);

    Ok(AppendReceipt {
        index,
        height: history.height,
        created,
    })
}

pub fn append_state(ctx: Context<AppendState>, value: Vec<u8>) -> Result<()> {
    let timestamp_now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let value_len = value.len() as u32;
    let bumps = AppendBumps {
        state_history: ctx.bumps.state_history,
        state_entry: ctx.bumps.state_entry,
    };

    let receipt = apply_append(
        &mut ctx.accounts.state_history,
        &mut ctx.accounts.state_entry,
        owner,
        value,
        bumps,
        timestamp_now,
    )?;

    if receipt.created {
        emit!(StateHistoryCreated {
            owner,
            state_history: ctx.accounts.state_history.key(),
            timestamp: timestamp_now,
        });
    }

    msg!("State appended: owner={} index={}", owner, receipt.index);

    emit!(StateAppended {
        owner,
        index: receipt.index,
        height: receipt.height,
        value_len,
        timestamp: timestamp_now,
    });

    Ok(())
}
