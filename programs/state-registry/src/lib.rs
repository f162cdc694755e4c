#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("7RquSKY5VVNjLQxG8UsjcmqyGFcdsur5a2DskZAwbBLx");

#[program]
pub mod state_registry {
    use super::*;

    /// Appends `value` to the signer's history at index `height(signer)`.
    pub fn append_state(ctx: Context<AppendState>, value: Vec<u8>) -> Result<()> {
        instructions::append_state(ctx, value)
    }

    /// Number of entries recorded for `owner`. Zero for unknown owners.
    pub fn get_height(ctx: Context<GetHeight>, owner: Pubkey) -> Result<u64> {
        instructions::get_height(ctx, owner)
    }

    /// Value appended at `index` by `owner`. Fails with `OutOfRange` for
    /// `index >= height(owner)`.
    pub fn get_state_at(ctx: Context<GetStateAt>, owner: Pubkey, index: u64) -> Result<Vec<u8>> {
        instructions::get_state_at(ctx, owner, index)
    }

    /// Most recently appended value for `owner`.
    pub fn get_latest_state(ctx: Context<GetLatestState>, owner: Pubkey) -> Result<Vec<u8>> {
        instructions::get_latest_state(ctx, owner)
    }
}
