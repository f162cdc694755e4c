use anchor_lang::prelude::*;

#[event]
pub struct StateHistoryCreated {
    pub owner: Pubkey,
    pub state_history: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct StateAppended {
    pub owner: Pubkey,
    pub index: u64,
    pub height: u64,
    pub value_len: u32,
    pub timestamp: i64,
}
