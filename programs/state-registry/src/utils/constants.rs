/// Account layout constants
pub const ANCHOR_DISCRIMINATOR_LEN: usize = 8;
pub const VEC_LEN_PREFIX: usize = 4; // borsh u32 length prefix

/// Upper bound of a single instruction's return data (solana runtime limit)
pub const MAX_RETURN_DATA_LEN: usize = 1024;

/// PDA seed constants
pub const STATE_HISTORY_SEED: &[u8] = b"state_history";
pub const STATE_ENTRY_SEED: &[u8] = b"state_entry";
