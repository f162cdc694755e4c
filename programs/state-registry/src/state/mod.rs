pub mod state_entry;
pub mod state_history;

pub use state_entry::*;
pub use state_history::*;
