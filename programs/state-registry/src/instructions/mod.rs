pub mod append_state;
pub mod get_height;
pub mod get_latest_state;
pub mod get_state_at;

pub use append_state::*;
pub use get_height::*;
pub use get_latest_state::*;
pub use get_state_at::*;
