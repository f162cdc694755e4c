pub mod accounts;
pub mod constants;
pub mod events;
