//! Instruction handlers for trading-agent

pub mod initialize_agent;
pub mod update_tee_key;
pub mod revoke_tee_key;

pub use initialize_agent::*;
pub use update_tee_key::*;
pub use revoke_tee_key::*;
