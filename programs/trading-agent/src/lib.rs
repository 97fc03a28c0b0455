//! trading-agent: On-chain trading agent record
//!
//! Each admin owns exactly one agent record, a PDA derived from
//! `["agent", admin]`. The record binds the admin to a rotatable trusted
//! execution (TEE) key:
//! - `initialize_agent` creates the record once per admin
//! - `update_tee_key` rotates the key (admin only)
//! - `revoke_tee_key` unbinds the key (admin only)

// Suppress cfg warnings from Anchor/Solana macros (toolchain version mismatch)
#![allow(unexpected_cfgs)]
// Suppress ambiguous glob re-export warnings (handlers have same name in different modules)
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::AgentData;
pub use trading_agent_common::{
    constants::*,
    error::TradingAgentError,
    events::*,
};

declare_id!("H5CtT4c2mmkcwSAWc4nWTFXjD9bQGgcag57WEwrucLwQ");

#[program]
pub mod trading_agent {
    use super::*;

    /// Create the agent record for the signer
    ///
    /// The signer becomes the permanent admin and pays for the account.
    /// Fails at account allocation if the signer already has a record.
    pub fn initialize_agent(ctx: Context<InitializeAgent>) -> Result<()> {
        instructions::initialize_agent::handler(ctx)
    }

    /// Rotate the TEE key bound to an agent record
    ///
    /// # Arguments
    /// * `args.tee_key` - The key to bind, replacing the current one
    pub fn update_tee_key(ctx: Context<UpdateTeeKey>, args: UpdateTeeKeyArgs) -> Result<()> {
        instructions::update_tee_key::handler(ctx, args)
    }

    /// Unbind the TEE key from an agent record
    ///
    /// Used when the execution environment is compromised or retired.
    pub fn revoke_tee_key(ctx: Context<RevokeTeeKey>) -> Result<()> {
        instructions::revoke_tee_key::handler(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_id_matches_common_constant() {
        assert_eq!(crate::ID, TRADING_AGENT_PROGRAM_ID);
    }
}
