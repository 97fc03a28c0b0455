//! State structures for trading-agent program
//!
//! Defines the on-chain account owned by trading-agent. The transition rules
//! are methods on the account so the instruction handlers and off-chain
//! models apply the same checks.

use anchor_lang::prelude::*;
use trading_agent_common::{
    constants::*,
    error::TradingAgentError,
};

/// An admin's agent record
///
/// PDA: `["agent", admin]`. The bump is recomputed by the seeds constraint and
/// not stored, keeping the layout at exactly two keys.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct AgentData {
    /// The account that created this record; never changes
    pub admin: Pubkey,

    /// Currently trusted execution key (`UNSET_TEE_KEY` when none is bound)
    pub tee_key: Pubkey,
}

impl AgentData {
    pub const fn space() -> usize {
        AGENT_DATA_SIZE
    }

    /// A freshly created record: `admin` set, no TEE key bound
    pub fn new(admin: Pubkey) -> Self {
        Self {
            admin,
            tee_key: UNSET_TEE_KEY,
        }
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    pub fn has_tee_key(&self) -> bool {
        self.tee_key != UNSET_TEE_KEY
    }

    /// Bind `tee_key`, returning the previously bound key
    pub fn set_tee_key(&mut self, caller: &Pubkey, tee_key: Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*caller, self.admin, TradingAgentError::Unauthorized);

        Ok(std::mem::replace(&mut self.tee_key, tee_key))
    }

    /// Unbind the current TEE key, returning it
    pub fn clear_tee_key(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*caller, self.admin, TradingAgentError::Unauthorized);
        require!(self.has_tee_key(), TradingAgentError::TeeKeyNotSet);

        Ok(std::mem::replace(&mut self.tee_key, UNSET_TEE_KEY))
    }
}
