//! Event definitions for the trading agent program
//!
//! Events are emitted for indexing and off-chain tracking.

use anchor_lang::prelude::*;

/// Emitted when an agent record is created
#[event]
pub struct AgentInitialized {
    /// The agent record PDA address
    pub agent: Pubkey,
    /// The admin bound to the record
    pub admin: Pubkey,
    /// Unix timestamp of creation
    pub timestamp: i64,
}

/// Emitted when the admin rotates the TEE key
#[event]
pub struct TeeKeyUpdated {
    /// The agent record PDA address
    pub agent: Pubkey,
    /// Key bound before this update (all zeroes if unset)
    pub old_tee_key: Pubkey,
    /// Key bound after this update
    pub new_tee_key: Pubkey,
    /// Unix timestamp of update
    pub timestamp: i64,
}

/// Emitted when the admin revokes the TEE key
#[event]
pub struct TeeKeyRevoked {
    /// The agent record PDA address
    pub agent: Pubkey,
    /// The revoked key
    pub revoked_tee_key: Pubkey,
    /// Unix timestamp of revocation
    pub timestamp: i64,
}
