//! Protocol constants for the trading agent program

use anchor_lang::prelude::*;
use solana_program::pubkey;

// ============================================================================
// Program ID
// ============================================================================

/// trading-agent program ID (must match `declare_id!` in the program crate)
pub const TRADING_AGENT_PROGRAM_ID: Pubkey = pubkey!("H5CtT4c2mmkcwSAWc4nWTFXjD9bQGgcag57WEwrucLwQ");

// ============================================================================
// PDA Seeds
// ============================================================================

/// Namespace seed for agent records
/// PDA: ["agent", admin.key()]
pub const AGENT_SEED: &[u8] = b"agent";

// ============================================================================
// Account Sizes
// ============================================================================

/// Anchor account discriminator length
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Size of a serialized public key
pub const PUBKEY_SIZE: usize = 32;

/// Agent record size
pub const AGENT_DATA_SIZE: usize = DISCRIMINATOR_SIZE + // discriminator
    PUBKEY_SIZE + // admin
    PUBKEY_SIZE; // tee_key

// ============================================================================
// Sentinels
// ============================================================================

/// Value of `tee_key` while no trusted execution key is bound
pub const UNSET_TEE_KEY: Pubkey = Pubkey::new_from_array([0u8; 32]);
