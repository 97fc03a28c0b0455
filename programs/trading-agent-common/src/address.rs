//! Agent record address derivation
//!
//! Every collaborator (the program's seeds constraints, clients, the host
//! ledger model) locates a record the same way, from the admin key alone.

use anchor_lang::prelude::*;

use crate::constants::{AGENT_SEED, TRADING_AGENT_PROGRAM_ID};

/// Derive the agent record PDA and its bump for `owner` under `program_id`
pub fn derive_agent_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AGENT_SEED, owner.as_ref()], program_id)
}

/// Agent record address for `owner` under the deployed program id
pub fn agent_address(owner: &Pubkey) -> Pubkey {
    derive_agent_address(owner, &TRADING_AGENT_PROGRAM_ID).0
}

/// Check a cached `(address, bump)` pair without searching for the bump again
pub fn verify_agent_address(
    address: &Pubkey,
    owner: &Pubkey,
    bump: u8,
    program_id: &Pubkey,
) -> bool {
    Pubkey::create_program_address(&[AGENT_SEED, owner.as_ref(), &[bump]], program_id)
        .map(|derived| derived == *address)
        .unwrap_or(false)
}
