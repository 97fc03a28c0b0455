//! Revoke the TEE key of an agent record

use anchor_lang::prelude::*;

use crate::state::AgentData;
use trading_agent_common::{
    constants::*,
    error::TradingAgentError,
    events::TeeKeyRevoked,
};

/// Accounts for revoking the TEE key
#[derive(Accounts)]
pub struct RevokeTeeKey<'info> {
    /// The record admin (must sign)
    #[account(
        constraint = agent_data.is_admin(&signer.key()) @ TradingAgentError::Unauthorized
    )]
    pub signer: Signer<'info>,

    /// The agent record to update
    #[account(
        mut,
        seeds = [AGENT_SEED, agent_data.admin.as_ref()],
        bump,
    )]
    pub agent_data: Account<'info, AgentData>,
}

pub fn handler(ctx: Context<RevokeTeeKey>) -> Result<()> {
    let clock = Clock::get()?;
    let signer = ctx.accounts.signer.key();
    let agent = &mut ctx.accounts.agent_data;

    let revoked_tee_key = agent.clear_tee_key(&signer)?;

    emit!(TeeKeyRevoked {
        agent: agent.key(),
        revoked_tee_key,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "TEE key revoked: agent={}, revoked={}",
        agent.key(),
        revoked_tee_key
    );

    Ok(())
}
