//! Rotate the TEE key of an agent record

use anchor_lang::prelude::*;

use crate::state::AgentData;
use trading_agent_common::{
    constants::*,
    error::TradingAgentError,
    events::TeeKeyUpdated,
};

/// Arguments for `update_tee_key`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpdateTeeKeyArgs {
    /// The key to bind
    pub tee_key: Pubkey,
}

/// Accounts for rotating the TEE key
///
/// Anchor deserializes every account before evaluating constraints, so a
/// missing record fails with `AccountNotInitialized` ahead of the admin check.
#[derive(Accounts)]
pub struct UpdateTeeKey<'info> {
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

pub fn handler(ctx: Context<UpdateTeeKey>, args: UpdateTeeKeyArgs) -> Result<()> {
    let clock = Clock::get()?;
    let signer = ctx.accounts.signer.key();
    let agent = &mut ctx.accounts.agent_data;

    let old_tee_key = agent.set_tee_key(&signer, args.tee_key)?;

    emit!(TeeKeyUpdated {
        agent: agent.key(),
        old_tee_key,
        new_tee_key: args.tee_key,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "TEE key updated: agent={}, old={}, new={}",
        agent.key(),
        old_tee_key,
        args.tee_key
    );

    Ok(())
}
