//! Create an agent record

use anchor_lang::prelude::*;

use crate::state::AgentData;
use trading_agent_common::{
    constants::*,
    events::AgentInitialized,
};

/// Accounts for creating an agent record
#[derive(Accounts)]
pub struct InitializeAgent<'info> {
    /// The prospective admin, pays for the record
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The agent record PDA to be created
    ///
    /// `init` allocates through the system program, which rejects an address
    /// that is already in use before this handler runs.
    #[account(
        init,
        payer = signer,
        space = AgentData::space(),
        seeds = [AGENT_SEED, signer.key().as_ref()],
        bump,
    )]
    pub agent_data: Account<'info, AgentData>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeAgent>) -> Result<()> {
    let clock = Clock::get()?;
    let admin = ctx.accounts.signer.key();
    let agent = &mut ctx.accounts.agent_data;

    agent.set_inner(AgentData::new(admin));

    emit!(AgentInitialized {
        agent: agent.key(),
        admin,
        timestamp: clock.unix_timestamp,
    });

    msg!("Agent initialized: agent={}, admin={}", agent.key(), admin);

    Ok(())
}
