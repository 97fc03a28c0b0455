//! trading-agent-common: Shared primitives for the trading agent program
//!
//! This crate provides what both the on-chain program and off-chain
//! collaborators need to agree on:
//! - Seeds, sizes and the deployed program id
//! - Error codes
//! - Events emitted by the program
//! - Deterministic agent record address derivation
//!
//! NOTE: This is a library crate, not a program. It does NOT have a declare_id!
//! The `AgentData` account struct lives in the program crate so Anchor's owner
//! check binds it to the trading agent program id.

pub mod address;
pub mod constants;
pub mod error;
pub mod events;

pub use address::*;
pub use constants::*;
pub use error::*;
pub use events::*;
