//! Error codes for the trading agent program
//!
//! Application errors start at Anchor's custom offset (6000). Two failures
//! the program relies on are deliberately NOT part of this enum:
//!
//! - Creating a record at an occupied address fails inside the system
//!   program's allocate step, before the handler runs. Clients observe a
//!   transaction submission failure, not a program error code.
//! - Touching a record that was never created fails during account
//!   deserialization with Anchor's built-in `AccountNotInitialized` (3012).
//!
//! ## Code Ranges
//! - 6000-6009: Authorization errors
//! - 6010-6019: TEE key state errors (reserved)

use anchor_lang::prelude::*;

/// Error codes for trading_agent program
#[error_code]
pub enum TradingAgentError {
    /// Signer is not the admin recorded on the agent account
    #[msg("Signer is not the agent admin")]
    Unauthorized, // 6000

    /// Revocation requested while no TEE key is bound
    #[msg("No TEE key is set")]
    TeeKeyNotSet, // 6001
}
