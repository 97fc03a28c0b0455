use anchor_lang::error::Error as ProgramError;
use anchor_lang::prelude::Pubkey;
use thiserror::Error;

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Allocation hit an occupied address. Raised below the program, so there
    /// is no program error code attached.
    #[error("Allocate: account {address} already in use")]
    AlreadyInitialized { address: Pubkey },

    /// Stored bytes are not an `AgentData` account
    #[error("account {address} does not hold an agent record")]
    Corrupt { address: Pubkey },

    #[error("program error: {0}")]
    Program(ProgramError),
}

impl From<ProgramError> for LedgerError {
    fn from(err: ProgramError) -> Self {
        LedgerError::Program(err)
    }
}

impl LedgerError {
    /// Numeric code as a client would decode it from a failed transaction
    pub fn program_error_code(&self) -> Option<u32> {
        match self {
            LedgerError::Program(ProgramError::AnchorError(e)) => Some(e.error_code_number),
            _ => None,
        }
    }

    pub fn is_already_initialized(&self) -> bool {
        matches!(self, LedgerError::AlreadyInitialized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::ErrorCode;
    use trading_agent::TradingAgentError;

    #[test]
    fn test_storage_tier_has_no_program_code() {
        let err = LedgerError::AlreadyInitialized {
            address: Pubkey::new_unique(),
        };

        assert!(err.is_already_initialized());
        assert_eq!(err.program_error_code(), None);
        assert!(err.to_string().contains("already in use"));
    }

    #[test]
    fn test_program_tier_codes() {
        let missing = LedgerError::from(ProgramError::from(ErrorCode::AccountNotInitialized));
        let denied = LedgerError::from(ProgramError::from(TradingAgentError::Unauthorized));

        assert_eq!(missing.program_error_code(), Some(3012));
        assert_eq!(denied.program_error_code(), Some(6000));
        assert!(!missing.is_already_initialized());
    }
}
