//! Account storage abstraction

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

/// Key-value view of account storage: `address -> raw account data`
pub trait AgentStore {
    /// Current data at `address`, if an account exists there
    fn load(&self, address: &Pubkey) -> Option<Vec<u8>>;

    /// Allocate `address` with `data`, failing with
    /// [`LedgerError::AlreadyInitialized`] if it is occupied.
    ///
    /// The existence check and the write must be one atomic step.
    fn create_if_absent(&self, address: Pubkey, data: Vec<u8>) -> LedgerResult<()>;

    /// Run `f` against the data at `address` (`None` if absent) and commit the
    /// modified data only if `f` returns `Ok`.
    ///
    /// No other write to `address` may interleave with `f`.
    fn update<T, F>(&self, address: &Pubkey, f: F) -> LedgerResult<T>
    where
        F: FnOnce(Option<&mut Vec<u8>>) -> LedgerResult<T>;
}

/// Process-local store for tests and simulation
#[derive(Debug, Default)]
pub struct InMemoryAgentStore {
    accounts: RwLock<HashMap<Pubkey, Vec<u8>>>,
}

impl InMemoryAgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

impl AgentStore for InMemoryAgentStore {
    fn load(&self, address: &Pubkey) -> Option<Vec<u8>> {
        self.accounts.read().get(address).cloned()
    }

    fn create_if_absent(&self, address: Pubkey, data: Vec<u8>) -> LedgerResult<()> {
        match self.accounts.write().entry(address) {
            Entry::Occupied(_) => Err(LedgerError::AlreadyInitialized { address }),
            Entry::Vacant(slot) => {
                debug!(%address, len = data.len(), "account allocated");
                slot.insert(data);
                Ok(())
            }
        }
    }

    fn update<T, F>(&self, address: &Pubkey, f: F) -> LedgerResult<T>
    where
        F: FnOnce(Option<&mut Vec<u8>>) -> LedgerResult<T>,
    {
        let mut accounts = self.accounts.write();

        // Work on a copy so a failed `f` leaves the stored bytes untouched
        let mut staged = accounts.get(address).cloned();
        let out = f(staged.as_mut())?;

        if let Some(data) = staged {
            accounts.insert(*address, data);
        }

        Ok(out)
    }
}
