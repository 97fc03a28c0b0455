//! Agent registry driver over an [`AgentStore`]

use anchor_lang::error::{Error, ErrorCode};
use anchor_lang::prelude::*;
use tracing::{info, warn};
use trading_agent::AgentData;
use trading_agent_common::address::derive_agent_address;

use crate::error::{LedgerError, LedgerResult};
use crate::store::AgentStore;

/// Applies `initialize_agent`, `update_tee_key` and `revoke_tee_key` to a store
/// the same way the deployed program applies them to the cluster.
///
/// Callers are identified by key only; signature verification happens before
/// a call reaches this type.
#[derive(Debug)]
pub struct AgentRegistry<S> {
    store: S,
    program_id: Pubkey,
}

impl<S: AgentStore> AgentRegistry<S> {
    /// Registry addressing records under the deployed program id
    pub fn new(store: S) -> Self {
        Self::with_program_id(store, trading_agent::ID)
    }

    pub fn with_program_id(store: S, program_id: Pubkey) -> Self {
        Self { store, program_id }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record address for `owner`
    pub fn address_of(&self, owner: &Pubkey) -> Pubkey {
        derive_agent_address(owner, &self.program_id).0
    }

    /// Create the record for `caller`, returning its address
    pub fn initialize(&self, caller: &Pubkey) -> LedgerResult<Pubkey> {
        let address = self.address_of(caller);
        let data = encode(&AgentData::new(*caller))?;

        if let Err(err) = self.store.create_if_absent(address, data) {
            warn!(%address, admin = %caller, error = %err, "agent initialization rejected");
            return Err(err);
        }

        info!(%address, admin = %caller, "agent initialized");
        Ok(address)
    }

    /// Bind `tee_key` on `owner`'s record, returning the previously bound key
    pub fn update_tee_key(
        &self,
        caller: &Pubkey,
        owner: &Pubkey,
        tee_key: Pubkey,
    ) -> LedgerResult<Pubkey> {
        let address = self.address_of(owner);
        let result = self.mutate(&address, |agent| Ok(agent.set_tee_key(caller, tee_key)?));

        match &result {
            Ok(old) => info!(%address, old = %old, new = %tee_key, "tee key updated"),
            Err(err) => warn!(%address, caller = %caller, error = %err, "tee key update rejected"),
        }
        result
    }

    /// Unbind the TEE key on `owner`'s record, returning the revoked key
    pub fn revoke_tee_key(&self, caller: &Pubkey, owner: &Pubkey) -> LedgerResult<Pubkey> {
        let address = self.address_of(owner);
        let result = self.mutate(&address, |agent| Ok(agent.clear_tee_key(caller)?));

        match &result {
            Ok(revoked) => info!(%address, revoked = %revoked, "tee key revoked"),
            Err(err) => warn!(%address, caller = %caller, error = %err, "tee key revocation rejected"),
        }
        result
    }

    /// Read the record at `address`, `None` if it was never created
    pub fn fetch(&self, address: &Pubkey) -> LedgerResult<Option<AgentData>> {
        self.store
            .load(address)
            .map(|data| decode(address, &data))
            .transpose()
    }

    pub fn fetch_for_owner(&self, owner: &Pubkey) -> LedgerResult<Option<AgentData>> {
        self.fetch(&self.address_of(owner))
    }

    fn mutate<T, F>(&self, address: &Pubkey, f: F) -> LedgerResult<T>
    where
        F: FnOnce(&mut AgentData) -> LedgerResult<T>,
    {
        self.store.update(address, |slot| {
            let data = slot.ok_or_else(|| Error::from(ErrorCode::AccountNotInitialized))?;
            let mut agent = decode(address, data)?;
            let out = f(&mut agent)?;
            *data = encode(&agent)?;
            Ok(out)
        })
    }
}

fn encode(agent: &AgentData) -> LedgerResult<Vec<u8>> {
    let mut data = Vec::with_capacity(AgentData::space());
    agent.try_serialize(&mut data)?;
    Ok(data)
}

fn decode(address: &Pubkey, data: &[u8]) -> LedgerResult<AgentData> {
    let mut slice = data;
    AgentData::try_deserialize(&mut slice).map_err(|_| LedgerError::Corrupt { address: *address })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAgentStore;

    #[test]
    fn test_records_use_program_derived_address() {
        let registry = AgentRegistry::new(InMemoryAgentStore::new());
        let owner = Pubkey::new_unique();

        let address = registry.initialize(&owner).unwrap();

        assert_eq!(address, trading_agent_common::agent_address(&owner));
        assert_eq!(registry.store().load(&address).unwrap().len(), AgentData::space());
    }

    #[test]
    fn test_program_id_override() {
        let program_id = Pubkey::new_unique();
        let registry = AgentRegistry::with_program_id(InMemoryAgentStore::new(), program_id);
        let owner = Pubkey::new_unique();

        let address = registry.initialize(&owner).unwrap();

        assert_eq!(registry.program_id(), program_id);
        assert_eq!(address, derive_agent_address(&owner, &program_id).0);
    }

    #[test]
    fn test_corrupt_account_is_reported() {
        let store = InMemoryAgentStore::new();
        let owner = Pubkey::new_unique();
        let address = derive_agent_address(&owner, &trading_agent::ID).0;
        store.create_if_absent(address, vec![0u8; 72]).unwrap();
        let registry = AgentRegistry::new(store);

        assert!(matches!(
            registry.fetch(&address),
            Err(LedgerError::Corrupt { .. })
        ));
        assert!(matches!(
            registry.update_tee_key(&owner, &owner, Pubkey::new_unique()),
            Err(LedgerError::Corrupt { .. })
        ));
    }
}
