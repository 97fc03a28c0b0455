//! trading-agent-ledger: Host-side model of the trading agent registry
//!
//! Runs the program's state rules against an injected key-value store
//! (`address -> account bytes`) instead of a live cluster. The store owns
//! atomicity: `create_if_absent` is the allocation step that rejects an
//! occupied address, and `update` commits a check-then-write as one unit.
//!
//! Errors keep the same two tiers a client sees against the real runtime:
//! - [`LedgerError::AlreadyInitialized`] comes from the storage layer and
//!   carries no program error code
//! - [`LedgerError::Program`] carries the typed code the program would return
//!   (`AccountNotInitialized`, `Unauthorized`, ...)

pub mod error;
pub mod registry;
pub mod store;

pub use error::{LedgerError, LedgerResult};
pub use registry::AgentRegistry;
pub use store::{AgentStore, InMemoryAgentStore};
pub use trading_agent::AgentData;
