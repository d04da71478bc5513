//! Storage wiring
//!
//! Backend implementations are in the kvs-providers crate. This module
//! selects them from configuration and adds the services built on top.

pub mod factory;
pub mod sweeper;
pub mod typed;

pub use factory::StorageProviderFactory;
pub use sweeper::ExpirySweeper;
pub use typed::TypedStorage;
