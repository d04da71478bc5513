//! Port definitions
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Storage`] | Keyed value storage contract with derived bulk operations |
//! | [`StorageProvider`] | Factory opening and destroying named storages |
//! | [`Clock`] | Whole-second time source used for expiration |

pub mod clock;
pub mod provider;
pub mod storage;

pub use clock::Clock;
pub use provider::StorageProvider;
pub use storage::Storage;
