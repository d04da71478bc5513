//! # kvs Domain Layer
//!
//! Core contract for keyed value storage. Every backend (in-memory, expiring,
//! or an external adapter) implements the same [`Storage`](ports::Storage)
//! primitives, and callers only ever program against the ports defined here.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | `Storage`, `StorageProvider` and `Clock` traits |
//! | [`value_objects`] | `Entry` and backend kind identifiers |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Clock, Storage, StorageProvider};
pub use value_objects::{BackendKind, Entry};
