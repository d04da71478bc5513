//! Value objects shared by storage backends

mod backend;
mod entry;

pub use backend::BackendKind;
pub use entry::Entry;
