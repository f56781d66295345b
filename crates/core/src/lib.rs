//! Domain logic for the pet attribute taxonomy.
//!
//! Zero I/O: everything here is shared by the repository layer, the HTTP
//! handlers, and their tests.

pub mod attribute;
pub mod error;
pub mod pagination;
pub mod preference;
pub mod suggestion;
pub mod types;
