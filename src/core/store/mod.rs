//! Configuration storage.
//!
//! The layer secrets are merged into, plus a builder that stacks
//! configuration sources in order.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `ConfigStore` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Remote { /* ... */ }
//!
//! impl ConfigStore for Remote {
//!     fn get(&self, key: &str) -> Option<&str> {
//!         // Read the cached value
//!     }
//!     fn set(&mut self, key: &str, value: &str) {
//!         // Write through
//!     }
//! }
//! ```

mod builder;
mod memory;

pub use builder::ConfigBuilder;
pub use memory::MemoryStore;

/// Mutable key-value configuration layer.
///
/// Keys are hierarchical strings joined with the destination separator
/// (e.g., `Database:Host`). Values set by earlier layers are visible
/// through `get` when the override policy is evaluated.
pub trait ConfigStore {
    /// Current value of a key.
    fn get(&self, key: &str) -> Option<&str>;

    /// Set a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}
