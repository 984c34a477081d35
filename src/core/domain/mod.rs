//! Domain types.

mod secret;

pub use secret::{RawSecret, SecretValue};
