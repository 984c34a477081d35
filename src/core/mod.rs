//! Core library components.
//!
//! This module contains the reusable logic for turning fetched secrets into
//! configuration: path building, key transformation, the override policy
//! and the merge itself.

pub mod constants;
pub mod domain;
pub mod fetch;
pub mod merge;
pub mod options;
pub mod paths;
pub mod policy;
pub mod provider;
pub mod store;
pub mod transform;
pub mod types;
