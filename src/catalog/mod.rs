//! Token catalog: static vocabulary data and per-game card instances.
//!
//! Read-only to everything above it. The registry is built once at
//! session setup from the built-in manifest (or a custom one in tests).

pub mod instance;
pub mod manifest;
pub mod registry;
pub mod token;

pub use instance::{CardInstance, InstanceId};
pub use manifest::{basic_shelf, deck_tokens, power_up_shelf, shelf_tokens, standard_catalog};
pub use registry::TokenRegistry;
pub use token::{Tier, TokenDef, TokenId, WordClass};
