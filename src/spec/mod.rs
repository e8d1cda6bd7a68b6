//! Spec loading and policy resolution.
//!
//! [`load_config`] reads an OpenAPI v3 document, and for every operation under
//! `paths` derives an [`AuthPolicy`] from the operation's `security` list, or
//! the root `security` list when the operation has none.

mod document;
mod load;
mod resolve;
mod types;

pub use document::{Document, Operation, PathItem, SecurityRequirement};
pub use load::*;
pub use resolve::*;
pub use types::*;
