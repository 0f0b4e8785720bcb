//! Blockfall (workspace facade crate).
//!
//! This package keeps a single `blockfall::{core,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_types as types;
