//! Provide the canonical, pure vocabulary shared by everything that reads or writes symbol records.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - the declaration-kind registry and the total [`KindIdentifier`] normalizer,
//! - the spellings of the fixed core fields of a symbol record,
//! - the keys of the built-in mixins, and
//! - the well-known access levels.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no knowledge of how symbols are encoded.
//! - Callers should work with the stable IDs (e.g. [`lang::kinds::KindId`]) instead of hard-coding strings.

pub mod kind;
pub mod lang;

pub use kind::KindIdentifier;
