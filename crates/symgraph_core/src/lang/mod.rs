//! Symbol-graph vocabulary registries.
//!
//! This module is the “front door” for wire-level vocabulary: declaration kinds, core field names, built-in mixin
//! keys, and access levels.
//!
//! The design goal is to avoid stringly-typed checks scattered across the codec. Instead, callers work with
//! **stable IDs** (e.g. `KindId`, `MixinKeyId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no symbol types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use symgraph_core::lang::kinds::{self, KindId};
//!
//! assert_eq!(kinds::from_str("enum.case"), Some(KindId::EnumCase));
//! assert_eq!(kinds::as_str(KindId::EnumCase), "enum.case");
//! ```

pub mod access;
pub mod fields;
pub mod kinds;
pub mod mixin_keys;
pub mod registry;
