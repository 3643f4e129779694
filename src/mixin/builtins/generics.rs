use serde::{Deserialize, Serialize};
use symgraph_core::KindIdentifier;

use crate::mixin::MixinType;

/// Generic parameters and requirements of a declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericSignature {
    #[serde(default)]
    pub parameters: Vec<GenericParameter>,
    #[serde(default)]
    pub constraints: Vec<GenericConstraint>,
}

impl MixinType for GenericSignature {
    const KEY: &'static str = "swiftGenerics";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParameter {
    pub name: String,
    pub index: u32,
    pub depth: u32,
}

/// A requirement such as `T: Equatable` or `T == U`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericConstraint {
    pub kind: ConstraintKind,
    pub lhs: String,
    pub rhs: String,
}

/// Closed set of requirement kinds; an unknown kind is a payload error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    Conformance,
    Superclass,
    SameType,
}

/// The type an extension member is attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionContext {
    pub extended_module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_kind: Option<KindIdentifier>,
    #[serde(default)]
    pub constraints: Vec<GenericConstraint>,
}

impl MixinType for ExtensionContext {
    const KEY: &'static str = "swiftExtension";
}
