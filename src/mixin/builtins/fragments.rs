use serde::{Deserialize, Serialize};

use crate::mixin::MixinType;
use crate::symbol::Fragment;

/// The declaration as a sequence of typed text fragments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationFragments {
    pub fragments: Vec<Fragment>,
}

impl MixinType for DeclarationFragments {
    const KEY: &'static str = "declarationFragments";
}

impl DeclarationFragments {
    /// Concatenate every fragment's spelling.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.spelling.as_str()).collect()
    }
}

/// Parameters and return type of a callable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionSignature {
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,
    #[serde(default)]
    pub returns: Vec<Fragment>,
}

impl MixinType for FunctionSignature {
    const KEY: &'static str = "functionSignature";
}

/// One parameter of a [`FunctionSignature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParameter {
    /// External (argument label) name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_name: Option<String>,
    #[serde(default)]
    pub declaration_fragments: Vec<Fragment>,
}

impl FunctionParameter {
    /// The name used inside the body: the internal name when present, else the external one.
    pub fn binding_name(&self) -> &str {
        self.internal_name.as_deref().unwrap_or(&self.name)
    }
}
