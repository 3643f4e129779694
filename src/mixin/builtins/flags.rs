use serde::{Deserialize, Serialize};

use crate::mixin::MixinType;

/// Whether a property or variable is read-only. Written as a bare boolean under `isReadOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mutability(pub bool);

impl MixinType for Mutability {
    const KEY: &'static str = "isReadOnly";
}

impl Mutability {
    pub fn is_read_only(self) -> bool {
        self.0
    }
}

/// Whether the symbol is part of a system programming interface. Written as a bare boolean under `spi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spi(pub bool);

impl MixinType for Spi {
    const KEY: &'static str = "spi";
}
