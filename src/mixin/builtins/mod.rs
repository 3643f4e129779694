//! Mixins every symbol document may carry.
//!
//! Payload shapes are kept to what documentation tooling reads. Keys come from
//! [`symgraph_core::lang::mixin_keys`].
//!
//! | Key | Type | Decode policy |
//! | --- | --- | --- |
//! | `availability` | [`Availability`] | strict |
//! | `declarationFragments` | [`DeclarationFragments`] | strict |
//! | `isReadOnly` | [`Mutability`] | strict |
//! | `swiftExtension` | [`ExtensionContext`] | strict |
//! | `swiftGenerics` | [`GenericSignature`] | strict |
//! | `location` | [`Location`] | lenient |
//! | `functionSignature` | [`FunctionSignature`] | strict |
//! | `spi` | [`Spi`] | strict |
//! | `snippet` | [`Snippet`] | strict |

mod availability;
mod flags;
mod fragments;
mod generics;
mod location;
mod snippet;

pub use availability::{Availability, AvailabilityItem, SemanticVersion};
pub use flags::{Mutability, Spi};
pub use fragments::{DeclarationFragments, FunctionParameter, FunctionSignature};
pub use generics::{ConstraintKind, ExtensionContext, GenericConstraint, GenericParameter, GenericSignature};
pub use location::Location;
pub use snippet::Snippet;

fn is_false(value: &bool) -> bool {
    !*value
}
