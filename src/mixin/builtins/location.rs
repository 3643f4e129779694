use serde::{Deserialize, Serialize};
use url::Url;

use crate::mixin::{DecodePolicy, MixinType};
use crate::symbol::Position;

/// Where a symbol is declared.
///
/// ## Notes
/// - `uri` is kept exactly as written in the document; [`Location::url`] derives a parsed, percent-escaped URL.
/// - Decoding is lenient: a location with a missing or malformed `position` is dropped rather than failing the
///   symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub uri: String,
    pub position: Position,
}

impl MixinType for Location {
    const KEY: &'static str = "location";
    const DECODE_POLICY: DecodePolicy = DecodePolicy::Lenient;
}

impl Location {
    /// Parse `uri` into a URL. Characters not allowed in a URL (spaces included) come back percent-escaped.
    ///
    /// ## Returns
    /// - `None` when `uri` is not an absolute URL.
    pub fn url(&self) -> Option<Url> {
        Url::parse(&self.uri).ok()
    }
}
