//! String identifiers for named engine resources

use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::boxed::Box;
use alloc::string::String;

use crate::hash::fnv1a;

/// Identifier for a named resource (texture, model, sound, font)
///
/// The hash is computed once at construction, so repeated lookups in
/// hash-indexed containers don't re-walk the name bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct ResourceId {
    name: Box<str>,
    hash: u64,
}

impl ResourceId {
    /// Create a new resource ID
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            hash: fnv1a(name.as_bytes()),
        }
    }

    /// Get the name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the precomputed hash
    #[inline]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl Hash for ResourceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal names always hash equal; the precomputed value is enough.
        state.write_u64(self.hash);
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({:?})", self.name)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}
