//! # ember_core - Ember Engine Core
//!
//! Zero-dependency core primitives shared by the engine crates:
//! - Fnv1a: deterministic hashing for identifiers and index keys
//! - ResourceId: string identifier with a precomputed hash

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

pub mod hash;
pub mod id;

pub use hash::{fnv1a, Fnv1a, FnvBuildHasher};
pub use id::ResourceId;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::hash::{Fnv1a, FnvBuildHasher};
    pub use crate::id::ResourceId;
}
