//! Build-configurable display-name catalog for IR remote protocol firmware.
//!
//! Resource-constrained decoders refer to protocols by a small integer
//! ordinal and to interface vocabulary by symbol. This crate packages both
//! sides of that contract:
//!
//! - [`lexicon`]: individually named constant strings ("Power", "On",
//!   "Auto", ...) resolved at compile time.
//! - [`catalog`]: an ordinal-indexed catalog of protocol display names
//!   derived from the static roster plus a [`BuildConfig`], substituting a
//!   one-character `"?"` placeholder for protocols a build leaves out so
//!   ordinals never shift between configurations.
//!
//! Everything is immutable after construction: lookups are pure reads, safe
//! from any number of threads without synchronization.

pub mod catalog;
pub mod lexicon;

pub use catalog::{
    BUILD_CONFIG_SCHEMA_VERSION, BuildConfig, NameCatalog, PROTOCOL_ROSTER, ProtocolRow,
    lookup_packed,
};
