//! Protocol name catalog wiring.
//!
//! This module derives the ordinal-indexed display-name catalog from the
//! static protocol roster and an explicit build configuration. Callers use
//! [`NameCatalog`] for lookups and [`BuildConfig`] to describe which
//! protocol features a firmware build carries; [`lookup_packed`] scans the
//! packed firmware-image form of the same data.

pub mod config;
pub mod index;
pub mod roster;

pub use config::{BUILD_CONFIG_SCHEMA_VERSION, BuildConfig};
pub use index::{NameCatalog, lookup_packed};
pub use roster::{PROTOCOL_ROSTER, ProtocolRow};
