//! Versioned build configuration.
//!
//! The original firmware decided protocol support with compile-time feature
//! flags. Here the decision is an explicit, inspectable struct so a catalog
//! can be rebuilt and compared for any configuration without replaying the
//! firmware build. A configuration lists feature keys per direction; a row
//! is compiled in when either direction covers its feature (send-only rows
//! consult only the send side).

use crate::catalog::roster::{self, ProtocolRow};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Version marker expected in build-configuration files.
pub const BUILD_CONFIG_SCHEMA_VERSION: &str = "ir_build_config_v1";

#[derive(Clone, Debug, Deserialize)]
/// Which protocol features this build carries, per direction.
pub struct BuildConfig {
    pub schema_version: String,
    #[serde(default)]
    pub decode: BTreeSet<String>,
    #[serde(default)]
    pub send: BTreeSet<String>,
}

impl BuildConfig {
    /// Parse a build configuration from disk and verify its version marker.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading build config {}", path.display()))?;
        let config: BuildConfig = serde_json::from_str(&data)
            .with_context(|| format!("parsing build config {}", path.display()))?;

        if config.schema_version != BUILD_CONFIG_SCHEMA_VERSION {
            bail!(
                "unsupported build config version '{}', expected {}",
                config.schema_version,
                BUILD_CONFIG_SCHEMA_VERSION
            );
        }
        Ok(config)
    }

    /// Configuration with every roster feature enabled in both directions.
    pub fn full() -> Self {
        let all: BTreeSet<String> = roster::feature_keys()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            schema_version: BUILD_CONFIG_SCHEMA_VERSION.to_string(),
            decode: all.clone(),
            send: all,
        }
    }

    /// Configuration with no protocol support at all.
    pub fn none() -> Self {
        Self {
            schema_version: BUILD_CONFIG_SCHEMA_VERSION.to_string(),
            decode: BTreeSet::new(),
            send: BTreeSet::new(),
        }
    }

    /// The build-time support predicate for one roster row.
    pub fn supports(&self, row: &ProtocolRow) -> bool {
        if self.send.contains(row.feature) {
            return true;
        }
        !row.send_only && self.decode.contains(row.feature)
    }

    /// Reject feature keys no roster row carries.
    ///
    /// A typo in a config would otherwise disable a protocol silently, which
    /// is indistinguishable from intent once the catalog is built.
    pub fn validate(&self) -> Result<()> {
        let known = roster::feature_keys();
        for key in self.decode.iter().chain(self.send.iter()) {
            if !known.contains(key.as_str()) {
                bail!("build config references unknown feature '{}'", key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(decode: &[&str], send: &[&str]) -> BuildConfig {
        BuildConfig {
            schema_version: BUILD_CONFIG_SCHEMA_VERSION.to_string(),
            decode: decode.iter().map(|s| s.to_string()).collect(),
            send: send.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn send_only_rows_ignore_the_decode_side() {
        let raw = roster::PROTOCOL_ROSTER
            .iter()
            .find(|row| row.tag == "RAW")
            .unwrap();
        assert!(!config_with(&["RAW"], &[]).supports(raw));
        assert!(config_with(&[], &["RAW"]).supports(raw));
    }

    #[test]
    fn either_direction_enables_a_two_way_row() {
        let nec = &roster::PROTOCOL_ROSTER[3];
        assert_eq!(nec.tag, "NEC");
        assert!(config_with(&["NEC"], &[]).supports(nec));
        assert!(config_with(&[], &["NEC"]).supports(nec));
        assert!(!config_with(&[], &[]).supports(nec));
    }

    #[test]
    fn unknown_feature_keys_are_rejected() {
        let config = config_with(&["NEC", "NOT_A_PROTOCOL"], &[]);
        assert!(config.validate().is_err());
        assert!(BuildConfig::full().validate().is_ok());
    }
}
