//! Ordinal-indexed view of the protocol name catalog.
//!
//! [`NameCatalog::build`] walks the roster once, applying the build
//! configuration's support predicate to every row, and freezes the result.
//! It is intentionally strict at construction so a roster or configuration
//! defect surfaces as an error instead of as a lookup that quietly returns
//! the wrong protocol's name.

use crate::catalog::config::BuildConfig;
use crate::catalog::roster::{PROTOCOL_ROSTER, ProtocolRow};
use crate::lexicon;
use anyhow::{Result, bail};
use std::collections::BTreeMap;

#[derive(Debug)]
/// Built catalog: one display entry per roster ordinal, in roster order.
pub struct NameCatalog {
    entries: Vec<&'static str>,
    by_tag: BTreeMap<&'static str, usize>,
}

impl NameCatalog {
    /// Build the catalog for one build configuration.
    ///
    /// Every roster row yields exactly one entry: its display name when the
    /// configuration supports it, the one-character placeholder when it does
    /// not. The sentinel row always emits its real text, so each entry has
    /// length >= 1 and positions align with roster ordinals by construction.
    pub fn build(config: &BuildConfig) -> Result<Self> {
        config.validate()?;
        validate_roster(PROTOCOL_ROSTER)?;

        let mut entries = Vec::with_capacity(PROTOCOL_ROSTER.len());
        let mut by_tag = BTreeMap::new();
        for (ordinal, row) in PROTOCOL_ROSTER.iter().enumerate() {
            let entry = if ordinal == 0 || config.supports(row) {
                row.name
            } else {
                lexicon::UNSUPPORTED
            };
            entries.push(entry);
            by_tag.insert(row.tag, ordinal);
        }

        Ok(Self { entries, by_tag })
    }

    /// Display name for an ordinal.
    ///
    /// Out-of-range ordinals (including the count itself) yield
    /// [`lexicon::UNKNOWN`] rather than an error; display code should show
    /// "Unknown" for a stale ordinal, not crash.
    pub fn lookup(&self, ordinal: usize) -> &'static str {
        self.entries
            .get(ordinal)
            .copied()
            .unwrap_or(lexicon::UNKNOWN)
    }

    /// Number of entries, sentinel included. Equals the roster length.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ordinal assigned to a protocol tag, if the roster knows it.
    pub fn ordinal_of(&self, tag: &str) -> Option<usize> {
        self.by_tag.get(tag).copied()
    }

    /// Whether the ordinal names a protocol compiled into this build.
    ///
    /// False for the sentinel, for placeholders, and for out-of-range
    /// ordinals. This is the `len() > 1` test from the firmware contract,
    /// with the sentinel carved out.
    pub fn is_compiled_in(&self, ordinal: usize) -> bool {
        if ordinal == 0 {
            return false;
        }
        match self.entries.get(ordinal) {
            Some(&entry) => entry != lexicon::UNSUPPORTED,
            None => false,
        }
    }

    /// Iterate `(ordinal, entry)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.entries.iter().copied().enumerate()
    }

    /// Firmware-image form: every entry followed by a NUL, then one extra
    /// NUL as the end-of-catalog sentinel (two consecutive NULs terminate).
    pub fn packed(&self) -> Vec<u8> {
        let mut blob = Vec::new();
        for entry in &self.entries {
            blob.extend_from_slice(entry.as_bytes());
            blob.push(0);
        }
        blob.push(0);
        blob
    }
}

/// Scan a packed catalog blob for the entry at `ordinal`.
///
/// Skips `ordinal` NUL-terminated entries from the front, never reading past
/// `blob.len()`. Landing on or past the empty end-of-catalog entry yields
/// [`lexicon::UNKNOWN`], as does a malformed (non-UTF-8) entry.
pub fn lookup_packed(blob: &[u8], ordinal: usize) -> &str {
    let mut offset = 0usize;
    for _ in 0..ordinal {
        match blob[offset..].iter().position(|&b| b == 0) {
            Some(nul) => offset += nul + 1,
            None => return lexicon::UNKNOWN,
        }
        if offset >= blob.len() {
            return lexicon::UNKNOWN;
        }
    }
    let end = blob[offset..]
        .iter()
        .position(|&b| b == 0)
        .map(|nul| offset + nul)
        .unwrap_or(blob.len());
    if end == offset {
        // Empty entry: the end-of-catalog sentinel, not a real name.
        return lexicon::UNKNOWN;
    }
    std::str::from_utf8(&blob[offset..end]).unwrap_or(lexicon::UNKNOWN)
}

fn validate_roster(roster: &[ProtocolRow]) -> Result<()> {
    if roster.is_empty() {
        bail!("protocol roster is empty");
    }
    let sentinel = &roster[0];
    if !sentinel.feature.is_empty() || sentinel.name != lexicon::UNUSED {
        bail!("roster ordinal 0 must be the reserved sentinel row");
    }

    let mut tags = BTreeMap::new();
    for (ordinal, row) in roster.iter().enumerate() {
        if row.tag.is_empty() || row.name.is_empty() {
            bail!("roster ordinal {} has an empty tag or name", ordinal);
        }
        if row.name == lexicon::UNSUPPORTED {
            bail!(
                "roster ordinal {} uses the placeholder as a display name",
                ordinal
            );
        }
        if let Some(previous) = tags.insert(row.tag, ordinal) {
            bail!(
                "duplicate roster tag {} at ordinals {} and {}",
                row.tag,
                previous,
                ordinal
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::config::BUILD_CONFIG_SCHEMA_VERSION;
    use std::collections::BTreeSet;

    fn decode_only(features: &[&str]) -> BuildConfig {
        BuildConfig {
            schema_version: BUILD_CONFIG_SCHEMA_VERSION.to_string(),
            decode: features.iter().map(|s| s.to_string()).collect(),
            send: BTreeSet::new(),
        }
    }

    #[test]
    fn catalog_length_matches_the_roster() {
        let catalog = NameCatalog::build(&BuildConfig::none()).unwrap();
        assert_eq!(catalog.len(), PROTOCOL_ROSTER.len());
    }

    #[test]
    fn sentinel_text_is_config_independent() {
        for config in [BuildConfig::none(), BuildConfig::full()] {
            let catalog = NameCatalog::build(&config).unwrap();
            assert_eq!(catalog.lookup(0), lexicon::UNUSED);
            assert!(!catalog.is_compiled_in(0));
        }
    }

    #[test]
    fn disabled_rows_become_the_placeholder() {
        let catalog = NameCatalog::build(&decode_only(&["NEC"])).unwrap();
        let nec = catalog.ordinal_of("NEC").unwrap();
        let sony = catalog.ordinal_of("SONY").unwrap();
        assert_eq!(catalog.lookup(nec), "NEC");
        assert_eq!(catalog.lookup(sony), lexicon::UNSUPPORTED);
        assert!(catalog.is_compiled_in(nec));
        assert!(!catalog.is_compiled_in(sony));
    }

    #[test]
    fn out_of_range_ordinals_fall_back_to_unknown() {
        let catalog = NameCatalog::build(&BuildConfig::full()).unwrap();
        assert_eq!(catalog.lookup(catalog.len()), lexicon::UNKNOWN);
        assert_eq!(catalog.lookup(usize::MAX), lexicon::UNKNOWN);
        assert!(!catalog.is_compiled_in(catalog.len()));
    }

    #[test]
    fn enabled_names_are_unique_and_longer_than_the_placeholder() {
        let catalog = NameCatalog::build(&BuildConfig::full()).unwrap();
        let mut seen = BTreeSet::new();
        for (ordinal, entry) in catalog.iter() {
            assert!(entry.len() > 1, "ordinal {} entry too short", ordinal);
            assert!(seen.insert(entry), "duplicate entry {}", entry);
        }
    }

    #[test]
    fn variant_rows_follow_their_parent_feature() {
        let catalog = NameCatalog::build(&decode_only(&["NEC", "SANYO"])).unwrap();
        let lc7461 = catalog.ordinal_of("SANYO_LC7461").unwrap();
        let nec_like = catalog.ordinal_of("NEC_LIKE").unwrap();
        assert_eq!(catalog.lookup(lc7461), "SANYO_LC7461");
        assert_eq!(catalog.lookup(nec_like), "NEC (non-strict)");
    }

    #[test]
    fn packed_blob_is_double_nul_terminated() {
        let catalog = NameCatalog::build(&BuildConfig::none()).unwrap();
        let blob = catalog.packed();
        assert_eq!(&blob[blob.len() - 2..], &[0, 0]);
        // Entry count implied by the blob matches the catalog.
        let nuls = blob.iter().filter(|&&b| b == 0).count();
        assert_eq!(nuls, catalog.len() + 1);
    }

    #[test]
    fn packed_scan_agrees_with_indexed_lookup() {
        let catalog = NameCatalog::build(&decode_only(&["RC5", "GREE"])).unwrap();
        let blob = catalog.packed();
        for ordinal in 0..catalog.len() {
            assert_eq!(lookup_packed(&blob, ordinal), catalog.lookup(ordinal));
        }
        assert_eq!(lookup_packed(&blob, catalog.len()), lexicon::UNKNOWN);
        assert_eq!(lookup_packed(&blob, catalog.len() + 7), lexicon::UNKNOWN);
    }

    #[test]
    fn packed_scan_survives_truncated_blobs() {
        let catalog = NameCatalog::build(&BuildConfig::none()).unwrap();
        let blob = catalog.packed();
        for cut in 0..blob.len().min(16) {
            // Must terminate and stay in bounds whatever the truncation.
            let _ = lookup_packed(&blob[..cut], 3);
        }
        assert_eq!(lookup_packed(&[], 0), lexicon::UNKNOWN);
    }
}
