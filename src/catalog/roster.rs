//! The protocol roster: an explicit ordered list of every protocol the
//! firmware knows about, sentinel first.
//!
//! An ordinal is nothing more than a position in [`PROTOCOL_ROSTER`]. The
//! catalog derives its entries from this slice, so the number and order of
//! rows here is the single source of truth for the ordinal space. Rows are
//! append-only: inserting or reordering silently remaps every ordinal after
//! the edit, which is exactly the failure the explicit list exists to
//! prevent. New rows go at the end.

use crate::lexicon;
use std::collections::BTreeSet;

/// One protocol in the ordinal enumeration.
#[derive(Clone, Copy, Debug)]
pub struct ProtocolRow {
    /// Stable symbolic identifier, unique within the roster.
    pub tag: &'static str,
    /// Display text emitted when the protocol is compiled in.
    pub name: &'static str,
    /// Build-configuration feature key gating this row. Several rows may
    /// share one key (variant protocols ride on their parent's feature).
    pub feature: &'static str,
    /// Row is gated on the send direction only, never on decode.
    pub send_only: bool,
}

impl ProtocolRow {
    const fn plain(tag: &'static str) -> Self {
        Self {
            tag,
            name: tag,
            feature: tag,
            send_only: false,
        }
    }

    const fn shared(tag: &'static str, feature: &'static str) -> Self {
        Self {
            tag,
            name: tag,
            feature,
            send_only: false,
        }
    }

    const fn named(tag: &'static str, name: &'static str, feature: &'static str) -> Self {
        Self {
            tag,
            name,
            feature,
            send_only: false,
        }
    }

    const fn send_side(tag: &'static str, feature: &'static str) -> Self {
        Self {
            tag,
            name: tag,
            feature,
            send_only: true,
        }
    }
}

/// Reserved sentinel row occupying ordinal 0.
pub const SENTINEL: ProtocolRow = ProtocolRow {
    tag: "UNUSED",
    name: lexicon::UNUSED,
    feature: "",
    send_only: false,
};

/// All protocols in ordinal order. Position in this slice is the ordinal.
pub const PROTOCOL_ROSTER: &[ProtocolRow] = &[
    SENTINEL,
    ProtocolRow::plain("RC5"),
    ProtocolRow::plain("RC6"),
    ProtocolRow::plain("NEC"),
    ProtocolRow::plain("SONY"),
    ProtocolRow::plain("PANASONIC"),
    ProtocolRow::plain("JVC"),
    ProtocolRow::plain("SAMSUNG"),
    ProtocolRow::plain("WHYNTER"),
    ProtocolRow::plain("AIWA_RC_T501"),
    ProtocolRow::plain("LG"),
    ProtocolRow::plain("SANYO"),
    ProtocolRow::plain("MITSUBISHI"),
    ProtocolRow::plain("DISH"),
    ProtocolRow::plain("SHARP"),
    ProtocolRow::plain("COOLIX"),
    ProtocolRow::plain("DAIKIN"),
    ProtocolRow::plain("DENON"),
    ProtocolRow::plain("KELVINATOR"),
    ProtocolRow::send_side("SHERWOOD", "SHERWOOD"),
    ProtocolRow::plain("MITSUBISHI_AC"),
    ProtocolRow::plain("RCMM"),
    ProtocolRow::shared("SANYO_LC7461", "SANYO"),
    ProtocolRow::shared("RC5X", "RC5"),
    ProtocolRow::plain("GREE"),
    ProtocolRow::send_side("PRONTO", "PRONTO"),
    ProtocolRow::named("NEC_LIKE", "NEC (non-strict)", "NEC"),
    ProtocolRow::plain("ARGO"),
    ProtocolRow::plain("TROTEC"),
    ProtocolRow::plain("NIKAI"),
    ProtocolRow::send_side("RAW", "RAW"),
    ProtocolRow::send_side("GLOBALCACHE", "GLOBALCACHE"),
    ProtocolRow::plain("TOSHIBA_AC"),
    ProtocolRow::plain("FUJITSU_AC"),
    ProtocolRow::plain("MIDEA"),
    ProtocolRow::plain("MAGIQUEST"),
    ProtocolRow::plain("LASERTAG"),
    ProtocolRow::plain("CARRIER_AC"),
    ProtocolRow::plain("HAIER_AC"),
    ProtocolRow::plain("MITSUBISHI2"),
    ProtocolRow::plain("HITACHI_AC"),
    ProtocolRow::plain("HITACHI_AC1"),
    ProtocolRow::plain("HITACHI_AC2"),
    ProtocolRow::plain("GICABLE"),
    ProtocolRow::plain("HAIER_AC_YRW02"),
    ProtocolRow::plain("WHIRLPOOL_AC"),
    ProtocolRow::plain("SAMSUNG_AC"),
    ProtocolRow::plain("LUTRON"),
    ProtocolRow::plain("ELECTRA_AC"),
    ProtocolRow::plain("PANASONIC_AC"),
    ProtocolRow::plain("PIONEER"),
    ProtocolRow::shared("LG2", "LG"),
    ProtocolRow::plain("MWM"),
    ProtocolRow::plain("DAIKIN2"),
    ProtocolRow::plain("VESTEL_AC"),
    ProtocolRow::plain("TECO"),
    ProtocolRow::plain("SAMSUNG36"),
    ProtocolRow::plain("TCL112AC"),
    ProtocolRow::plain("LEGOPF"),
    ProtocolRow::shared("MITSUBISHI_HEAVY_88", "MITSUBISHIHEAVY"),
    ProtocolRow::shared("MITSUBISHI_HEAVY_152", "MITSUBISHIHEAVY"),
    ProtocolRow::plain("DAIKIN216"),
    ProtocolRow::plain("SHARP_AC"),
    ProtocolRow::plain("GOODWEATHER"),
    ProtocolRow::plain("INAX"),
    ProtocolRow::plain("DAIKIN160"),
    ProtocolRow::plain("NEOCLIMA"),
    ProtocolRow::plain("DAIKIN176"),
    ProtocolRow::plain("DAIKIN128"),
    ProtocolRow::plain("AMCOR"),
    ProtocolRow::plain("DAIKIN152"),
    ProtocolRow::plain("MITSUBISHI136"),
    ProtocolRow::plain("MITSUBISHI112"),
    ProtocolRow::plain("HITACHI_AC424"),
    ProtocolRow::send_side("SONY_38K", "SONY"),
    ProtocolRow::plain("EPSON"),
    ProtocolRow::plain("SYMPHONY"),
    ProtocolRow::plain("HITACHI_AC3"),
    ProtocolRow::plain("DAIKIN64"),
    ProtocolRow::plain("AIRWELL"),
    ProtocolRow::plain("DELONGHI_AC"),
    ProtocolRow::plain("DOSHISHA"),
    ProtocolRow::plain("MULTIBRACKETS"),
    ProtocolRow::plain("CARRIER_AC40"),
    ProtocolRow::plain("CARRIER_AC64"),
    ProtocolRow::plain("HITACHI_AC344"),
    ProtocolRow::plain("CORONA_AC"),
    ProtocolRow::plain("MIDEA24"),
    ProtocolRow::plain("ZEPEAL"),
    ProtocolRow::plain("SANYO_AC"),
    ProtocolRow::plain("VOLTAS"),
    ProtocolRow::plain("METZ"),
    ProtocolRow::plain("TRANSCOLD"),
    ProtocolRow::plain("TECHNIBEL_AC"),
    ProtocolRow::plain("MIRAGE"),
    ProtocolRow::plain("ELITESCREENS"),
    ProtocolRow::plain("PANASONIC_AC32"),
    ProtocolRow::plain("MILESTAG2"),
    ProtocolRow::plain("ECOCLIM"),
    ProtocolRow::plain("XMP"),
    ProtocolRow::plain("TRUMA"),
    ProtocolRow::plain("HAIER_AC176"),
    ProtocolRow::plain("TEKNOPOINT"),
    ProtocolRow::plain("KELON"),
    ProtocolRow::plain("TROTEC_3550"),
    ProtocolRow::plain("SANYO_AC88"),
    ProtocolRow::plain("BOSE"),
    ProtocolRow::plain("ARRIS"),
    ProtocolRow::plain("RHOSS"),
    ProtocolRow::plain("AIRTON"),
    ProtocolRow::plain("COOLIX48"),
    ProtocolRow::plain("HITACHI_AC264"),
    ProtocolRow::plain("KELON168"),
    ProtocolRow::plain("HITACHI_AC296"),
    ProtocolRow::plain("DAIKIN200"),
    ProtocolRow::plain("HAIER_AC160"),
    ProtocolRow::plain("CARRIER_AC128"),
    ProtocolRow::plain("TOTO"),
    ProtocolRow::plain("CLIMABUTLER"),
    ProtocolRow::plain("TCL96AC"),
    ProtocolRow::plain("BOSCH144"),
    ProtocolRow::plain("SANYO_AC152"),
    ProtocolRow::plain("DAIKIN312"),
    ProtocolRow::plain("GORENJE"),
    ProtocolRow::plain("WOWWEE"),
    ProtocolRow::plain("CARRIER_AC84"),
    ProtocolRow::plain("YORK"),
    ProtocolRow::plain("BLUESTARHEAVY"),
    // New rows go just above this line so existing ordinals never move.
];

/// Every feature key the roster references, sentinel excluded.
pub fn feature_keys() -> BTreeSet<&'static str> {
    PROTOCOL_ROSTER
        .iter()
        .map(|row| row.feature)
        .filter(|key| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_starts_with_the_sentinel() {
        assert_eq!(PROTOCOL_ROSTER[0].tag, "UNUSED");
        assert!(PROTOCOL_ROSTER[0].feature.is_empty());
    }

    #[test]
    fn tags_are_unique() {
        let mut seen = BTreeSet::new();
        for row in PROTOCOL_ROSTER {
            assert!(seen.insert(row.tag), "duplicate tag {}", row.tag);
        }
    }

    #[test]
    fn variant_rows_ride_on_their_parent_feature() {
        let by_tag = |tag: &str| {
            PROTOCOL_ROSTER
                .iter()
                .find(|row| row.tag == tag)
                .expect("tag present")
        };
        assert_eq!(by_tag("SANYO_LC7461").feature, "SANYO");
        assert_eq!(by_tag("RC5X").feature, "RC5");
        assert_eq!(by_tag("NEC_LIKE").feature, "NEC");
        assert_eq!(by_tag("LG2").feature, "LG");
        assert_eq!(by_tag("MITSUBISHI_HEAVY_88").feature, "MITSUBISHIHEAVY");
        assert!(by_tag("SONY_38K").send_only);
    }
}
