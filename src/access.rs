//! Accessibility deficiency flags
//!
//! Rules OR bits into the document's flag set when they notice markup that
//! is hard to use without a graphical browser. Bits are never cleared
//! during a pass; the set is turned into advice once the pass is over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Accumulated accessibility problems for one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessFlags(u8);

impl AccessFlags {
    pub const NONE: AccessFlags = AccessFlags(0);
    pub const MISSING_IMAGE_ALT: AccessFlags = AccessFlags(1);
    pub const MISSING_LINK_ALT: AccessFlags = AccessFlags(2);
    pub const MISSING_SUMMARY: AccessFlags = AccessFlags(4);
    pub const MISSING_IMAGE_MAP: AccessFlags = AccessFlags(8);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: AccessFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Record a deficiency
    pub fn insert(&mut self, other: AccessFlags) {
        self.0 |= other.0;
    }

    /// Names of the set flags
    pub fn names(self) -> Vec<&'static str> {
        FLAGS
            .iter()
            .filter(|flag| self.contains(flag.flag))
            .map(|flag| flag.name)
            .collect()
    }

    /// End-of-pass advisory text for each set flag
    pub fn advice(self) -> Vec<&'static str> {
        FLAGS
            .iter()
            .filter(|flag| self.contains(flag.flag))
            .map(|flag| flag.advice)
            .collect()
    }
}

struct FlagInfo {
    flag: AccessFlags,
    name: &'static str,
    advice: &'static str,
}

const FLAGS: &[FlagInfo] = &[
    FlagInfo {
        flag: AccessFlags::MISSING_SUMMARY,
        name: "missing-summary",
        advice: "The table summary attribute should be used to describe \
the table structure. It is highly recommended for people using \
non-visual browsers. The scope and headers attributes for table cells \
are useful for specifying which headers apply to each table cell, \
enabling non-visual browsers to provide a meaningful context for each cell.",
    },
    FlagInfo {
        flag: AccessFlags::MISSING_IMAGE_ALT,
        name: "missing-image-alt",
        advice: "The alt attribute should be used to give a short description \
of an image; longer descriptions should be given with the longdesc \
attribute which takes a URL linked to the description. These measures \
are needed for people using non-graphical browsers.",
    },
    FlagInfo {
        flag: AccessFlags::MISSING_IMAGE_MAP,
        name: "missing-image-map",
        advice: "Use client-side image maps in preference to server-side image \
maps as the latter are inaccessible to people using non-graphical \
browsers. In addition, client-side maps are easier to set up and \
provide immediate feedback to users.",
    },
    FlagInfo {
        flag: AccessFlags::MISSING_LINK_ALT,
        name: "missing-link-alt",
        advice: "For hypertext links defined using a client-side image map, you \
need to use the alt attribute to provide a textual description of the \
link for people using non-graphical browsers.",
    },
];

impl BitOr for AccessFlags {
    type Output = AccessFlags;

    fn bitor(self, rhs: AccessFlags) -> AccessFlags {
        AccessFlags(self.0 | rhs.0)
    }
}

impl fmt::Display for AccessFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.names().join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates() {
        let mut flags = AccessFlags::default();
        assert!(flags.is_empty());

        flags.insert(AccessFlags::MISSING_SUMMARY);
        flags.insert(AccessFlags::MISSING_IMAGE_ALT);
        flags.insert(AccessFlags::MISSING_SUMMARY);

        assert!(flags.contains(AccessFlags::MISSING_SUMMARY));
        assert!(flags.contains(AccessFlags::MISSING_IMAGE_ALT));
        assert!(!flags.contains(AccessFlags::MISSING_LINK_ALT));
        assert_eq!(flags.bits(), 5);
    }

    #[test]
    fn test_advice_follows_flags() {
        let flags = AccessFlags::MISSING_SUMMARY | AccessFlags::MISSING_LINK_ALT;
        let advice = flags.advice();

        assert_eq!(advice.len(), 2);
        assert!(advice[0].starts_with("The table summary attribute"));
        assert!(advice[1].starts_with("For hypertext links"));
        assert!(AccessFlags::NONE.advice().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", AccessFlags::NONE), "none");
        assert_eq!(
            format!("{}", AccessFlags::MISSING_IMAGE_ALT | AccessFlags::MISSING_IMAGE_MAP),
            "missing-image-alt, missing-image-map"
        );
    }
}
