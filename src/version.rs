//! Markup version lattice
//!
//! A document starts out compatible with every known profile. Rules narrow
//! the set as they see version-restricting markup; nothing ever widens it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Set of markup profiles a document can still validly claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Versions(u32);

/// Profile bits in table order, paired with display names
const PROFILES: &[(u32, &str)] = &[
    (1, "HTML 2.0"),
    (2, "HTML 3.2"),
    (4, "HTML 4.0 Strict"),
    (8, "HTML 4.0 Transitional"),
    (16, "HTML 4.0 Frameset"),
    (32, "HTML 4.01 Strict"),
    (64, "HTML 4.01 Transitional"),
    (128, "HTML 4.01 Frameset"),
    (256, "XHTML 1.0 Strict"),
    (512, "XHTML 1.0 Transitional"),
    (1024, "XHTML 1.0 Frameset"),
    (2048, "XHTML 1.1"),
    (4096, "XHTML Basic 1.0"),
    (8192, "Sun proprietary"),
    (16384, "Netscape proprietary"),
    (32768, "Microsoft proprietary"),
];

impl Versions {
    pub const UNKNOWN: Versions = Versions(0);

    pub const HT20: Versions = Versions(1);
    pub const HT32: Versions = Versions(2);
    pub const H40S: Versions = Versions(4);
    pub const H40T: Versions = Versions(8);
    pub const H40F: Versions = Versions(16);
    pub const H41S: Versions = Versions(32);
    pub const H41T: Versions = Versions(64);
    pub const H41F: Versions = Versions(128);
    pub const X10S: Versions = Versions(256);
    pub const X10T: Versions = Versions(512);
    pub const X10F: Versions = Versions(1024);
    pub const XH11: Versions = Versions(2048);
    pub const XB10: Versions = Versions(4096);

    pub const SUN: Versions = Versions(8192);
    pub const NETSCAPE: Versions = Versions(16384);
    pub const MICROSOFT: Versions = Versions(32768);

    pub const HTML20: Versions = Self::HT20;
    pub const HTML32: Versions = Self::HT32;
    /// Strict 4.x profiles, including XHTML 1.0 Strict
    pub const HTML40_STRICT: Versions = Versions(4 | 32 | 256);
    /// Transitional 4.x profiles ("transitional-40 or looser")
    pub const HTML40_LOOSE: Versions = Versions(8 | 64 | 512);
    pub const FRAMESET: Versions = Versions(16 | 128 | 1024);
    pub const XHTML11: Versions = Self::XH11;
    pub const BASIC: Versions = Self::XB10;
    pub const HTML40: Versions =
        Versions(Self::HTML40_STRICT.0 | Self::HTML40_LOOSE.0 | Self::FRAMESET.0);
    pub const PROPRIETARY: Versions = Versions(8192 | 16384 | 32768);
    /// Every standard profile
    pub const ALL: Versions = Versions(
        Self::HTML20.0 | Self::HTML32.0 | Self::HTML40.0 | Self::XHTML11.0 | Self::BASIC.0,
    );
    /// Initial value of a validation pass
    pub const EVERYTHING: Versions = Versions(Self::ALL.0 | Self::PROPRIETARY.0);

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is still in the set
    pub fn contains(self, other: Versions) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the sets share at least one profile
    pub fn intersects(self, other: Versions) -> bool {
        self.0 & other.0 != 0
    }

    /// Narrow to the profiles in `allowed`.
    ///
    /// Proprietary bits survive every constraint, so a document using vendor
    /// extensions keeps reporting them.
    pub fn constrain(&mut self, allowed: Versions) {
        self.0 &= allowed.0 | Self::PROPRIETARY.0;
    }

    /// Remove the profiles in `disallowed`
    pub fn exclude(&mut self, disallowed: Versions) {
        self.constrain(!disallowed);
    }

    /// Names of the profiles still in the set, in table order
    pub fn profiles(self) -> Vec<&'static str> {
        PROFILES
            .iter()
            .filter(|(bit, _)| self.0 & bit != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

impl Default for Versions {
    fn default() -> Self {
        Self::EVERYTHING
    }
}

impl BitOr for Versions {
    type Output = Versions;

    fn bitor(self, rhs: Versions) -> Versions {
        Versions(self.0 | rhs.0)
    }
}

impl BitAnd for Versions {
    type Output = Versions;

    fn bitand(self, rhs: Versions) -> Versions {
        Versions(self.0 & rhs.0)
    }
}

impl Not for Versions {
    type Output = Versions;

    fn not(self) -> Versions {
        Versions(!self.0)
    }
}

impl fmt::Display for Versions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.profiles();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}
