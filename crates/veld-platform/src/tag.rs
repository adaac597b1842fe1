//! Canonical platform tags.
//!
//! Tags form a fixed hierarchy spelled with `:` separators, rooted at the
//! device class: `native:desktop:windows` is a `windows` build, which is a
//! desktop build, which is a native build. `web` stands alone, and `*` is
//! the wildcard. The enumeration is closed; code that branches on platform
//! should match on [`PlatformTag`] and let the compiler check coverage.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TagParseError;

/// A canonical platform tag.
///
/// `Desktop` and `Mobile` are legitimate members of the domain that
/// [`PlatformTag::normalize`] never produces: collaborators may construct
/// or compare against the generic device classes directly, so they stay
/// in the type even though no raw platform name maps onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    /// Wildcard, accepts any platform (`*`).
    Any,
    /// Browser runtime (`web`).
    Web,
    /// Generic native, any device class (`native`).
    Native,
    /// Generic desktop (`native:desktop`).
    Desktop,
    /// Windows desktop (`native:desktop:windows`).
    Windows,
    /// macOS desktop (`native:desktop:macos`).
    Macos,
    /// Linux desktop (`native:desktop:linux`).
    Linux,
    /// Generic mobile (`native:mobile`).
    Mobile,
    /// iOS mobile (`native:mobile:ios`).
    Ios,
    /// Android mobile (`native:mobile:android`).
    Android,
}

impl PlatformTag {
    /// Every tag in the domain, in hierarchy order.
    pub const ALL: [PlatformTag; 10] = [
        PlatformTag::Any,
        PlatformTag::Web,
        PlatformTag::Native,
        PlatformTag::Desktop,
        PlatformTag::Windows,
        PlatformTag::Macos,
        PlatformTag::Linux,
        PlatformTag::Mobile,
        PlatformTag::Ios,
        PlatformTag::Android,
    ];

    /// Normalize a free-form platform name into a canonical tag.
    ///
    /// Total over all strings: recognized names map to their tag, anything
    /// else (empty string included) falls back to [`PlatformTag::Native`].
    /// Matching is exact and case-sensitive with no trimming; `"Windows"`
    /// is unrecognized and falls back. Callers that want unknown names
    /// rejected instead should use the strict [`FromStr`] parse.
    pub fn normalize(raw: &str) -> PlatformTag {
        match raw {
            "*" => PlatformTag::Any,
            "web" => PlatformTag::Web,
            "native" => PlatformTag::Native,
            "windows" => PlatformTag::Windows,
            "macos" => PlatformTag::Macos,
            "linux" => PlatformTag::Linux,
            "ios" => PlatformTag::Ios,
            "android" => PlatformTag::Android,
            _ => PlatformTag::Native,
        }
    }

    /// The canonical hierarchical spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformTag::Any => "*",
            PlatformTag::Web => "web",
            PlatformTag::Native => "native",
            PlatformTag::Desktop => "native:desktop",
            PlatformTag::Windows => "native:desktop:windows",
            PlatformTag::Macos => "native:desktop:macos",
            PlatformTag::Linux => "native:desktop:linux",
            PlatformTag::Mobile => "native:mobile",
            PlatformTag::Ios => "native:mobile:ios",
            PlatformTag::Android => "native:mobile:android",
        }
    }

    /// The short name understood by [`PlatformTag::normalize`], if any.
    ///
    /// `None` for the generic device classes, which no raw name maps onto.
    pub fn short_name(&self) -> Option<&'static str> {
        match self {
            PlatformTag::Any => Some("*"),
            PlatformTag::Web => Some("web"),
            PlatformTag::Native => Some("native"),
            PlatformTag::Desktop => None,
            PlatformTag::Windows => Some("windows"),
            PlatformTag::Macos => Some("macos"),
            PlatformTag::Linux => Some("linux"),
            PlatformTag::Mobile => None,
            PlatformTag::Ios => Some("ios"),
            PlatformTag::Android => Some("android"),
        }
    }

    /// One step up the hierarchy, or `None` at a root.
    pub fn parent(&self) -> Option<PlatformTag> {
        match self {
            PlatformTag::Any | PlatformTag::Web | PlatformTag::Native => None,
            PlatformTag::Desktop | PlatformTag::Mobile => Some(PlatformTag::Native),
            PlatformTag::Windows | PlatformTag::Macos | PlatformTag::Linux => {
                Some(PlatformTag::Desktop)
            }
            PlatformTag::Ios | PlatformTag::Android => Some(PlatformTag::Mobile),
        }
    }

    /// Whether this tag accepts `other`.
    ///
    /// The wildcard accepts everything, every tag accepts itself, and an
    /// ancestor accepts its descendants: `native` accepts
    /// `native:desktop:windows`, while `web` accepts only `web`.
    pub fn matches(&self, other: PlatformTag) -> bool {
        if *self == PlatformTag::Any || *self == other {
            return true;
        }
        let mut ancestor = other.parent();
        while let Some(tag) = ancestor {
            if tag == *self {
                return true;
            }
            ancestor = tag.parent();
        }
        false
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformTag {
    type Err = TagParseError;

    /// Strict parse of a canonical tag spelling.
    ///
    /// Unlike [`PlatformTag::normalize`] this rejects anything outside the
    /// ten canonical spellings, so typos in configuration fail loudly
    /// instead of silently becoming `native`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlatformTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TagParseError { raw: s.to_string() })
    }
}

impl Serialize for PlatformTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlatformTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_exact_mappings() {
        assert_eq!(PlatformTag::normalize("*"), PlatformTag::Any);
        assert_eq!(PlatformTag::normalize("web"), PlatformTag::Web);
        assert_eq!(PlatformTag::normalize("native"), PlatformTag::Native);
        assert_eq!(PlatformTag::normalize("windows"), PlatformTag::Windows);
        assert_eq!(PlatformTag::normalize("macos"), PlatformTag::Macos);
        assert_eq!(PlatformTag::normalize("linux"), PlatformTag::Linux);
        assert_eq!(PlatformTag::normalize("ios"), PlatformTag::Ios);
        assert_eq!(PlatformTag::normalize("android"), PlatformTag::Android);
    }

    #[test]
    fn normalize_falls_back_to_native() {
        assert_eq!(PlatformTag::normalize(""), PlatformTag::Native);
        assert_eq!(PlatformTag::normalize("freebsd"), PlatformTag::Native);
        assert_eq!(PlatformTag::normalize("desktop"), PlatformTag::Native);
        // Canonical spellings are not short names.
        assert_eq!(
            PlatformTag::normalize("native:desktop:windows"),
            PlatformTag::Native
        );
    }

    #[test]
    fn normalize_is_case_sensitive() {
        assert_eq!(PlatformTag::normalize("Windows"), PlatformTag::Native);
        assert_eq!(PlatformTag::normalize("WEB"), PlatformTag::Native);
        assert_eq!(PlatformTag::normalize(" web"), PlatformTag::Native);
    }

    #[test]
    fn normalize_is_deterministic() {
        for raw in ["windows", "", "anything-at-all", "*"] {
            assert_eq!(PlatformTag::normalize(raw), PlatformTag::normalize(raw));
        }
    }

    #[test]
    fn generic_classes_are_unreachable_from_normalize() {
        for tag in PlatformTag::ALL {
            let produced = tag.short_name().map(PlatformTag::normalize);
            match tag {
                PlatformTag::Desktop | PlatformTag::Mobile => assert_eq!(produced, None),
                _ => assert_eq!(produced, Some(tag)),
            }
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for tag in PlatformTag::ALL {
            let parsed: PlatformTag = tag.as_str().parse().unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn from_str_rejects_non_canonical() {
        assert!("windows".parse::<PlatformTag>().is_err());
        assert!("native:desktop:".parse::<PlatformTag>().is_err());
        assert!("".parse::<PlatformTag>().is_err());
    }

    #[test]
    fn serde_uses_canonical_strings() {
        let json = serde_json::to_string(&PlatformTag::Macos).unwrap();
        assert_eq!(json, "\"native:desktop:macos\"");
        let tag: PlatformTag = serde_json::from_str("\"native:mobile\"").unwrap();
        assert_eq!(tag, PlatformTag::Mobile);
        assert!(serde_json::from_str::<PlatformTag>("\"macos\"").is_err());
    }

    #[test]
    fn parent_chain() {
        assert_eq!(PlatformTag::Windows.parent(), Some(PlatformTag::Desktop));
        assert_eq!(PlatformTag::Desktop.parent(), Some(PlatformTag::Native));
        assert_eq!(PlatformTag::Native.parent(), None);
        assert_eq!(PlatformTag::Android.parent(), Some(PlatformTag::Mobile));
        assert_eq!(PlatformTag::Web.parent(), None);
        assert_eq!(PlatformTag::Any.parent(), None);
    }

    #[test]
    fn matches_hierarchy() {
        assert!(PlatformTag::Any.matches(PlatformTag::Web));
        assert!(PlatformTag::Any.matches(PlatformTag::Android));
        assert!(PlatformTag::Native.matches(PlatformTag::Windows));
        assert!(PlatformTag::Desktop.matches(PlatformTag::Macos));
        assert!(PlatformTag::Mobile.matches(PlatformTag::Ios));
        assert!(PlatformTag::Web.matches(PlatformTag::Web));

        assert!(!PlatformTag::Web.matches(PlatformTag::Native));
        assert!(!PlatformTag::Desktop.matches(PlatformTag::Ios));
        assert!(!PlatformTag::Windows.matches(PlatformTag::Desktop));
        assert!(!PlatformTag::Linux.matches(PlatformTag::Any));
    }
}
