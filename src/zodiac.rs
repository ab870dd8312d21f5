//! The twelve zodiac signs in canonical order.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All signs, indexed by `Sign::index`.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// 0-based position in the canonical order (Aries = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping around the zodiac.
    #[inline]
    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    /// Look up a sign by its full name.
    ///
    /// The match is exact and case-sensitive: `"leo"` and `"Leo "` are not signs.
    pub fn from_name(name: &str) -> Option<Sign> {
        Sign::ALL.into_iter().find(|sign| sign.name() == name)
    }

    /// The sign `steps` places after this one, wrapping after Pisces.
    #[inline]
    pub fn offset(self, steps: usize) -> Sign {
        Sign::from_index(self.index() + steps % 12)
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Three-letter label drawn inside a house.
    pub fn abbr(self) -> &'static str {
        match self {
            Sign::Aries => "Ari",
            Sign::Taurus => "Tau",
            Sign::Gemini => "Gem",
            Sign::Cancer => "Can",
            Sign::Leo => "Leo",
            Sign::Virgo => "Vir",
            Sign::Libra => "Lib",
            Sign::Scorpio => "Sco",
            Sign::Sagittarius => "Sag",
            Sign::Capricorn => "Cap",
            Sign::Aquarius => "Aqu",
            Sign::Pisces => "Pis",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_index() {
        for (i, sign) in Sign::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Sign::from_index(i), *sign);
        }
        assert_eq!(Sign::Virgo.index(), 5);
    }

    #[test]
    fn from_name_is_exact_and_case_sensitive() {
        assert_eq!(Sign::from_name("Sagittarius"), Some(Sign::Sagittarius));
        assert_eq!(Sign::from_name("sagittarius"), None);
        assert_eq!(Sign::from_name("Leo "), None);
        assert_eq!(Sign::from_name("Zzz"), None);
        assert_eq!(Sign::from_name(""), None);
    }

    #[test]
    fn offset_wraps_after_pisces() {
        assert_eq!(Sign::Pisces.offset(1), Sign::Aries);
        assert_eq!(Sign::Capricorn.offset(3), Sign::Aries);
        assert_eq!(Sign::Leo.offset(12), Sign::Leo);
        assert_eq!(Sign::Aries.offset(25), Sign::Taurus);
    }

    #[test]
    fn abbreviations_are_three_letters_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for sign in Sign::ALL {
            assert_eq!(sign.abbr().len(), 3);
            assert!(sign.name().starts_with(sign.abbr()));
            assert!(seen.insert(sign.abbr()));
        }
    }

    #[test]
    fn serde_uses_full_names() {
        let json = serde_json::to_string(&Sign::Aquarius).unwrap();
        assert_eq!(json, "\"Aquarius\"");
        let sign: Sign = serde_json::from_str("\"Cancer\"").unwrap();
        assert_eq!(sign, Sign::Cancer);
    }
}
