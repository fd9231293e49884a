//! Locale-aware digit grouping for displayed numbers.

use serde::{Deserialize, Serialize};

/// Number formatting convention for displayed experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumberLocale {
    /// `1,234,500`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `1.234.500`
    #[serde(rename = "de-DE")]
    DeDe,
    /// `1 234 500` with narrow no-break spaces
    #[serde(rename = "fr-FR")]
    FrFr,
    /// `12,34,500` (lakh grouping)
    #[serde(rename = "en-IN")]
    EnIn,
    /// `1234500`
    #[serde(rename = "plain")]
    Plain,
}

/// Unrecognised locale name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale {0:?} (expected one of: en-US, de-DE, fr-FR, en-IN, plain)")]
pub struct UnknownLocale(pub String);

impl NumberLocale {
    /// Every supported locale.
    pub const ALL: [NumberLocale; 5] = [
        NumberLocale::EnUs,
        NumberLocale::DeDe,
        NumberLocale::FrFr,
        NumberLocale::EnIn,
        NumberLocale::Plain,
    ];

    /// Locale tag, e.g. `"en-US"`.
    pub fn tag(self) -> &'static str {
        match self {
            NumberLocale::EnUs => "en-US",
            NumberLocale::DeDe => "de-DE",
            NumberLocale::FrFr => "fr-FR",
            NumberLocale::EnIn => "en-IN",
            NumberLocale::Plain => "plain",
        }
    }

    fn separator(self) -> Option<char> {
        match self {
            NumberLocale::EnUs | NumberLocale::EnIn => Some(','),
            NumberLocale::DeDe => Some('.'),
            NumberLocale::FrFr => Some('\u{202F}'),
            NumberLocale::Plain => None,
        }
    }

    /// Group the digits of `value`.
    pub fn group(self, value: u64) -> String {
        let digits = value.to_string();
        let Some(sep) = self.separator() else {
            return digits;
        };

        // Group sizes counted from the right: the first group is always 3,
        // then 3 (western) or 2 (lakh).
        let rest = if self == NumberLocale::EnIn { 2 } else { 3 };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = digits.len();
        let mut size = 3;
        while end > 0 {
            let start = end.saturating_sub(size);
            groups.push(&digits[start..end]);
            end = start;
            size = rest;
        }

        groups.reverse();
        let mut out = String::with_capacity(digits.len() + groups.len() * sep.len_utf8());
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.push_str(group);
        }
        out
    }
}

impl std::fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for NumberLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberLocale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_western_grouping() {
        assert_eq!(NumberLocale::EnUs.group(0), "0");
        assert_eq!(NumberLocale::EnUs.group(999), "999");
        assert_eq!(NumberLocale::EnUs.group(1000), "1,000");
        assert_eq!(NumberLocale::EnUs.group(1234), "1,234");
        assert_eq!(NumberLocale::EnUs.group(1234500), "1,234,500");
        assert_eq!(NumberLocale::DeDe.group(1234500), "1.234.500");
        assert_eq!(NumberLocale::FrFr.group(1234500), "1\u{202F}234\u{202F}500");
        assert_eq!(NumberLocale::EnUs.group(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(NumberLocale::EnIn.group(999), "999");
        assert_eq!(NumberLocale::EnIn.group(1234), "1,234");
        assert_eq!(NumberLocale::EnIn.group(1234500), "12,34,500");
        assert_eq!(NumberLocale::EnIn.group(123456789), "12,34,56,789");
    }

    #[test]
    fn test_plain() {
        assert_eq!(NumberLocale::Plain.group(1234500), "1234500");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("en-US".parse::<NumberLocale>().unwrap(), NumberLocale::EnUs);
        assert_eq!("DE-de".parse::<NumberLocale>().unwrap(), NumberLocale::DeDe);
        assert_eq!(
            "xx".parse::<NumberLocale>(),
            Err(UnknownLocale("xx".to_string()))
        );
        assert_eq!(NumberLocale::default(), NumberLocale::EnUs);
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&NumberLocale::FrFr).unwrap();
        assert_eq!(json, "\"fr-FR\"");
        let back: NumberLocale = serde_json::from_str("\"en-IN\"").unwrap();
        assert_eq!(back, NumberLocale::EnIn);
    }
}
