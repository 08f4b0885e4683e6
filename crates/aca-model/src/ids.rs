use std::fmt;
use std::str::FromStr;

use crate::ValidationError;

/// Identifier assigned to one logical checklist rule.
///
/// Rendered as `ACA-` followed by the counter zero-padded to three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(u16);

impl RuleId {
    pub const PREFIX: &'static str = "ACA-";
    /// Digits in the rendered counter.
    pub const WIDTH: usize = 3;
    /// Largest counter that fits in [`Self::WIDTH`] digits.
    pub const MAX: u16 = 999;

    pub const FIRST: Self = Self(0);

    /// Build an id from a zero-based counter, rejecting values that would not
    /// fit the three-digit format.
    pub fn new(counter: usize) -> Result<Self, ValidationError> {
        match u16::try_from(counter) {
            Ok(value) if value <= Self::MAX => Ok(Self(value)),
            _ => Err(ValidationError::IdOverflow {
                position: counter,
                counter,
                max: Self::MAX,
            }),
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// The following id, or `None` once the format is exhausted.
    pub fn next(self) -> Option<Self> {
        (self.0 < Self::MAX).then(|| Self(self.0 + 1))
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:0width$}", Self::PREFIX, self.0, width = Self::WIDTH)
    }
}

impl FromStr for RuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidRuleId(s.to_string());
        let trimmed = s.trim();
        let digits = trimmed
            .get(..Self::PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(Self::PREFIX))
            .map(|_| &trimmed[Self::PREFIX.len()..])
            .ok_or_else(invalid)?;
        if digits.len() != Self::WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u16 = digits.parse().map_err(|_| invalid())?;
        Ok(Self(value))
    }
}

impl serde::Serialize for RuleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for RuleId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_zero_padded() {
        assert_eq!(RuleId::FIRST.to_string(), "ACA-000");
        assert_eq!(RuleId::new(7).unwrap().to_string(), "ACA-007");
        assert_eq!(RuleId::new(41).unwrap().to_string(), "ACA-041");
        assert_eq!(RuleId::new(999).unwrap().to_string(), "ACA-999");
    }

    #[test]
    fn rejects_counter_past_three_digits() {
        let err = RuleId::new(1000).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::IdOverflow {
                counter: 1000,
                max: 999,
                ..
            }
        ));
    }

    #[test]
    fn next_stops_at_max() {
        assert_eq!(RuleId::FIRST.next(), Some(RuleId::new(1).unwrap()));
        assert_eq!(RuleId::new(999).unwrap().next(), None);
    }

    #[test]
    fn parses_rendered_form() {
        assert_eq!("ACA-012".parse::<RuleId>().unwrap().value(), 12);
        assert_eq!(" aca-000 ".parse::<RuleId>().unwrap(), RuleId::FIRST);
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "ACA-", "ACA-12", "ACA-1000", "ACA-01x", "XYZ-001", "001"] {
            assert!(
                matches!(
                    text.parse::<RuleId>(),
                    Err(ValidationError::InvalidRuleId(_))
                ),
                "{text:?} should not parse"
            );
        }
    }
}
