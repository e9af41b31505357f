use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// Filing forms that carry XBRL facts. Amendments are distinct variants on
/// purpose: observation matching is exact, so "10-K/A" never satisfies a
/// request for "10-K".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "String")]
pub enum ReportType {
    Form10K,
    Form10KA,
    Form10Q,
    Form10QA,
    Form8K,
    Form6K,
    Form20F,
    Form40F,
    /// Upper-cased on parse; registry form strings are uppercase.
    Other(String),
}

impl TryFrom<String> for ReportType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ReportType::from_str(&s)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Form10K => write!(f, "10-K"),
            ReportType::Form10KA => write!(f, "10-K/A"),
            ReportType::Form10Q => write!(f, "10-Q"),
            ReportType::Form10QA => write!(f, "10-Q/A"),
            ReportType::Form8K => write!(f, "8-K"),
            ReportType::Form6K => write!(f, "6-K"),
            ReportType::Form20F => write!(f, "20-F"),
            ReportType::Form40F => write!(f, "40-F"),
            ReportType::Other(s) => write!(f, "{}", s),
        }
    }
}

pub static REPORT_TYPES: Lazy<String> = Lazy::new(|| {
    ReportType::iter()
        .filter(|t| !matches!(t, ReportType::Other(_)))
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
});

impl ReportType {
    pub fn list_types() -> &'static str {
        &REPORT_TYPES
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<ReportType, String> {
        match s.to_uppercase().as_str() {
            "10-K" => Ok(ReportType::Form10K),
            "10-K/A" => Ok(ReportType::Form10KA),
            "10-Q" => Ok(ReportType::Form10Q),
            "10-Q/A" => Ok(ReportType::Form10QA),
            "8-K" => Ok(ReportType::Form8K),
            "6-K" => Ok(ReportType::Form6K),
            "20-F" => Ok(ReportType::Form20F),
            "40-F" => Ok(ReportType::Form40F),
            other => Ok(ReportType::Other(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_is_case_insensitive_for_known_forms() {
        assert_eq!("10-k".parse::<ReportType>().unwrap(), ReportType::Form10K);
        assert_eq!("10-Q".parse::<ReportType>().unwrap(), ReportType::Form10Q);
    }

    #[test]
    fn amendments_stay_distinct() {
        let amended = "10-K/A".parse::<ReportType>().unwrap();
        assert_eq!(amended, ReportType::Form10KA);
        assert_ne!(amended.to_string(), ReportType::Form10K.to_string());
    }

    #[test]
    fn unknown_forms_round_trip_through_other() {
        let other = "S-1".parse::<ReportType>().unwrap();
        assert_eq!(other, ReportType::Other("S-1".to_string()));
        assert_eq!(other.to_string(), "S-1");
    }

    #[test]
    fn unknown_forms_are_uppercased_like_known_ones() {
        // Registry form strings are uppercase; a lowercase fallback could
        // never match one under exact-equality filtering.
        let other = "10-kt".parse::<ReportType>().unwrap();
        assert_eq!(other, ReportType::Other("10-KT".to_string()));
        assert_eq!(other.to_string(), "10-KT");
    }

    #[test]
    fn list_types_names_every_known_form() {
        let listing = ReportType::list_types();
        for form in ["10-K", "10-K/A", "10-Q", "10-Q/A", "8-K", "6-K", "20-F", "40-F"] {
            assert!(listing.contains(form), "missing {}", form);
        }
        assert!(!listing.contains("Other"));
    }
}
