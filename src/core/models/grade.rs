//! Letter grade scale
//!
//! The grade scale is a fixed, process-wide mapping from letter grade to
//! grade-point value on a 4.0 scale. Plus/minus steps are worth 0.3 points,
//! except A+ which caps at 4.0.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade on the standard 4.0 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A+ (4.0)
    #[serde(rename = "A+")]
    APlus,
    /// A (4.0)
    #[serde(rename = "A")]
    A,
    /// A- (3.7)
    #[serde(rename = "A-")]
    AMinus,
    /// B+ (3.3)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.0)
    #[serde(rename = "B")]
    B,
    /// B- (2.7)
    #[serde(rename = "B-")]
    BMinus,
    /// C+ (2.3)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.0)
    #[serde(rename = "C")]
    C,
    /// C- (1.7)
    #[serde(rename = "C-")]
    CMinus,
    /// D+ (1.3)
    #[serde(rename = "D+")]
    DPlus,
    /// D (1.0)
    #[serde(rename = "D")]
    D,
    /// F (0.0)
    #[serde(rename = "F")]
    F,
}

/// All grades in scale order, highest first
pub const GRADE_SCALE: [Grade; 12] = [
    Grade::APlus,
    Grade::A,
    Grade::AMinus,
    Grade::BPlus,
    Grade::B,
    Grade::BMinus,
    Grade::CPlus,
    Grade::C,
    Grade::CMinus,
    Grade::DPlus,
    Grade::D,
    Grade::F,
];

impl Grade {
    /// Get the grade-point value for this grade
    ///
    /// # Returns
    /// A value in [0.0, 4.0]
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Get the letter representation (e.g., "B+")
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            other => Err(format!("Unknown letter grade: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_mapping() {
        assert!((Grade::APlus.points() - 4.0).abs() < f64::EPSILON);
        assert!((Grade::A.points() - 4.0).abs() < f64::EPSILON);
        assert!((Grade::AMinus.points() - 3.7).abs() < f64::EPSILON);
        assert!((Grade::BPlus.points() - 3.3).abs() < f64::EPSILON);
        assert!((Grade::B.points() - 3.0).abs() < f64::EPSILON);
        assert!((Grade::F.points() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_is_complete_and_ordered() {
        assert_eq!(GRADE_SCALE.len(), 12);

        // Values never increase as we walk down the scale
        for pair in GRADE_SCALE.windows(2) {
            assert!(pair[0].points() >= pair[1].points());
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for grade in GRADE_SCALE {
            let parsed: Grade = grade.letter().parse().expect("parse letter");
            assert_eq!(parsed, grade);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("b+".parse::<Grade>(), Ok(Grade::BPlus));
        assert_eq!(" f ".parse::<Grade>(), Ok(Grade::F));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("E".parse::<Grade>().is_err());
        assert!("A++".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }
}
