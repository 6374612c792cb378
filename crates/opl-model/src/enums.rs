//! Type-safe enumerations for competition categoricals.
//!
//! Event and equipment codes arrive as free-form strings in source files.
//! Known codes map to dedicated variants; anything else is preserved in an
//! `Other` variant so unrecognized categories still flow through filtering
//! instead of erroring out.

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One of the three lift categories of a powerlifting meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

impl Lift {
    /// All lifts in competition order.
    pub const ALL: [Lift; 3] = [Lift::Squat, Lift::Bench, Lift::Deadlift];

    /// Canonical name, matching the source-file column prefix
    /// (`Squat1Kg`, `Best3BenchKg`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Lift::Squat => "Squat",
            Lift::Bench => "Bench",
            Lift::Deadlift => "Deadlift",
        }
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Competition event code: which lifts were contested.
///
/// `SBD` is a full three-lift meet, `B` is bench-only. Other codes
/// (`SB`, `BD`, single-lift meets) are carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventCode {
    /// Squat-Bench-Deadlift (full power).
    Sbd,
    /// Bench-only.
    BenchOnly,
    /// Any other event code, preserved verbatim.
    Other(String),
}

impl EventCode {
    /// Parse a source code; never fails, unknown codes become `Other`.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "SBD" => EventCode::Sbd,
            "B" => EventCode::BenchOnly,
            _ => EventCode::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventCode::Sbd => "SBD",
            EventCode::BenchOnly => "B",
            EventCode::Other(code) => code,
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EventCode::parse(s))
    }
}

/// Equipment category of a competition entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Equipment {
    Raw,
    Wraps,
    SinglePly,
    MultiPly,
    Unlimited,
    Straps,
    /// Any other equipment label, preserved verbatim.
    Other(String),
}

impl Equipment {
    /// Parse a source label; never fails, unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "raw" => Equipment::Raw,
            "wraps" => Equipment::Wraps,
            "single-ply" => Equipment::SinglePly,
            "multi-ply" => Equipment::MultiPly,
            "unlimited" => Equipment::Unlimited,
            "straps" => Equipment::Straps,
            _ => Equipment::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Equipment::Raw => "Raw",
            Equipment::Wraps => "Wraps",
            Equipment::SinglePly => "Single-ply",
            Equipment::MultiPly => "Multi-ply",
            Equipment::Unlimited => "Unlimited",
            Equipment::Straps => "Straps",
            Equipment::Other(label) => label,
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Equipment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Equipment::parse(s))
    }
}
